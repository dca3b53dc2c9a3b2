// SPDX-License-Identifier: MIT OR ISC
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::ResourceIoError;
use crate::introspector::{
    Introspector,
    NamesLoaded,
    BlankLinesDropped,
    NameEvicted,
    NamesSaved,
};
use crate::types::{Eviction, NameList, SaveMode, StoreConfig};

/// All access to the names file goes through here.
#[derive(Debug, Clone)]
pub struct NameStore {
    path: PathBuf,
    save_mode: SaveMode,
}
impl NameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            save_mode: SaveMode::default(),
        }
    }
    pub fn with_config(cfg: StoreConfig) -> Self {
        Self {
            path: cfg.path,
            save_mode: cfg.save_mode,
        }
    }
    pub fn with_save_mode(mut self, save_mode: SaveMode) -> Self {
        self.save_mode = save_mode;
        self
    }
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line of the file, dropping the blank and whitespace-only ones.
    pub fn load<'a>(&self, is: &mut Introspector<'a>) -> Result<NameList, ResourceIoError> {
        let text = fs::read_to_string(&self.path).map_err(|source|ResourceIoError::Read {
            path: self.path.clone(),
            source,
        })?;
        let mut names = NameList::new();
        let mut dropped = Vec::new();
        let mut lines_read = 0;
        for (i, line) in split_lines(&text).into_iter().enumerate() {
            lines_read += 1;
            if !names.push(line) {
                dropped.push(i + 1);
            }
        }
        is.event(||BlankLinesDropped{ line_numbers: dropped });
        is.event(||NamesLoaded{
            path: self.path.clone(),
            lines_read,
            names_kept: names.len(),
        });
        Ok(names)
    }

    /// Replace the file contents with one line per name.
    pub fn save<'a>(&self, names: &NameList, is: &mut Introspector<'a>) -> Result<(), ResourceIoError> {
        let res = match self.save_mode {
            SaveMode::Overwrite => {
                fs::File::create(&self.path).and_then(|mut f|write_names(&mut f, names))
            }
            SaveMode::AtomicRename => self.save_atomic(names),
        };
        res.map_err(|source|ResourceIoError::Write {
            path: self.path.clone(),
            source,
        })?;
        is.event(||NamesSaved{
            path: self.path.clone(),
            names_written: names.len(),
            mode: self.save_mode,
        });
        Ok(())
    }

    fn save_atomic(&self, names: &NameList) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        write_names(tmp.as_file_mut(), names)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e|e.error)?;
        Ok(())
    }
}

/// Split text into lines ended by `\r\n`, `\n` or a lone `\r`.
/// A terminator at the very end does not start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            None => {
                out.push(rest);
                break;
            }
            Some(i) => {
                out.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
        }
    }
    out
}

fn write_names(w: &mut impl Write, names: &NameList) -> io::Result<()> {
    let mut w = io::BufWriter::new(w);
    for n in names.iter() {
        w.write_all(n.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

/// Remove one uniformly chosen name from the list.
/// Returns None if the list was already empty.
pub fn evict_random<'a, R: Rng + ?Sized>(
    names: &mut NameList,
    rng: &mut R,
    is: &mut Introspector<'a>,
) -> Option<Eviction> {
    if names.is_empty() {
        return None;
    }
    let list_len = names.len();
    let index = rng.random_range(0..list_len);
    let name = names.remove(index);
    is.event(||NameEvicted{ index, name: name.clone(), list_len });
    Some(Eviction{ index, name })
}
