// SPDX-License-Identifier: MIT OR ISC
use std::path::PathBuf;

/// The names read from the backing file, in file order, with blank lines removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}
impl NameList {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    pub fn as_slice(&self) -> &[String] {
        &self.names[..]
    }
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n|n.as_str())
    }
    /// Add a name unless it is blank or whitespace-only.
    /// Returns false if the name was dropped.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if is_blank(&name) {
            return false;
        }
        self.names.push(name);
        true
    }
    pub(crate) fn remove(&mut self, idx: usize) -> String {
        self.names.remove(idx)
    }
    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}
impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut out = NameList::new();
        for n in iter {
            out.push(n);
        }
        out
    }
}

/// True if nothing is left once Unicode whitespace is trimmed.
/// Non-breaking spaces count as blank, while a control character such as U+0001 does not.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// The grouping key for a name: upper-cased and trimmed.
pub fn normalize(name: &str) -> String {
    name.to_uppercase().trim().to_owned()
}

/// The entry which was removed by a random eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eviction {
    /// Position of the entry in the list before it was removed
    pub index: usize,
    /// The name exactly as it appeared in the file
    pub name: String,
}

/// Every normalized name sharing the highest number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winners {
    /// Normalized names, in order of first appearance
    pub names: Vec<String>,
    /// How many times each of them occurs
    pub count: u64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Truncate the file and write in place
    #[default]
    Overwrite,
    /// Write a sibling temporary file and rename it over the target
    AtomicRename,
}

/// Where the names live and how they get written back.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub save_mode: SaveMode,
}
