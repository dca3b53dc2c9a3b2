// SPDX-License-Identifier: MIT OR ISC
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The names file could not be read or written back.
///
/// A missing file, a directory in its place and a read-only location are all
/// reported through this one type.
#[derive(Debug, Error)]
pub enum ResourceIoError {
    #[error("failed to read names from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write names to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
impl ResourceIoError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ResourceIoError::Read { path, .. } => path,
            ResourceIoError::Write { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Resource(#[from] ResourceIoError),
    #[error("failed to write message")]
    Output(#[source] io::Error),
}
