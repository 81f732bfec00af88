//! Directory engine error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the tree listing, copy and removal operations.
///
/// Every engine operation reports failure through one of these kinds instead
/// of panicking; callers inspect the kind and decide whether to abort the
/// larger install flow.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("cannot create directory {}: {source}", .path.display())]
    CreateFailed { path: PathBuf, source: io::Error },

    #[error("copy failed: {} -> {}: {source}", .from.display(), .to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("directory not fully cleared: {}", .path.display())]
    RemovalIncomplete { path: PathBuf },
}

pub type FsResult<T> = Result<T, FsError>;
