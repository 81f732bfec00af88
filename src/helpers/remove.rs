//! Child-first tree erasure and directory removal
//!
//! Deletion is the one engine operation that keeps going after individual
//! failures: every unlink is attempted, and success is judged afterwards by
//! re-listing what is left.

use std::fs;
use std::path::Path;

use crate::error::{FsError, FsResult};
use crate::helpers::list::{self, ListOptions};

/// Delete the contents of a directory, leaving the directory itself.
///
/// Missing or non-directory paths are a no-op. Recursive mode removes
/// child-first: subdirectory contents go before the subdirectory itself, and
/// symlinks are unlinked, never followed. Non-recursive mode unlinks only
/// direct file children. Individual removal errors are suppressed; the pass
/// fails with `RemovalIncomplete` when file entries survive it.
pub fn erase_contents(dir: &Path, recursive: bool) -> FsResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    if recursive {
        erase_recursive(dir);
    } else {
        let opts = ListOptions {
            directories: false,
            dot_entries: true,
            sort: None,
            ..ListOptions::default()
        };
        if let Ok(files) = list::list_plain(dir, &opts) {
            for name in files {
                let _ = fs::remove_file(dir.join(name));
            }
        }
    }

    ensure_no_files_left(dir)
}

/// Remove a directory entirely.
///
/// Missing or non-directory paths are a no-op. A non-empty directory is
/// refused unless `force` is set, in which case its contents are erased
/// first. Both the refusal and a directory that will not go away report
/// `RemovalIncomplete`.
pub fn remove_directory(dir: &Path, force: bool) -> FsResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let opts = ListOptions {
        dot_entries: true,
        sort: None,
        ..ListOptions::default()
    };
    let entries = list::list_plain(dir, &opts)?;

    if !entries.is_empty() {
        if !force {
            return Err(FsError::RemovalIncomplete {
                path: dir.to_path_buf(),
            });
        }
        erase_contents(dir, true)?;
    }

    fs::remove_dir(dir).map_err(|_| FsError::RemovalIncomplete {
        path: dir.to_path_buf(),
    })
}

fn erase_recursive(dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        // file_type() does not follow symlinks, so a link to a directory is
        // unlinked here instead of descended into.
        let is_real_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_real_dir {
            erase_recursive(&path);
            let _ = fs::remove_dir(&path);
        } else {
            let _ = fs::remove_file(&path);
        }
    }
}

/// Re-list surviving file entries (dot entries included); any survivor means
/// the erase did not finish.
fn ensure_no_files_left(dir: &Path) -> FsResult<()> {
    let opts = ListOptions {
        directories: false,
        dot_entries: true,
        sort: None,
        ..ListOptions::default()
    };
    let left = list::list_plain(dir, &opts)?;
    if left.is_empty() {
        Ok(())
    } else {
        Err(FsError::RemovalIncomplete {
            path: dir.to_path_buf(),
        })
    }
}
