//! Recursive tree copying
//!
//! The copier walks the source through [`list::list_plain`], so it sees the
//! same view of the tree as the other engine operations: no dot entries,
//! symlinks classified by their target.

use std::fs;
use std::path::Path;

use crate::error::{FsError, FsResult};
use crate::helpers::list::{self, ListOptions};

/// Mode bits applied to every copied file on Unix.
#[cfg(unix)]
const COPIED_FILE_MODE: u32 = 0o664;

/// Create a directory and all missing ancestors.
pub fn create_directory(path: &Path) -> FsResult<()> {
    fs::create_dir_all(path).map_err(|source| FsError::CreateFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Recursively copy the contents of `source` into `destination`.
///
/// `destination` and any missing ancestors are created first. Dot entries
/// are skipped. An existing destination file is left alone unless `overwrite`
/// is set. Best-effort: the first error aborts the walk and may leave a
/// partial tree behind.
pub fn copy_tree(source: &Path, destination: &Path, overwrite: bool) -> FsResult<()> {
    if !source.is_dir() {
        return Err(FsError::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    create_directory(destination)?;

    for name in list::list_plain(source, &ListOptions::default())? {
        let from = source.join(&name);
        let to = destination.join(&name);

        if from.is_dir() {
            copy_tree(&from, &to, overwrite)?;
        } else if from.is_file() {
            if overwrite || !to.exists() {
                fs::copy(&from, &to).map_err(|err| FsError::CopyFailed {
                    from: from.clone(),
                    to: to.clone(),
                    source: err,
                })?;
                set_copied_mode(&to);
            }
        }
        // A dangling symlink is neither and is skipped.
    }

    Ok(())
}

#[cfg(unix)]
fn set_copied_mode(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    // chmod failure is not fatal.
    let _ = fs::set_permissions(path, fs::Permissions::from_mode(COPIED_FILE_MODE));
}

#[cfg(not(unix))]
fn set_copied_mode(_path: &Path) {}
