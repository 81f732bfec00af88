//! Flat and recursive directory listing
//!
//! Both the tree copier and the eraser are driven by these listings, so the
//! filter rules here (dot entries, symlink classification) define what those
//! operations can see.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{FsError, FsResult};
use crate::helpers::paths;

/// Ordering applied to listing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Digit runs compare by numeric value (`img2` before `img10`).
    Natural,
    /// Natural order with ASCII case folded.
    NaturalCaseInsensitive,
}

/// Filters and output shape for [`list_plain`].
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Include plain files.
    pub files: bool,
    /// Include subdirectories.
    pub directories: bool,
    /// Include entries whose name starts with a dot.
    pub dot_entries: bool,
    /// Emit full paths instead of bare names.
    pub absolute: bool,
    /// Ordering of the result; `None` keeps readdir order.
    pub sort: Option<SortOrder>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            files: true,
            directories: true,
            dot_entries: false,
            absolute: false,
            sort: Some(SortOrder::Natural),
        }
    }
}

/// List the immediate children of a directory.
///
/// `.` and `..` never appear. Entries are classified file-or-directory after
/// following symlinks; a broken symlink counts as a file. When both include
/// flags are off the result is empty without touching the filesystem.
pub fn list_plain(dir: &Path, opts: &ListOptions) -> FsResult<Vec<String>> {
    if !opts.files && !opts.directories {
        return Ok(Vec::new());
    }

    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| FsError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FsError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        if !opts.dot_entries && name.starts_with('.') {
            continue;
        }

        // A broken symlink has no metadata and classifies as a file.
        let is_dir = fs::metadata(entry.path())
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        let include = if is_dir { opts.directories } else { opts.files };
        if include {
            names.push(name);
        }
    }

    match opts.sort {
        Some(SortOrder::Natural) => names.sort_by(|a, b| natural_cmp(a, b)),
        Some(SortOrder::NaturalCaseInsensitive) => {
            names.sort_by(|a, b| natural_cmp_ignore_case(a, b));
        }
        None => {}
    }

    if opts.absolute {
        let base = dir.to_string_lossy();
        names = names
            .into_iter()
            .map(|name| paths::join([base.as_ref(), name.as_str()]))
            .collect();
    }

    Ok(names)
}

/// Recursively list the leaf entries under a directory.
///
/// The walk is rooted at the resolved real path of `dir` and relative output
/// is relative to that real path. Directories are descended into but never
/// yielded; files and symlinks are leaves. Symlinks are not followed, so a
/// symlink to a directory stays a leaf and link cycles cannot occur. Unless
/// `dot_entries` is set, dot-named entries below the root are pruned along
/// with everything beneath them. Output is in case-insensitive natural order.
pub fn list_recursive(dir: &Path, dot_entries: bool, absolute: bool) -> FsResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let base = fs::canonicalize(dir).map_err(|source| FsError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    // min_depth(1) keeps the walk root itself out of the iterator, so the
    // dot filter only ever sees entries below it.
    let walker = WalkDir::new(&base)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| dot_entries || !entry.file_name().to_string_lossy().starts_with('.'));

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map_or_else(|| base.clone(), Path::to_path_buf);
            FsError::Unreadable {
                path,
                source: err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("walk failed")),
            }
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = if absolute {
            entry.path().to_string_lossy().into_owned()
        } else {
            entry
                .path()
                .strip_prefix(&base)
                .unwrap_or_else(|_| entry.path())
                .to_string_lossy()
                .into_owned()
        };
        found.push(path);
    }

    found.sort_by(|a, b| natural_cmp_ignore_case(a, b));
    Ok(found)
}

/// Compare two names so that runs of digits order by numeric value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_impl(a, b, false)
}

/// [`natural_cmp`] with ASCII case differences ignored.
pub fn natural_cmp_ignore_case(a: &str, b: &str) -> Ordering {
    natural_cmp_impl(a, b, true)
}

fn natural_cmp_impl(a: &str, b: &str, fold_case: bool) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (end_a, end_b) = (digit_run_end(a, i), digit_run_end(b, j));
            match compare_digit_runs(&a[i..end_a], &b[j..end_b]) {
                Ordering::Equal => (i, j) = (end_a, end_b),
                other => return other,
            }
        } else {
            let (ca, cb) = if fold_case {
                (a[i].to_ascii_lowercase(), b[j].to_ascii_lowercase())
            } else {
                (a[i], b[j])
            };
            match ca.cmp(&cb) {
                Ordering::Equal => (i, j) = (i + 1, j + 1),
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compare two runs of ASCII digits by numeric value without parsing them,
/// so arbitrarily long runs cannot overflow. Equal values order by leading
/// zeros (`07` before `7`).
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let zeros_a = a.iter().take_while(|c| **c == b'0').count();
    let zeros_b = b.iter().take_while(|c| **c == b'0').count();
    let (da, db) = (&a[zeros_a..], &b[zeros_b..]);

    da.len()
        .cmp(&db.len())
        .then_with(|| da.cmp(db))
        .then_with(|| zeros_b.cmp(&zeros_a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populated_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("img10.png"), "").unwrap();
        std::fs::write(dir.path().join("img2.png"), "").unwrap();
        std::fs::write(dir.path().join("img1.png"), "").unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        dir
    }

    #[test]
    fn test_list_plain_default_is_files_and_dirs_sorted() {
        let dir = populated_dir();
        let names = list_plain(dir.path(), &ListOptions::default()).unwrap();
        assert_eq!(names, ["img1.png", "img2.png", "img10.png", "sub"]);
    }

    #[test]
    fn test_list_plain_files_only() {
        let dir = populated_dir();
        let opts = ListOptions {
            directories: false,
            ..ListOptions::default()
        };
        let names = list_plain(dir.path(), &opts).unwrap();
        assert_eq!(names, ["img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn test_list_plain_directories_only() {
        let dir = populated_dir();
        let opts = ListOptions {
            files: false,
            ..ListOptions::default()
        };
        let names = list_plain(dir.path(), &opts).unwrap();
        assert_eq!(names, ["sub"]);
    }

    #[test]
    fn test_list_plain_nothing_included_skips_dir_check() {
        // Both include flags off short-circuits before the path is examined,
        // so even a missing directory yields an empty list.
        let opts = ListOptions {
            files: false,
            directories: false,
            ..ListOptions::default()
        };
        let names = list_plain(Path::new("/no/such/dir"), &opts).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_list_plain_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let err = list_plain(&file, &ListOptions::default()).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));

        let err = list_plain(&dir.path().join("missing"), &ListOptions::default()).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[test]
    fn test_list_plain_dot_entries() {
        let dir = populated_dir();
        let opts = ListOptions {
            dot_entries: true,
            ..ListOptions::default()
        };
        let names = list_plain(dir.path(), &opts).unwrap();
        assert_eq!(names, [".hidden", "img1.png", "img2.png", "img10.png", "sub"]);
    }

    #[test]
    fn test_list_plain_absolute_output() {
        let dir = populated_dir();
        let opts = ListOptions {
            directories: false,
            absolute: true,
            ..ListOptions::default()
        };
        let names = list_plain(dir.path(), &opts).unwrap();
        let expected = paths::join([dir.path().to_string_lossy().as_ref(), "img1.png"]);
        assert_eq!(names[0], expected);
    }

    #[test]
    fn test_list_plain_unsorted_keeps_everything() {
        let dir = populated_dir();
        let opts = ListOptions {
            sort: None,
            ..ListOptions::default()
        };
        let mut names = list_plain(dir.path(), &opts).unwrap();
        names.sort();
        assert_eq!(names, ["img1.png", "img10.png", "img2.png", "sub"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_plain_classifies_through_symlinks() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        let opts = ListOptions {
            files: false,
            ..ListOptions::default()
        };
        let dirs = list_plain(dir.path(), &opts).unwrap();
        assert_eq!(dirs, ["link", "real"]);

        let opts = ListOptions {
            directories: false,
            ..ListOptions::default()
        };
        let files = list_plain(dir.path(), &opts).unwrap();
        assert_eq!(files, ["dangling"]);
    }

    #[test]
    fn test_list_recursive_yields_leaves_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::create_dir_all(dir.path().join("sub/deep")).unwrap();
        std::fs::write(dir.path().join("sub/b.txt"), "").unwrap();
        std::fs::write(dir.path().join("sub/deep/c.txt"), "").unwrap();

        let found = list_recursive(dir.path(), false, false).unwrap();
        assert_eq!(found, ["a.txt", "sub/b.txt", "sub/deep/c.txt"]);
    }

    #[test]
    fn test_list_recursive_prunes_dot_subtrees() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("kept.txt"), "").unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/config"), "").unwrap();

        let found = list_recursive(dir.path(), false, false).unwrap();
        assert_eq!(found, ["kept.txt"]);

        let mut all = list_recursive(dir.path(), true, false).unwrap();
        all.sort();
        assert_eq!(all, [".git/config", ".hidden", "kept.txt"]);
    }

    #[test]
    fn test_list_recursive_absolute_output() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();

        let found = list_recursive(dir.path(), false, true).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("a.txt"));
        assert!(Path::new(&found[0]).is_absolute());
    }

    #[test]
    fn test_list_recursive_rejects_non_directory() {
        let dir = TempDir::new().unwrap();
        let err = list_recursive(&dir.path().join("missing"), false, false).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_recursive_does_not_follow_symlinks() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("real")).unwrap();
        std::fs::write(dir.path().join("real/inner.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let found = list_recursive(dir.path(), false, false).unwrap();
        // The link is a leaf; its target's contents appear only under "real".
        assert_eq!(found, ["link", "real/inner.txt"]);
    }

    #[test]
    fn test_natural_cmp_orders_numbers_by_value() {
        assert_eq!(natural_cmp("img2", "img10"), Ordering::Less);
        assert_eq!(natural_cmp("img10", "img2"), Ordering::Greater);
        assert_eq!(natural_cmp("img2", "img2"), Ordering::Equal);
        assert_eq!(natural_cmp("a2b", "a10a"), Ordering::Less);
        assert_eq!(natural_cmp("img", "img2"), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_leading_zeros() {
        assert_eq!(natural_cmp("img07", "img7"), Ordering::Less);
        assert_eq!(natural_cmp("img07", "img8"), Ordering::Less);
        assert_eq!(natural_cmp("img010", "img9"), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_huge_runs_do_not_overflow() {
        let a = format!("v{}", "9".repeat(40));
        let b = format!("v1{}", "0".repeat(40));
        assert_eq!(natural_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_natural_cmp_case_sensitivity() {
        assert_eq!(natural_cmp("Beta", "alpha"), Ordering::Less);
        assert_eq!(natural_cmp_ignore_case("Beta", "alpha"), Ordering::Greater);
        assert_eq!(natural_cmp_ignore_case("IMG2", "img10"), Ordering::Less);
    }
}
