//! Directory engine helpers
//!
//! The filesystem toolkit underneath the installer: path string handling,
//! directory listing, tree copying and tree removal. Everything here is
//! synchronous and works on the live filesystem; callers serialize access.
//!
//! ## Categories
//!
//! - **paths**: normalize, join, last_segment
//! - **list**: list_plain, list_recursive, natural ordering
//! - **copy**: create_directory, copy_tree
//! - **remove**: erase_contents, remove_directory

pub mod copy;
pub mod list;
pub mod paths;
pub mod remove;
