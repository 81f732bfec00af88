//! Composer-style install engine for SallyCMS packages
//!
//! SallyCMS projects pull their addons, asset bundles and apps in as
//! packages. This crate maps each package type to its place in the project
//! tree and keeps the derived state around it fresh: public assets, the
//! static-file cache, mirrored develop files and the `.htaccess` guard.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use sally_installer::{Package, PackageType, SallyInstaller};
//!
//! let installer = SallyInstaller::new(PathBuf::from("/var/www/project"));
//! let package = Package::new("sallycms/image-resize", PackageType::Addon);
//!
//! assert!(installer.supports("sallycms-addon"));
//! println!("installs to {}", installer.install_path(&package).display());
//! installer.install(&package);
//! ```
//!
//! # Layout
//!
//! - addons -> `sally/addons/<name>`
//! - assets -> `sally/assets/<name>`
//! - apps   -> `sally/<project>` (last segment of the package name)
//!
//! Public files land under `data/dyn/public/<name>`; the static cache under
//! `data/dyn/public/sally/static-cache/` holds derived copies of them and is
//! wiped whenever its sources change.
//!
//! The directory engine underneath (listing, copying and erasing trees) is
//! exposed through [`helpers`] for callers that need the primitives
//! directly.

pub mod config;
pub mod error;
pub mod helpers;
mod installer;
pub mod output;
pub mod package;
pub mod resolver;

pub use config::InstallerConfig;
pub use error::{FsError, FsResult};
pub use installer::SallyInstaller;
pub use package::{Package, PackageType};
pub use resolver::InstallPathResolver;
