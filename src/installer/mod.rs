//! The install hook
//!
//! Receives package events from the surrounding package manager and runs the
//! SallyCMS-side housekeeping around them. The package files themselves are
//! placed and removed by that manager; this layer owns only the derived
//! state (public assets, static cache, develop mirrors, the access guard).

mod lifecycle;

use std::path::{Path, PathBuf};

use crate::config::InstallerConfig;
use crate::package::Package;
use crate::resolver::InstallPathResolver;

/// Post-install hook for SallyCMS packages.
pub struct SallyInstaller {
    root: PathBuf,
    resolver: InstallPathResolver,
    config: InstallerConfig,
}

impl SallyInstaller {
    /// Create an installer for the project at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            resolver: InstallPathResolver::default(),
            config: InstallerConfig::default(),
        }
    }

    /// Override the host configuration flags.
    pub fn with_config(mut self, config: InstallerConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether a composer `type` string is handled by this installer.
    pub fn supports(&self, composer_type: &str) -> bool {
        self.resolver.supports(composer_type)
    }

    /// Absolute install location of a package inside the project.
    pub fn install_path(&self, package: &Package) -> PathBuf {
        self.root.join(self.resolver.resolve(package))
    }

    /// Run the post-install housekeeping for a freshly installed package.
    pub fn install(&self, package: &Package) {
        lifecycle::post_install(&self.root, &self.install_path(package), package, &self.config);
    }

    /// Run the same housekeeping after a package update.
    pub fn update(&self, package: &Package) {
        lifecycle::post_install(&self.root, &self.install_path(package), package, &self.config);
    }

    /// Tear down the public artifacts of a removed package.
    pub fn remove(&self, package: &Package) {
        lifecycle::post_remove(&self.root, package);
    }

    /// The project root this installer serves.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
