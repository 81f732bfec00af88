//! Install path resolution
//!
//! Maps a package descriptor to the subtree it occupies inside a SallyCMS
//! project, relative to the project root.

use crate::helpers::paths;
use crate::package::{Package, PackageType};

/// Relative install location per package type.
///
/// - addon -> `sally/addons/<name>`
/// - asset -> `sally/assets/<name>`
/// - app   -> `sally/<project>` (the name's last segment)
#[derive(Debug, Clone)]
pub struct InstallPathResolver {
    supported: Vec<PackageType>,
}

impl Default for InstallPathResolver {
    fn default() -> Self {
        Self {
            supported: vec![PackageType::Addon, PackageType::Asset, PackageType::App],
        }
    }
}

impl InstallPathResolver {
    /// A resolver limited to the given package types.
    pub fn with_supported(supported: Vec<PackageType>) -> Self {
        Self { supported }
    }

    /// Whether a composer `type` string belongs to this resolver.
    pub fn supports(&self, composer_type: &str) -> bool {
        PackageType::from_composer_type(composer_type)
            .is_some_and(|kind| self.supported.contains(&kind))
    }

    /// Relative install path for a package.
    pub fn resolve(&self, package: &Package) -> String {
        match package.kind {
            PackageType::Addon => paths::join(["sally", "addons", package.name.as_str()]),
            PackageType::Asset => paths::join(["sally", "assets", package.name.as_str()]),
            PackageType::App => paths::join(["sally", paths::last_segment(&package.name)]),
        }
    }
}
