//! Package descriptors
//!
//! What the host hands over per package event: the composer name, the
//! package type and an informational version.

use anyhow::{Context, Result};
use serde::Deserialize;

/// The package types this installer handles.
///
/// Anything outside these three composer type strings is not ours; parsing
/// rejects it at the boundary, so the rest of the crate never sees an
/// unknown type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PackageType {
    /// `sallycms-addon` - backend extension, may ship develop files.
    #[serde(rename = "sallycms-addon")]
    Addon,
    /// `sallycms-asset` - frontend-only asset bundle.
    #[serde(rename = "sallycms-asset")]
    Asset,
    /// `sallycms-app` - application living directly under `sally/`.
    #[serde(rename = "sallycms-app")]
    App,
}

impl PackageType {
    /// Parse a composer `type` string; unknown types are `None`.
    pub fn from_composer_type(composer_type: &str) -> Option<Self> {
        match composer_type {
            "sallycms-addon" => Some(Self::Addon),
            "sallycms-asset" => Some(Self::Asset),
            "sallycms-app" => Some(Self::App),
            _ => None,
        }
    }

    /// The composer `type` string for this package type.
    pub fn composer_type(&self) -> &'static str {
        match self {
            Self::Addon => "sallycms-addon",
            Self::Asset => "sallycms-asset",
            Self::App => "sallycms-app",
        }
    }
}

/// A package as described by its composer manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    /// Composer name, `vendor/project`.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PackageType,
    /// Informational only; carried for log lines.
    #[serde(default)]
    pub version: Option<String>,
}

impl Package {
    pub fn new(name: &str, kind: PackageType) -> Self {
        Self {
            name: name.to_string(),
            kind,
            version: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Parse a composer-style JSON manifest.
    pub fn from_manifest(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse package manifest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composer_type_roundtrip() {
        for kind in [PackageType::Addon, PackageType::Asset, PackageType::App] {
            assert_eq!(PackageType::from_composer_type(kind.composer_type()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_composer_type() {
        assert_eq!(PackageType::from_composer_type("library"), None);
        assert_eq!(PackageType::from_composer_type("sallycms-plugin"), None);
        assert_eq!(PackageType::from_composer_type(""), None);
    }

    #[test]
    fn test_manifest_parsing() {
        let pkg = Package::from_manifest(
            r#"{
                "name": "sallycms/image-resize",
                "type": "sallycms-addon",
                "version": "1.4.2",
                "description": "unused by us",
                "require": {"php": ">=5.3"}
            }"#,
        )
        .unwrap();

        assert_eq!(pkg.name, "sallycms/image-resize");
        assert_eq!(pkg.kind, PackageType::Addon);
        assert_eq!(pkg.version.as_deref(), Some("1.4.2"));
    }

    #[test]
    fn test_manifest_without_version() {
        let pkg = Package::from_manifest(r#"{"name": "a/b", "type": "sallycms-asset"}"#).unwrap();
        assert_eq!(pkg.kind, PackageType::Asset);
        assert!(pkg.version.is_none());
    }

    #[test]
    fn test_manifest_with_foreign_type_fails() {
        let err = Package::from_manifest(r#"{"name": "a/b", "type": "library"}"#);
        assert!(err.is_err());
    }
}
