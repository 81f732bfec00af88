//! Host-side configuration
//!
//! SallyCMS projects tune the installer through the `extra` block of their
//! own composer manifest. Everything here is advisory: a missing or broken
//! block falls back to the defaults.

use serde::Deserialize;

/// Flags read from the host project's `extra` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Mirror addon `develop/` files into the project's own `develop/` tree.
    #[serde(rename = "install-develop-files")]
    pub install_develop_files: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            install_develop_files: true,
        }
    }
}

impl InstallerConfig {
    /// Read the flags out of a composer `extra` value.
    ///
    /// Unknown keys are ignored; a malformed block yields the defaults.
    pub fn from_extra(extra: &serde_json::Value) -> Self {
        serde_json::from_value(extra.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_develop_files_default_on() {
        assert!(InstallerConfig::default().install_develop_files);
        assert!(InstallerConfig::from_extra(&json!({})).install_develop_files);
    }

    #[test]
    fn test_develop_files_can_be_disabled() {
        let cfg = InstallerConfig::from_extra(&json!({"install-develop-files": false}));
        assert!(!cfg.install_develop_files);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let cfg = InstallerConfig::from_extra(&json!({
            "branch-alias": {"dev-master": "0.9.x-dev"},
            "install-develop-files": true
        }));
        assert!(cfg.install_develop_files);
    }

    #[test]
    fn test_malformed_extra_falls_back_to_defaults() {
        assert!(InstallerConfig::from_extra(&json!(null)).install_develop_files);
        assert!(InstallerConfig::from_extra(&json!("nonsense")).install_develop_files);
        assert!(InstallerConfig::from_extra(&json!({"install-develop-files": "yes"})).install_develop_files);
    }
}
