//! View configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! asset_root = "images/"
//! copy_confirmation_ms = 2000
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::types::ActionKind;

/// Directory badge images are served from
pub const DEFAULT_ASSET_ROOT: &str = "images/";

/// How long the copy button shows its confirmation
pub const DEFAULT_COPY_CONFIRMATION_MS: u64 = 2000;

/// Settings shared by every client view
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientViewConfig {
    /// Prefix for badge image paths
    #[serde(default = "default_asset_root")]
    pub asset_root: String,

    /// Confirmation window of the copy button, in milliseconds
    #[serde(default = "default_copy_confirmation_ms")]
    pub copy_confirmation_ms: u64,
}

impl Default for ClientViewConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            copy_confirmation_ms: default_copy_confirmation_ms(),
        }
    }
}

fn default_asset_root() -> String {
    DEFAULT_ASSET_ROOT.to_string()
}

fn default_copy_confirmation_ms() -> u64 {
    DEFAULT_COPY_CONFIRMATION_MS
}

impl ClientViewConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn copy_confirmation(&self) -> Duration {
        Duration::from_millis(self.copy_confirmation_ms)
    }

    /// Badge image URL for store kinds, `None` for generic actions
    pub fn badge_url(&self, kind: &ActionKind) -> Option<String> {
        let file = kind.badge_file()?;
        let root = self.asset_root.as_str();

        if root.is_empty() || root.ends_with('/') {
            Some(format!("{root}{file}"))
        } else {
            Some(format!("{root}/{file}"))
        }
    }
}

/// Parse configuration, falling back to defaults when absent or invalid
pub fn load_config(content: Option<&str>) -> ClientViewConfig {
    let Some(content) = content else {
        debug!("No view config supplied, using defaults");
        return ClientViewConfig::default();
    };

    match ClientViewConfig::from_toml_str(content) {
        Ok(config) => {
            debug!("Loaded view config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("Failed to parse view config: {}", e);
            ClientViewConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientViewConfig::default();
        assert_eq!(config.asset_root, "images/");
        assert_eq!(config.copy_confirmation(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config = ClientViewConfig::from_toml_str("asset_root = \"/static\"").unwrap();
        assert_eq!(config.asset_root, "/static");
        assert_eq!(config.copy_confirmation_ms, 2000);
    }

    #[test]
    fn test_badge_url_joins_root() {
        let mut config = ClientViewConfig::default();
        assert_eq!(
            config.badge_url(&ActionKind::PlayStore).as_deref(),
            Some("images/google-play-us.svg")
        );

        config.asset_root = "/static".to_string();
        assert_eq!(
            config.badge_url(&ActionKind::Flathub).as_deref(),
            Some("/static/flathub-badge.svg")
        );

        config.asset_root = String::new();
        assert_eq!(
            config.badge_url(&ActionKind::FDroid).as_deref(),
            Some("fdroid-badge.png")
        );
    }

    #[test]
    fn test_badge_url_none_for_generic() {
        let config = ClientViewConfig::default();
        assert!(config.badge_url(&ActionKind::from("website")).is_none());
    }

    #[test]
    fn test_load_config_falls_back_on_error() {
        assert_eq!(load_config(None), ClientViewConfig::default());
        assert_eq!(
            load_config(Some("copy_confirmation_ms = \"soon\"")),
            ClientViewConfig::default()
        );
        assert_eq!(
            load_config(Some("copy_confirmation_ms = 500")).copy_confirmation_ms,
            500
        );
    }
}
