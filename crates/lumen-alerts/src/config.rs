//! Alert routing configuration
//!
//! Links and thresholds the router needs, loadable from a TOML file with
//! sensible defaults for every key.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Support form opened from the update-required alert
    pub support_form_url: Url,
    /// Account dashboard opened by the upgrade action
    pub account_dashboard_url: Url,
    /// Deep link into the connection settings pane
    pub connection_settings_url: Url,
    /// Minimum seconds between two server-maintenance notifications
    pub maintenance_notice_interval_secs: u64,
    /// Show the agent password help on first connection. Off on platforms
    /// whose prompt is self-explanatory.
    pub explain_agent_prompt: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            support_form_url: Url::parse("https://lumenvpn.io/support")
                .expect("default url is valid"),
            account_dashboard_url: Url::parse("https://account.lumenvpn.io/dashboard")
                .expect("default url is valid"),
            connection_settings_url: Url::parse("lumen-vpn://settings/connection")
                .expect("default url is valid"),
            maintenance_notice_interval_secs: 120,
            explain_agent_prompt: false,
        }
    }
}

impl AlertConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn maintenance_notice_interval(&self) -> Duration {
        Duration::from_secs(self.maintenance_notice_interval_secs)
    }
}
