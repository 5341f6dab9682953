//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default external telemetry feed URL
pub const DEFAULT_TELEMETRY_URL: &str =
    "https://api.cloudsensor.safeserveapp.com/api/Sensordata/latest-Sensor-data";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Backend endpoint settings
    pub api: ApiConfig,
    /// Polling settings
    pub poll: PollConfig,
    /// Alert notification settings
    pub alerts: AlertsConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Backend endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the compliance backend
    pub base_url: String,
    /// Full URL of the external telemetry feed
    pub telemetry_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            telemetry_url: DEFAULT_TELEMETRY_URL.to_string(),
        }
    }
}

/// Polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between polling cycles
    pub interval_seconds: u64,
}

impl PollConfig {
    /// Polling interval as a [`Duration`]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        // 240 s matches the production dashboard's refresh rate
        Self {
            interval_seconds: 240,
        }
    }
}

/// Alert notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    /// Whether breach cycles trigger an email notification
    pub enabled: bool,
    /// Administrator email address to notify
    pub recipient: Option<String>,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            recipient: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll.interval_seconds, 240);
        assert!(config.alerts.enabled);
        assert!(config.alerts.recipient.is_none());
        assert_eq!(config.api.telemetry_url, DEFAULT_TELEMETRY_URL);
    }

    #[test]
    fn test_poll_interval_duration() {
        let poll = PollConfig {
            interval_seconds: 60,
        };
        assert_eq!(poll.interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://backend.example.com"

            [alerts]
            recipient = "admin@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://backend.example.com");
        assert_eq!(config.api.telemetry_url, DEFAULT_TELEMETRY_URL);
        assert_eq!(config.poll.interval_seconds, 240);
        assert_eq!(config.alerts.recipient.as_deref(), Some("admin@example.com"));
    }
}
