//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = if let Some(path) = path {
            ConfigFile::load(path).ok()
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI base URL
    pub fn with_base_url(mut self, url: Option<String>) -> Self {
        if let Some(u) = url {
            self.config.api.base_url = u;
        }
        self
    }

    /// Override with CLI telemetry URL
    pub fn with_telemetry_url(mut self, url: Option<String>) -> Self {
        if let Some(u) = url {
            self.config.api.telemetry_url = u;
        }
        self
    }

    /// Override with CLI polling interval
    pub fn with_interval(mut self, interval_seconds: Option<u64>) -> Self {
        if let Some(i) = interval_seconds {
            self.config.poll.interval_seconds = i;
        }
        self
    }

    /// Override with CLI notification recipient
    pub fn with_recipient(mut self, recipient: Option<String>) -> Self {
        if let Some(r) = recipient {
            self.config.alerts.recipient = Some(r);
        }
        self
    }

    /// Disable alert notifications
    pub fn with_notifications_disabled(mut self, disabled: bool) -> Self {
        if disabled {
            self.config.alerts.enabled = false;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
