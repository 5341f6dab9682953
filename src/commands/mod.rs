//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod check;
pub mod limits;
pub mod sensors;
pub mod watch;

pub use check::run_check;
pub use limits::run_limits;
pub use sensors::run_sensors;
pub use watch::run_watch;

use crate::api::HttpApi;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Build the backend client, validating the configured endpoints
pub(crate) fn backend_client(config: &Config) -> Result<HttpApi> {
    if config.api.base_url.is_empty() {
        return Err(ConfigError::MissingField("api.base_url".to_string()).into());
    }
    Ok(HttpApi::new(&config.api))
}
