//! Limits command handler

use crate::api::TelemetrySource;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, LimitList};
use crate::config::Config;
use crate::error::Result;

/// Fetch and display the configured temperature limits
pub async fn run_limits(config: &Config, format: OutputFormat) -> Result<()> {
    let api = super::backend_client(config)?;

    let limits = api.fetch_limits().await?;
    log::debug!("Fetched {} limit(s)", limits.len());

    print_output(&LimitList { limits }, format)?;
    Ok(())
}
