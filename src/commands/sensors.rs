//! Sensors command handler

use crate::api::TelemetrySource;
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, SensorList};
use crate::config::Config;
use crate::error::Result;

/// Fetch and display live readings for all provisioned sensors
pub async fn run_sensors(config: &Config, format: OutputFormat) -> Result<()> {
    let api = super::backend_client(config)?;

    let (readings, limits) = tokio::try_join!(api.fetch_readings(), api.fetch_limits())?;
    log::debug!("Fetched {} reading(s)", readings.len());

    print_output(&SensorList::new(&readings, &limits), format)?;
    Ok(())
}
