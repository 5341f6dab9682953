//! Check command handler
//!
//! Runs a single fetch-evaluate cycle and reports the result. Unlike the
//! watch loop, a check dispatched with `--notify` awaits the notification so
//! a delivery failure surfaces as a command error.

use crate::alerts::evaluate;
use crate::api::{AlertMailer, TelemetrySource};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::cli::output::{print_output, BreachReport};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Run one fetch-evaluate cycle and report breaches
pub async fn run_check(config: &Config, args: &CheckArgs, format: OutputFormat) -> Result<()> {
    let api = super::backend_client(config)?;

    let (readings, limits) = tokio::try_join!(api.fetch_readings(), api.fetch_limits())?;
    let breaches = evaluate(&readings, &limits);

    let mut notified = false;
    if args.notify && !breaches.is_empty() {
        let recipient = args
            .recipient
            .clone()
            .or_else(|| config.alerts.recipient.clone())
            .ok_or_else(|| ConfigError::MissingField("alerts.recipient".to_string()))?;

        api.send_alert(&recipient, &breaches).await?;
        log::info!("Alert sent to {}", recipient);
        notified = true;
    }

    print_output(&BreachReport { breaches, notified }, format)?;
    Ok(())
}
