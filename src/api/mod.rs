//! Backend API layer
//!
//! Traits abstracting the telemetry and notification endpoints, plus the
//! HTTP implementation. The traits exist so the polling scheduler and the
//! command handlers can be exercised with mocks in tests.

pub mod client;

pub use client::HttpApi;

use crate::domain::{Breach, LimitConfig, SensorReading};
use crate::error::{FetchError, NotifyError};
use std::future::Future;

/// Source of live readings and configured limits
///
/// Both fetches replace their collection wholesale on success. A failure of
/// either is reported as [`FetchError`] and treated by callers as "no data
/// this cycle".
pub trait TelemetrySource: Send + Sync {
    /// Fetch current readings for all physical sensors, joined with their
    /// configured asset names.
    fn fetch_readings(
        &self,
    ) -> impl Future<Output = Result<Vec<SensorReading>, FetchError>> + Send;

    /// Fetch the operator-configured temperature limits per sensor id.
    fn fetch_limits(&self) -> impl Future<Output = Result<Vec<LimitConfig>, FetchError>> + Send;
}

/// Outbound administrative alert channel
///
/// Best-effort: callers dispatch fire-and-forget and log failures. Delivery
/// is never awaited by the polling cycle.
pub trait AlertMailer: Send + Sync {
    /// Send the full breach list for one polling cycle to the recipient.
    fn send_alert(
        &self,
        recipient: &str,
        breaches: &[Breach],
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}
