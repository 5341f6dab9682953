//! Mock implementations for testing
//!
//! Provides a mock telemetry backend and alert mailer for unit testing the
//! poller and command handlers without network access. Handles are cheaply
//! cloneable and share state, so tests can reconfigure a backend while a
//! poller holds the other handle.

use crate::api::{AlertMailer, TelemetrySource};
use crate::domain::{Breach, LimitConfig, SensorReading};
use crate::error::{FetchError, NotifyError};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Build a test reading with sane defaults
pub fn reading(sid: &str, temperature: f64) -> SensorReading {
    SensorReading {
        sid: sid.to_string(),
        received_at: "2026-08-25T09:00:00Z".to_string(),
        temperature,
        humidity: 60.0,
        voltage: 3.6,
        asset_name: format!("Fridge {}", sid),
    }
}

/// Build a test limit entry
pub fn limit(sid: &str, lower: &str, upper: &str) -> LimitConfig {
    LimitConfig {
        sid: sid.to_string(),
        lower_limit: lower.to_string(),
        upper_limit: upper.to_string(),
    }
}

#[derive(Default)]
struct MockBackendInner {
    readings: Mutex<Vec<SensorReading>>,
    limits: Mutex<Vec<LimitConfig>>,
    fail_readings: AtomicBool,
    fail_limits: AtomicBool,
    latency: Mutex<Option<Duration>>,
    readings_calls: AtomicUsize,
    limits_calls: AtomicUsize,
}

/// Mock telemetry backend
#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<MockBackendInner>,
}

impl MockBackend {
    /// Create a backend returning empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the readings returned by `fetch_readings`
    pub fn with_readings(self, readings: Vec<SensorReading>) -> Self {
        self.set_readings(readings);
        self
    }

    /// Builder: set the limits returned by `fetch_limits`
    pub fn with_limits(self, limits: Vec<LimitConfig>) -> Self {
        self.set_limits(limits);
        self
    }

    /// Builder: delay both fetches by the given duration
    pub fn with_latency(self, latency: Duration) -> Self {
        *self.inner.latency.lock().unwrap() = Some(latency);
        self
    }

    /// Replace the readings for subsequent fetches
    pub fn set_readings(&self, readings: Vec<SensorReading>) {
        *self.inner.readings.lock().unwrap() = readings;
    }

    /// Replace the limits for subsequent fetches
    pub fn set_limits(&self, limits: Vec<LimitConfig>) {
        *self.inner.limits.lock().unwrap() = limits;
    }

    /// Make `fetch_readings` fail from now on
    pub fn set_fail_readings(&self, fail: bool) {
        self.inner.fail_readings.store(fail, Ordering::SeqCst);
    }

    /// Make `fetch_limits` fail from now on
    pub fn set_fail_limits(&self, fail: bool) {
        self.inner.fail_limits.store(fail, Ordering::SeqCst);
    }

    /// Number of `fetch_readings` calls observed
    pub fn readings_calls(&self) -> usize {
        self.inner.readings_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_limits` calls observed
    pub fn limits_calls(&self) -> usize {
        self.inner.limits_calls.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self) {
        let latency = *self.inner.latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn unavailable(endpoint: &str) -> FetchError {
        FetchError::Http {
            endpoint: endpoint.to_string(),
            status: 503,
        }
    }
}

impl TelemetrySource for MockBackend {
    async fn fetch_readings(&self) -> Result<Vec<SensorReading>, FetchError> {
        self.inner.readings_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        if self.inner.fail_readings.load(Ordering::SeqCst) {
            return Err(Self::unavailable("mock:/latest-Sensor-data"));
        }
        Ok(self.inner.readings.lock().unwrap().clone())
    }

    async fn fetch_limits(&self) -> Result<Vec<LimitConfig>, FetchError> {
        self.inner.limits_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        if self.inner.fail_limits.load(Ordering::SeqCst) {
            return Err(Self::unavailable("mock:/TemperatureUnit/GetTempManualLimit"));
        }
        Ok(self.inner.limits.lock().unwrap().clone())
    }
}

#[derive(Default)]
struct MockMailerInner {
    sends: Mutex<Vec<(String, Vec<Breach>)>>,
    fail: AtomicBool,
}

/// Mock alert mailer recording every dispatched notification
#[derive(Clone, Default)]
pub struct MockMailer {
    inner: Arc<MockMailerInner>,
}

impl MockMailer {
    /// Create a mailer that accepts every send
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: make every send fail (sends are still recorded)
    pub fn with_failure(self) -> Self {
        self.inner.fail.store(true, Ordering::SeqCst);
        self
    }

    /// Recorded sends as (recipient, breaches) pairs
    pub fn sends(&self) -> Vec<(String, Vec<Breach>)> {
        self.inner.sends.lock().unwrap().clone()
    }

    /// Number of send attempts observed
    pub fn send_count(&self) -> usize {
        self.inner.sends.lock().unwrap().len()
    }
}

impl AlertMailer for MockMailer {
    async fn send_alert(&self, recipient: &str, breaches: &[Breach]) -> Result<(), NotifyError> {
        self.inner
            .sends
            .lock()
            .unwrap()
            .push((recipient.to_string(), breaches.to_vec()));

        if self.inner.fail.load(Ordering::SeqCst) {
            return Err(NotifyError::Http(500));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_backend_returns_configured_data() {
        let backend = MockBackend::new()
            .with_readings(vec![reading("A", 4.0)])
            .with_limits(vec![limit("A", "0", "8")]);

        let readings = backend.fetch_readings().await.unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].sid, "A");

        let limits = backend.fetch_limits().await.unwrap();
        assert_eq!(limits[0].upper_limit, "8");

        assert_eq!(backend.readings_calls(), 1);
        assert_eq!(backend.limits_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_backend_failure_injection() {
        let backend = MockBackend::new();
        backend.set_fail_readings(true);

        assert!(backend.fetch_readings().await.is_err());
        assert!(backend.fetch_limits().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_backend_clone_shares_state() {
        let backend = MockBackend::new();
        let handle = backend.clone();
        handle.set_readings(vec![reading("B", 2.0)]);

        let readings = backend.fetch_readings().await.unwrap();
        assert_eq!(readings[0].sid, "B");
    }

    #[tokio::test]
    async fn test_mock_mailer_records_sends() {
        let mailer = MockMailer::new();
        let breaches = vec![Breach {
            sid: "A".to_string(),
            temperature: 10.0,
            direction: crate::domain::BreachDirection::Upper,
        }];

        mailer.send_alert("admin@example.com", &breaches).await.unwrap();

        assert_eq!(mailer.send_count(), 1);
        assert_eq!(mailer.sends()[0].0, "admin@example.com");
    }

    #[tokio::test]
    async fn test_mock_mailer_failure() {
        let mailer = MockMailer::new().with_failure();
        let result = mailer.send_alert("admin@example.com", &[]).await;
        assert!(result.is_err());
        assert_eq!(mailer.send_count(), 1);
    }
}
