//! HTTP client for the telemetry and compliance-backend endpoints
//!
//! Wire DTOs mirror the backend's JSON field names; domain types use our
//! own naming. The sensor feed performs a left-join of live readings with
//! the asset-name mapping, defaulting to "Unknown" when no mapping exists.

use crate::api::{AlertMailer, TelemetrySource};
use crate::config::ApiConfig;
use crate::domain::{Breach, LimitConfig, SensorReading};
use crate::error::{FetchError, NotifyError};

use serde::{Deserialize, Serialize};

const ASSET_NAME_PATH: &str = "/TemperatureUnit/GetSensorDataWithAssetName";
const MANUAL_LIMIT_PATH: &str = "/TemperatureUnit/GetTempManualLimit";
const ALERT_EMAIL_PATH: &str = "/TemperatureUnit/SendAlertEmail";

/// Fallback asset name when a sensor has no configured mapping
const UNNAMED_ASSET: &str = "Unknown";

/// One live measurement as the external telemetry host reports it
#[derive(Debug, Deserialize)]
struct SensorDataDto {
    sid: String,
    #[serde(rename = "receiveDate")]
    receive_date: String,
    tmp: f64,
    hum: f64,
    voltage: f64,
}

/// Sensor id to asset display name mapping entry
#[derive(Debug, Deserialize)]
struct SensorAssetDto {
    sid: String,
    #[serde(rename = "fridgeName")]
    fridge_name: String,
}

/// Configured limit entry; bounds are string-encoded upstream
#[derive(Debug, Deserialize)]
struct ManualLimitDto {
    sid: String,
    #[serde(rename = "lowerLimit")]
    lower_limit: String,
    #[serde(rename = "upperLimit")]
    upper_limit: String,
}

/// Request body for the administrative alert email endpoint
#[derive(Debug, Serialize)]
struct AlertEmailBody<'a> {
    to: &'a str,
    alerts: &'a [Breach],
}

/// HTTP implementation of [`TelemetrySource`] and [`AlertMailer`]
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    /// Base URL of the compliance backend
    base_url: String,
    /// Full URL of the external telemetry feed
    telemetry_url: String,
}

impl HttpApi {
    /// Create a client from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            telemetry_url: config.telemetry_url.clone(),
        }
    }

    fn backend_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| FetchError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

impl TelemetrySource for HttpApi {
    async fn fetch_readings(&self) -> Result<Vec<SensorReading>, FetchError> {
        let asset_url = self.backend_url(ASSET_NAME_PATH);

        // Live feed and asset mapping are independent endpoints; fetch
        // them concurrently and join before merging.
        let (sensors, assets): (Vec<SensorDataDto>, Vec<SensorAssetDto>) = tokio::try_join!(
            self.get_json(&self.telemetry_url),
            self.get_json(&asset_url),
        )?;

        Ok(join_asset_names(sensors, &assets))
    }

    async fn fetch_limits(&self) -> Result<Vec<LimitConfig>, FetchError> {
        let url = self.backend_url(MANUAL_LIMIT_PATH);
        let limits: Vec<ManualLimitDto> = self.get_json(&url).await?;

        Ok(limits
            .into_iter()
            .map(|l| LimitConfig {
                sid: l.sid,
                lower_limit: l.lower_limit,
                upper_limit: l.upper_limit,
            })
            .collect())
    }
}

impl AlertMailer for HttpApi {
    async fn send_alert(&self, recipient: &str, breaches: &[Breach]) -> Result<(), NotifyError> {
        let url = self.backend_url(ALERT_EMAIL_PATH);
        let body = AlertEmailBody {
            to: recipient,
            alerts: breaches,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(NotifyError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Http(status.as_u16()));
        }

        // Response body is ignored
        Ok(())
    }
}

/// Left-join live readings with the asset-name mapping on sensor id
fn join_asset_names(sensors: Vec<SensorDataDto>, assets: &[SensorAssetDto]) -> Vec<SensorReading> {
    sensors
        .into_iter()
        .map(|s| {
            let asset_name = assets
                .iter()
                .find(|a| a.sid == s.sid)
                .map(|a| a.fridge_name.clone())
                .unwrap_or_else(|| UNNAMED_ASSET.to_string());

            SensorReading {
                sid: s.sid,
                received_at: s.receive_date,
                temperature: s.tmp,
                humidity: s.hum,
                voltage: s.voltage,
                asset_name,
            }
        })
        .collect()
}
