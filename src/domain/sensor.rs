//! Sensor reading domain type

use serde::{Deserialize, Serialize};

/// Sentinel sensor id for a physical unit that has not been mapped to an
/// asset. Readings carrying this id are excluded from display and from
/// threshold evaluation.
pub const UNKNOWN_SENSOR: &str = "UNKNOWN";

/// One live measurement from a refrigeration sensor, joined with the asset
/// display name configured for that sensor.
///
/// Readings are transient: each successful poll replaces the previous set
/// wholesale, never merges incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Physical sensor id
    pub sid: String,
    /// Timestamp the telemetry host received the measurement (ISO 8601)
    pub received_at: String,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Battery/supply voltage of the sensor unit
    pub voltage: f64,
    /// Display name of the fridge/asset this sensor is attached to.
    /// `"Unknown"` when no asset mapping exists for the sensor id.
    pub asset_name: String,
}

impl SensorReading {
    /// Whether this reading belongs to a provisioned sensor.
    ///
    /// Unprovisioned sensors report the `UNKNOWN` sentinel id and must not
    /// appear in display collections or evaluator output.
    pub fn is_provisioned(&self) -> bool {
        self.sid != UNKNOWN_SENSOR
    }
}
