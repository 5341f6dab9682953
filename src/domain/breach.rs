//! Threshold breach types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which a temperature left its configured range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreachDirection {
    /// Temperature above the upper limit
    Upper,
    /// Temperature below the lower limit
    Lower,
}

impl fmt::Display for BreachDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => write!(f, "above upper limit"),
            Self::Lower => write!(f, "below lower limit"),
        }
    }
}

/// One sensor's temperature falling outside its configured range in a
/// single evaluation cycle.
///
/// Derived, never persisted. A single temperature value is compared against
/// two disjoint bounds, so a sensor produces at most one breach per cycle.
/// Serializes to the wire shape the alert email endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breach {
    /// Sensor id that breached
    pub sid: String,
    /// Temperature observed at evaluation time
    pub temperature: f64,
    /// Which bound was crossed
    pub direction: BreachDirection,
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1}°C {}",
            self.sid, self.temperature, self.direction
        )
    }
}
