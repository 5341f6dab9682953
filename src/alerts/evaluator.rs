//! Threshold evaluator
//!
//! Pure comparison of current readings against current limits. No I/O, no
//! state; safe to unit test directly.

use crate::domain::{Breach, BreachDirection, LimitConfig, SensorReading};
use std::collections::HashSet;

/// Produce the set of sensors currently out of bounds.
///
/// For each reading, looks up the limit with a matching sensor id (exact
/// match, first entry wins; there are no default limits). Emits an upper
/// breach iff `temperature > upper_limit`, a lower breach iff
/// `temperature < lower_limit`. Boundary values are in range.
///
/// Skipped without failing the cycle:
/// - readings carrying the `UNKNOWN` sentinel id
/// - sensors with no matching limit (unconfigured sensors are unmonitored)
/// - limits whose bounds do not parse as numbers
/// - repeated sensor ids after the first occurrence
///
/// Output order follows reading order.
pub fn evaluate(readings: &[SensorReading], limits: &[LimitConfig]) -> Vec<Breach> {
    let mut breaches = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for reading in readings {
        if !reading.is_provisioned() {
            continue;
        }
        if !seen.insert(reading.sid.as_str()) {
            continue;
        }

        let Some(limit) = limits.iter().find(|l| l.sid == reading.sid) else {
            continue;
        };

        let Some(range) = limit.range() else {
            log::debug!(
                "skipping sensor {}: unparseable limit [{:?}, {:?}]",
                reading.sid,
                limit.lower_limit,
                limit.upper_limit
            );
            continue;
        };

        let direction = if reading.temperature > range.upper {
            BreachDirection::Upper
        } else if reading.temperature < range.lower {
            BreachDirection::Lower
        } else {
            continue;
        };

        breaches.push(Breach {
            sid: reading.sid.clone(),
            temperature: reading.temperature,
            direction,
        });
    }

    breaches
}
