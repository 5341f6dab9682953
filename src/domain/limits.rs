//! Operator-configured temperature limits

use serde::{Deserialize, Serialize};

/// Acceptable temperature range for one sensor/asset, as authored by an
/// operator in the backend configuration store.
///
/// Bounds arrive string-encoded from the backend and are kept that way;
/// [`LimitConfig::range`] parses them at evaluation time. Limits are
/// refreshed wholesale alongside readings and are read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Sensor id this limit applies to
    pub sid: String,
    /// Lower bound in degrees Celsius, string-encoded
    pub lower_limit: String,
    /// Upper bound in degrees Celsius, string-encoded
    pub upper_limit: String,
}

/// Parsed numeric bounds of a [`LimitConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitRange {
    pub lower: f64,
    pub upper: f64,
}

impl LimitRange {
    /// Whether a temperature lies strictly outside this range
    pub fn excludes(&self, temperature: f64) -> bool {
        temperature > self.upper || temperature < self.lower
    }
}

impl LimitConfig {
    /// Parse both bounds, returning `None` if either is not numeric.
    ///
    /// An unparseable limit makes the sensor unevaluable for the cycle; the
    /// evaluator skips it rather than failing the whole cycle.
    pub fn range(&self) -> Option<LimitRange> {
        let lower = self.lower_limit.trim().parse().ok()?;
        let upper = self.upper_limit.trim().parse().ok()?;
        Some(LimitRange { lower, upper })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(lower: &str, upper: &str) -> LimitConfig {
        LimitConfig {
            sid: "FR-01".to_string(),
            lower_limit: lower.to_string(),
            upper_limit: upper.to_string(),
        }
    }

    #[test]
    fn test_range_parses_numeric_strings() {
        let range = limit("0", "8").range().unwrap();
        assert_eq!(range.lower, 0.0);
        assert_eq!(range.upper, 8.0);
    }

    #[test]
    fn test_range_tolerates_whitespace() {
        let range = limit(" -2.5 ", " 6 ").range().unwrap();
        assert_eq!(range.lower, -2.5);
        assert_eq!(range.upper, 6.0);
    }

    #[test]
    fn test_range_rejects_non_numeric() {
        assert!(limit("low", "8").range().is_none());
        assert!(limit("0", "").range().is_none());
    }

    #[test]
    fn test_excludes_is_strict() {
        let range = limit("0", "8").range().unwrap();
        assert!(range.excludes(8.1));
        assert!(range.excludes(-0.1));
        assert!(!range.excludes(8.0));
        assert!(!range.excludes(0.0));
        assert!(!range.excludes(4.0));
    }
}
