//! Domain models for sensor monitoring
//!
//! Core types shared by the telemetry clients, the threshold evaluator,
//! and the alert queue. These carry no I/O.

pub mod breach;
pub mod limits;
pub mod sensor;

pub use breach::{Breach, BreachDirection};
pub use limits::{LimitConfig, LimitRange};
pub use sensor::{SensorReading, UNKNOWN_SENSOR};
