//! Service layer
//!
//! The polling scheduler that drives fetch-evaluate cycles against the
//! telemetry backend and maintains the shared dashboard state.

pub mod poller;

pub use poller::{DashboardState, Poller, PollerConfig, PollerHandle};
