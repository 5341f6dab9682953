//! fridgewatch - refrigeration temperature monitoring library
//!
//! This library provides the core functionality for watching live sensor
//! feeds against configured temperature limits, queueing threshold breaches
//! for operator review, and dispatching email notifications.
//!
//! # Modules
//!
//! - [`alerts`]: Threshold evaluation and the alert queue
//! - [`api`]: Backend client and service traits
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models
//! - [`error`]: Error types
//! - [`services`]: Polling scheduler

pub mod alerts;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
