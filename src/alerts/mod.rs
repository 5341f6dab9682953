//! Threshold alerting
//!
//! Pure breach detection over readings and limits, plus the stateful queue
//! of unacknowledged breaches awaiting operator review.

pub mod evaluator;
pub mod queue;

pub use evaluator::evaluate;
pub use queue::AlertQueue;
