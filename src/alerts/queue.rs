//! Alert queue controller
//!
//! Ordered FIFO backlog of unacknowledged breaches. The head of the queue
//! is the currently displayed alert. Two states: idle (empty, nothing
//! shown) and alerting (non-empty, head shown).
//!
//! The queue is shared between the polling scheduler and the presentation
//! surface behind a mutex; only the transition methods here mutate it, so
//! transitions are atomic with respect to each other.

use crate::domain::Breach;
use std::collections::VecDeque;

/// FIFO queue of detected breaches awaiting operator review
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    entries: VecDeque<Breach>,
}

impl AlertQueue {
    /// Create an empty (idle) queue
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed alert, if any
    pub fn current(&self) -> Option<&Breach> {
        self.entries.front()
    }

    /// Number of unacknowledged breaches, including the displayed one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is idle
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply a polling cycle's findings.
    ///
    /// A cycle that found breaches replaces the queue wholesale, even
    /// mid-display of a prior alert: the newest findings always supersede
    /// an in-progress backlog. A cycle that found none leaves the queue
    /// untouched, so an already-displayed alert stays until the operator
    /// acknowledges it.
    pub fn on_new_breaches(&mut self, breaches: Vec<Breach>) {
        if breaches.is_empty() {
            return;
        }
        self.entries = breaches.into();
    }

    /// Acknowledge the displayed alert, advancing to the next one.
    ///
    /// Returns the acknowledged breach, or `None` if the queue was idle.
    /// When the last entry is acknowledged the queue returns to idle.
    pub fn acknowledge(&mut self) -> Option<Breach> {
        self.entries.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BreachDirection;

    fn breach(sid: &str) -> Breach {
        Breach {
            sid: sid.to_string(),
            temperature: 10.0,
            direction: BreachDirection::Upper,
        }
    }

    #[test]
    fn test_new_queue_is_idle() {
        let queue = AlertQueue::new();
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_breaches_displace_idle() {
        let mut queue = AlertQueue::new();
        queue.on_new_breaches(vec![breach("A"), breach("B")]);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().sid, "A");
    }

    #[test]
    fn test_new_cycle_replaces_queue_wholesale() {
        let mut queue = AlertQueue::new();
        queue.on_new_breaches(vec![breach("OLD")]);
        queue.on_new_breaches(vec![breach("B1"), breach("B2")]);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().sid, "B1");
    }

    #[test]
    fn test_empty_cycle_leaves_queue_untouched() {
        let mut queue = AlertQueue::new();
        queue.on_new_breaches(vec![breach("A")]);
        queue.on_new_breaches(Vec::new());

        // Sticky until acknowledged: an all-clear cycle does not dismiss
        // the alert the operator has not yet seen.
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().sid, "A");
    }

    #[test]
    fn test_acknowledge_advances_to_next() {
        let mut queue = AlertQueue::new();
        queue.on_new_breaches(vec![breach("A"), breach("B")]);

        let acked = queue.acknowledge().unwrap();
        assert_eq!(acked.sid, "A");
        assert_eq!(queue.current().unwrap().sid, "B");
    }

    #[test]
    fn test_acknowledge_last_returns_to_idle() {
        let mut queue = AlertQueue::new();
        queue.on_new_breaches(vec![breach("A")]);

        queue.acknowledge();
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_acknowledge_idle_is_noop() {
        let mut queue = AlertQueue::new();
        assert!(queue.acknowledge().is_none());
        assert!(queue.is_empty());
    }
}
