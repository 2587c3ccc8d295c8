//! Task definition and types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random TaskId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Specification of one simulated unit of asynchronous work
///
/// A spec describes the task before it runs: how long it takes, how likely
/// it is to succeed, and what it reports on either outcome. The simulator
/// turns a spec into a running task with a `TaskHandle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Identifying label
    pub name: String,

    /// Wall-clock delay before the task settles
    pub delay: Duration,

    /// Probability in [0, 1] that the task fulfills; 1.0 means no failure mode
    pub success_probability: f64,

    /// Result message on fulfillment
    pub on_success: String,

    /// Error message on rejection
    pub on_failure: String,

    /// When the spec was created
    pub created_at: DateTime<Utc>,
}

impl TaskSpec {
    /// Create a new task spec with no failure mode and default messages
    /// derived from the name.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        let name = name.into();
        Self {
            delay,
            success_probability: 1.0,
            on_success: format!("{name} complete."),
            on_failure: format!("{name} failed."),
            created_at: Utc::now(),
            name,
        }
    }

    /// Convenience constructor taking the delay in milliseconds.
    pub fn after_ms(name: impl Into<String>, delay_ms: u64) -> Self {
        Self::new(name, Duration::from_millis(delay_ms))
    }

    /// Set the probability of success. Values outside [0, 1] are rejected
    /// when the task is spawned, not here.
    pub fn with_success_probability(mut self, probability: f64) -> Self {
        self.success_probability = probability;
        self
    }

    /// Set the message reported on fulfillment
    pub fn resolving(mut self, message: impl Into<String>) -> Self {
        self.on_success = message.into();
        self
    }

    /// Set the message reported on rejection
    pub fn rejecting(mut self, message: impl Into<String>) -> Self {
        self.on_failure = message.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_display_is_short() {
        let id = TaskId::new();
        assert_eq!(id.to_string().len(), 8);
    }

    #[test]
    fn test_spec_defaults() {
        let spec = TaskSpec::after_ms("Task A", 3000);
        assert_eq!(spec.name, "Task A");
        assert_eq!(spec.delay, Duration::from_millis(3000));
        assert_eq!(spec.success_probability, 1.0);
        assert_eq!(spec.on_success, "Task A complete.");
        assert_eq!(spec.on_failure, "Task A failed.");
    }

    #[test]
    fn test_spec_builders() {
        let spec = TaskSpec::after_ms("Task 1", 3000)
            .with_success_probability(0.5)
            .resolving("Task 1 complete: Simple promise resolved!")
            .rejecting("Task 1 failed: Simple promise rejected!");
        assert_eq!(spec.success_probability, 0.5);
        assert_eq!(spec.on_success, "Task 1 complete: Simple promise resolved!");
        assert_eq!(spec.on_failure, "Task 1 failed: Simple promise rejected!");
    }
}
