//! Task state machine

use serde::{Deserialize, Serialize};

/// Possible states of a simulated task
///
/// A task transitions Pending -> Fulfilled or Pending -> Rejected exactly
/// once; terminal states never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaskState {
    /// Task is waiting for its delay to elapse
    Pending,

    /// Task settled successfully, carrying its result message
    Fulfilled(String),

    /// Task settled with a failure, carrying its error message
    Rejected(String),
}

impl TaskState {
    /// Check if this is a terminal state (cannot transition further)
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Fulfilled(_) | TaskState::Rejected(_))
    }

    /// Check if task has not yet settled
    pub fn is_pending(&self) -> bool {
        matches!(self, TaskState::Pending)
    }

    /// Check if task settled successfully
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, TaskState::Fulfilled(_))
    }

    /// Check if task settled with a failure
    pub fn is_rejected(&self) -> bool {
        matches!(self, TaskState::Rejected(_))
    }

    /// Get display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskState::Pending => "Pending",
            TaskState::Fulfilled(_) => "Fulfilled",
            TaskState::Rejected(_) => "Rejected",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_predicates() {
        assert!(!TaskState::Pending.is_terminal());
        assert!(TaskState::Fulfilled("ok".into()).is_terminal());
        assert!(TaskState::Rejected("no".into()).is_terminal());
        assert!(TaskState::Pending.is_pending());
        assert!(TaskState::Fulfilled("ok".into()).is_fulfilled());
        assert!(TaskState::Rejected("no".into()).is_rejected());
    }

    #[test]
    fn test_display() {
        assert_eq!(TaskState::Pending.to_string(), "Pending");
        assert_eq!(TaskState::Fulfilled("ok".into()).to_string(), "Fulfilled");
        assert_eq!(TaskState::Rejected("no".into()).to_string(), "Rejected");
    }
}
