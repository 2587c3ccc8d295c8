//! Error types for TaskLab

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// TaskLab error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ========================================================================
    // Task outcomes
    // ========================================================================
    /// The task settled Rejected; carries the task's failure message.
    #[error("Task failed: {0}")]
    TaskFailure(String),

    // ========================================================================
    // Input validation
    // ========================================================================
    /// Success probability outside [0, 1] (or NaN).
    #[error("Invalid success probability: {0} (expected a value in [0, 1])")]
    InvalidProbability(f64),

    // ========================================================================
    // Internal
    // ========================================================================
    /// A task's driver went away without settling. Every driver settles its
    /// task before exiting, so observing this indicates a defect.
    #[error("Task abandoned before settling: {0}")]
    Abandoned(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Check whether this is a task's own failure (as opposed to misuse of
    /// the simulator or an internal defect).
    pub fn is_task_failure(&self) -> bool {
        matches!(self, Error::TaskFailure(_))
    }

    /// Failure-message accessor for aggregate reporting.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Error::TaskFailure(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}
