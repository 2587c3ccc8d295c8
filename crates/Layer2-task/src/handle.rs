//! Task handle - the observer side of a running task
//!
//! A `TaskHandle` is returned as soon as a task is spawned, while the task
//! is still Pending. The settlement is published through a `watch` channel:
//! it happens exactly once, and any number of cloned handles observe the
//! same terminal state.

use crate::state::TaskState;
use crate::task::TaskId;
use tasklab_foundation::{Error, Result};
use tokio::sync::watch;

/// Observer handle to a spawned task
///
/// Cloning a handle adds another observer; it never duplicates the task or
/// its timer.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    name: String,
    state: watch::Receiver<TaskState>,
}

impl TaskHandle {
    pub(crate) fn new(id: TaskId, name: String, state: watch::Receiver<TaskState>) -> Self {
        Self { id, name, state }
    }

    /// Task identifier
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Task name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TaskState {
        self.state.borrow().clone()
    }

    /// Check whether the task has settled
    pub fn is_settled(&self) -> bool {
        self.state.borrow().is_terminal()
    }

    /// Wait for the task to settle.
    ///
    /// Suspends the calling future (never the thread) until the state leaves
    /// Pending. Returns the result message on fulfillment and
    /// `Error::TaskFailure` with the error message on rejection. Waiting
    /// again, or from another clone of the handle, yields the same outcome.
    pub async fn wait(&self) -> Result<String> {
        // Own receiver per observer; the sender side is held by the driver.
        let mut state = self.state.clone();
        let settled = state
            .wait_for(TaskState::is_terminal)
            .await
            .map_err(|_| Error::Abandoned(self.name.clone()))?;

        match &*settled {
            TaskState::Fulfilled(message) => Ok(message.clone()),
            TaskState::Rejected(message) => Err(Error::TaskFailure(message.clone())),
            TaskState::Pending => unreachable!("wait_for returned a non-terminal state"),
        }
    }
}
