//! Task simulator - spawns deferred tasks and composes their outcomes
//!
//! Features:
//! - Non-blocking spawn: a task registers a timer and returns a handle
//! - Single settlement with fan-out observation
//! - Sequential composition (`chain`) and ordered aggregation (`all`)
//! - Injectable random source and report sink

use crate::handle::TaskHandle;
use crate::state::TaskState;
use crate::task::{TaskId, TaskSpec};
use futures::future::try_join_all;
use std::sync::Arc;
use tasklab_foundation::{
    ConsoleSink, Error, RandomSource, ReportSink, Result, ThreadRandom,
};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Task simulator - spawns tasks and observes their settlements
///
/// Cheap to clone; clones share the same random source and report sink.
#[derive(Clone)]
pub struct TaskSimulator {
    /// Source of the settlement-time outcome draw
    random: Arc<dyn RandomSource>,

    /// Destination for user-visible report lines
    sink: Arc<dyn ReportSink>,
}

impl Default for TaskSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSimulator {
    /// Create a simulator with the production collaborators: unseeded
    /// thread RNG and stdout reporting.
    pub fn new() -> Self {
        Self {
            random: Arc::new(ThreadRandom),
            sink: Arc::new(ConsoleSink),
        }
    }

    /// Substitute the random source
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Substitute the report sink
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Emit one user-visible report line
    pub fn report(&self, text: &str) {
        self.sink.line(text);
    }

    /// Spawn a task from its spec.
    ///
    /// Returns a Pending handle immediately; the settlement is scheduled on
    /// the runtime and never blocks the caller. The outcome is decided once,
    /// when the delay elapses: a uniform draw against the spec's success
    /// probability (no draw when the probability is 1).
    pub fn spawn(&self, spec: TaskSpec) -> Result<TaskHandle> {
        if !(0.0..=1.0).contains(&spec.success_probability) {
            return Err(Error::InvalidProbability(spec.success_probability));
        }

        let id = TaskId::new();
        let (tx, rx) = watch::channel(TaskState::Pending);
        let handle = TaskHandle::new(id, spec.name.clone(), rx);

        self.sink.line(&format!("Starting {}...", spec.name));
        debug!(task = %spec.name, %id, delay_ms = spec.delay.as_millis() as u64, "task spawned");

        let random = Arc::clone(&self.random);
        tokio::spawn(async move {
            tokio::time::sleep(spec.delay).await;

            let success = spec.success_probability >= 1.0
                || random.draw() < spec.success_probability;
            let terminal = if success {
                TaskState::Fulfilled(spec.on_success)
            } else {
                TaskState::Rejected(spec.on_failure)
            };

            debug!(task = %spec.name, %id, outcome = %terminal, "task settled");
            // Send fails only when every observer is gone; the settlement is
            // then simply unobserved.
            let _ = tx.send(terminal);
        });

        Ok(handle)
    }

    /// Sequentially compose a task with a dependent follow-up.
    ///
    /// The continuation runs exactly once, only after `task` fulfills, and
    /// produces the follow-up task; the returned handle settles with the
    /// follow-up's own outcome. If `task` rejects, the continuation is
    /// skipped and the rejection propagates unchanged.
    pub fn chain<F>(&self, task: TaskHandle, continuation: F) -> TaskHandle
    where
        F: FnOnce(String) -> Result<TaskHandle> + Send + 'static,
    {
        let id = TaskId::new();
        let name = format!("{} (chained)", task.name());
        let (tx, rx) = watch::channel(TaskState::Pending);
        let handle = TaskHandle::new(id, name.clone(), rx);

        tokio::spawn(async move {
            let terminal = match task.wait().await {
                Ok(value) => match continuation(value) {
                    Ok(next) => match next.wait().await {
                        Ok(result) => TaskState::Fulfilled(result),
                        Err(err) => TaskState::Rejected(rejection_text(err)),
                    },
                    Err(err) => TaskState::Rejected(rejection_text(err)),
                },
                Err(err) => {
                    debug!(task = %name, "predecessor rejected, continuation skipped");
                    TaskState::Rejected(rejection_text(err))
                }
            };
            let _ = tx.send(terminal);
        });

        handle
    }

    /// Wait for every task to settle, preserving input order.
    ///
    /// Fulfills with the results in the same order as `tasks` regardless of
    /// completion order. Rejects with the first-encountered rejection as
    /// soon as it occurs, without waiting for the rest; their timers keep
    /// running in the background and later settlements go unobserved.
    pub async fn all(&self, tasks: Vec<TaskHandle>) -> Result<Vec<String>> {
        try_join_all(tasks.iter().map(TaskHandle::wait)).await
    }

    /// Wait for a task and report its outcome as one line.
    pub async fn observe(&self, task: &TaskHandle) -> Result<String> {
        match task.wait().await {
            Ok(result) => {
                self.sink.line(&result);
                Ok(result)
            }
            Err(err) => {
                warn!(task = task.name(), error = %err, "task rejected");
                self.sink.line(&rejection_text(err.clone()));
                Err(err)
            }
        }
    }

    /// Wait for a set of tasks and report the aggregate outcome.
    ///
    /// On success, one line per result in input order. On failure, a single
    /// line carrying the first rejection; sibling successes are suppressed.
    pub async fn observe_all(&self, tasks: Vec<TaskHandle>) -> Result<Vec<String>> {
        match self.all(tasks).await {
            Ok(results) => {
                for result in &results {
                    self.sink.line(result);
                }
                Ok(results)
            }
            Err(err) => {
                warn!(error = %err, "aggregate rejected");
                self.sink.line(&rejection_text(err.clone()));
                Err(err)
            }
        }
    }
}

/// The line reported for a rejection: the task's own failure message when
/// there is one, the error's display form otherwise.
fn rejection_text(err: Error) -> String {
    match err {
        Error::TaskFailure(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tasklab_foundation::SeededRandom;

    fn sim() -> TaskSimulator {
        TaskSimulator::new().with_sink(Arc::new(tasklab_foundation::MemorySink::new()))
    }

    #[tokio::test]
    async fn test_spawn_rejects_invalid_probability() {
        let sim = sim();
        let spec = TaskSpec::after_ms("bad", 1).with_success_probability(1.5);
        match sim.spawn(spec) {
            Err(Error::InvalidProbability(p)) => assert_eq!(p, 1.5),
            other => panic!("expected InvalidProbability, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_rejects_nan_probability() {
        let sim = sim();
        let spec = TaskSpec::after_ms("bad", 1).with_success_probability(f64::NAN);
        assert!(matches!(
            sim.spawn(spec),
            Err(Error::InvalidProbability(_))
        ));
    }

    #[tokio::test]
    async fn test_certain_success_never_draws() {
        // A panicking random source proves probability 1.0 skips the draw.
        struct Panicking;
        impl RandomSource for Panicking {
            fn draw(&self) -> f64 {
                panic!("draw must not happen for probability 1.0")
            }
        }

        let sim = sim().with_random(Arc::new(Panicking));
        let task = sim.spawn(TaskSpec::after_ms("sure", 5)).unwrap();
        assert_eq!(task.wait().await.unwrap(), "sure complete.");
    }

    #[tokio::test]
    async fn test_zero_probability_always_rejects() {
        let sim = sim().with_random(Arc::new(SeededRandom::new(7)));
        for _ in 0..5 {
            let task = sim
                .spawn(TaskSpec::after_ms("doomed", 1).with_success_probability(0.0))
                .unwrap();
            let err = task.wait().await.unwrap_err();
            assert_eq!(err, Error::TaskFailure("doomed failed.".to_string()));
        }
    }

    #[tokio::test]
    async fn test_settles_no_earlier_than_delay() {
        let sim = sim();
        let delay = Duration::from_millis(50);
        let started = tokio::time::Instant::now();
        let task = sim.spawn(TaskSpec::new("timed", delay)).unwrap();
        task.wait().await.unwrap();
        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn test_zero_delay_settles() {
        let sim = sim();
        let task = sim.spawn(TaskSpec::after_ms("instant", 0)).unwrap();
        assert_eq!(task.wait().await.unwrap(), "instant complete.");
    }

    #[tokio::test]
    async fn test_handle_state_transitions_once() {
        let sim = sim();
        let task = sim.spawn(TaskSpec::after_ms("once", 10)).unwrap();
        assert!(task.state().is_pending());
        task.wait().await.unwrap();
        assert!(task.is_settled());
        // Re-observing yields the same terminal state.
        assert_eq!(task.wait().await.unwrap(), "once complete.");
        assert_eq!(task.state(), TaskState::Fulfilled("once complete.".into()));
    }
}
