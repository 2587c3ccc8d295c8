//! Lab scenarios - the five simulation steps run by the binary
//!
//! Each scenario is one teaching step: simple delayed resolution, randomized
//! outcome, sequential chaining, and parallel aggregation (succeeding and
//! failing). A scenario's own task failure is an expected outcome, reported
//! through the sink; only simulator misuse surfaces as a scenario error.

use async_trait::async_trait;
use tasklab_foundation::Result;
use tasklab_task::{TaskSimulator, TaskSpec};
use tracing::debug;

/// One runnable simulation step
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Scenario name for run logging
    fn name(&self) -> &str;

    /// Run the scenario to completion. A `TaskFailure` return means the
    /// simulated work failed, which for these labs is a valid ending.
    async fn run(&self, sim: &TaskSimulator) -> Result<()>;
}

/// The lab's scenario list, in teaching order
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(SimpleResolution),
        Box::new(RandomizedOutcome),
        Box::new(SequentialChain),
        Box::new(ParallelAggregation),
        Box::new(AggregateFailure),
    ]
}

/// Step 1: one task, fixed delay, guaranteed resolution.
pub struct SimpleResolution;

#[async_trait]
impl Scenario for SimpleResolution {
    fn name(&self) -> &str {
        "simple-resolution"
    }

    async fn run(&self, sim: &TaskSimulator) -> Result<()> {
        let task = sim.spawn(
            TaskSpec::after_ms("Task 1", 3000)
                .resolving("Task 1 complete: Simple promise resolved!"),
        )?;
        sim.observe(&task).await?;
        Ok(())
    }
}

/// Step 2: one task whose outcome is a coin flip at settlement time.
pub struct RandomizedOutcome;

#[async_trait]
impl Scenario for RandomizedOutcome {
    fn name(&self) -> &str {
        "randomized-outcome"
    }

    async fn run(&self, sim: &TaskSimulator) -> Result<()> {
        let task = sim.spawn(
            TaskSpec::after_ms("Task 2", 2000)
                .with_success_probability(0.5)
                .resolving("Task 2 complete: The random draw went our way!")
                .rejecting("Task 2 failed: The random draw did not cooperate."),
        )?;
        // Either outcome line is a valid ending for this step.
        let _ = sim.observe(&task).await;
        Ok(())
    }
}

/// Step 3: two dependent steps; the second delay starts only after the
/// first success is observed.
pub struct SequentialChain;

#[async_trait]
impl Scenario for SequentialChain {
    fn name(&self) -> &str {
        "sequential-chain"
    }

    async fn run(&self, sim: &TaskSimulator) -> Result<()> {
        let first = sim.spawn(
            TaskSpec::after_ms("Step one", 1500).resolving("Step one complete."),
        )?;

        let follow_up = sim.clone();
        let chained = sim.chain(first, move |_| {
            follow_up.spawn(
                TaskSpec::after_ms("Step two", 1500)
                    .resolving("Step two complete: chained after step one."),
            )
        });

        sim.observe(&chained).await?;
        Ok(())
    }
}

/// Step 4: three concurrent tasks awaited jointly; results print in input
/// order even though the timers run together.
pub struct ParallelAggregation;

#[async_trait]
impl Scenario for ParallelAggregation {
    fn name(&self) -> &str {
        "parallel-aggregation"
    }

    async fn run(&self, sim: &TaskSimulator) -> Result<()> {
        let a = sim.spawn(TaskSpec::after_ms("Task A", 3000))?;
        let b = sim.spawn(TaskSpec::after_ms("Task B", 3000))?;
        let c = sim.spawn(TaskSpec::after_ms("Task C", 3000))?;

        sim.observe_all(vec![a, b, c]).await?;
        Ok(())
    }
}

/// Step 5: the same fan-out with one member that always rejects; the first
/// failure wins and the sibling successes are suppressed.
pub struct AggregateFailure;

#[async_trait]
impl Scenario for AggregateFailure {
    fn name(&self) -> &str {
        "aggregate-failure"
    }

    async fn run(&self, sim: &TaskSimulator) -> Result<()> {
        let a = sim.spawn(TaskSpec::after_ms("Task D", 2000))?;
        let b = sim.spawn(TaskSpec::after_ms("Task E", 2000))?;
        let c = sim.spawn(
            TaskSpec::after_ms("Task F", 1000)
                .with_success_probability(0.0)
                .rejecting("Task F failed: aggregate falls with it."),
        )?;

        // The failure line is this step's teaching point.
        let stragglers = vec![a.clone(), b.clone()];
        let _ = sim.observe_all(vec![a, b, c]).await;

        // The surviving timers keep running; let them settle (unreported)
        // before the process exits.
        for task in stragglers {
            let _ = task.wait().await;
        }
        Ok(())
    }
}

/// Run every scenario in order, reporting task failures instead of aborting.
pub async fn run_all(sim: &TaskSimulator) -> Result<()> {
    for scenario in all_scenarios() {
        debug!(scenario = scenario.name(), "running scenario");
        match scenario.run(sim).await {
            Ok(()) => {}
            Err(err) if err.is_task_failure() => {
                // Already reported through the sink by the observing call.
                debug!(scenario = scenario.name(), "scenario ended in task failure");
            }
            Err(err) => return Err(err),
        }
        sim.report("");
    }
    Ok(())
}
