//! # tasklab-task
//!
//! Deferred task simulation for TaskLab.
//! Spawns named units of simulated asynchronous work that settle after a
//! wall-clock delay, and composes their outcomes.
//!
//! ## Features
//!
//! - Non-blocking spawn with a Pending handle returned immediately
//! - Single settlement, observable from any number of handle clones
//! - Randomized success/failure decided once, at settlement time
//! - Sequential composition (`chain`) that skips on rejection
//! - Ordered fan-in aggregation (`all`) with first-failure-wins

pub mod handle;
pub mod simulator;
pub mod state;
pub mod task;

// Task system
pub use handle::TaskHandle;
pub use simulator::TaskSimulator;
pub use state::TaskState;
pub use task::{TaskId, TaskSpec};
