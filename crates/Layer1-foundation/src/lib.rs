//! # tasklab-foundation
//!
//! Foundation layer for TaskLab:
//! - Error: central error type and `Result` alias
//! - Random: injectable uniform-variate source (thread RNG or seeded)
//! - Report: injectable sink for user-visible output lines
//!
//! The simulator in `tasklab-task` takes the random source and the report
//! sink as explicit collaborators so tests can substitute deterministic
//! implementations.

pub mod error;
pub mod random;
pub mod report;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Collaborators (injectable)
// ============================================================================
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use report::{ConsoleSink, MemorySink, ReportSink};
