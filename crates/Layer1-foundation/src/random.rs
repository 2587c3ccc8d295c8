//! Random outcome source
//!
//! Task outcomes are decided by drawing a uniform variate at settlement time
//! and comparing it against the task's success probability. The source is a
//! trait object so production code uses the (unseeded, non-repeatable)
//! thread RNG while tests inject a seeded one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniform random variates in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Draw one uniform variate in `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Production source: the thread-local RNG, unseeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic source for tests, seeded once.
///
/// The `Mutex` lets `draw` take `&self` so the source can be shared behind
/// an `Arc` like the production one.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen::<f64>()
    }
}
