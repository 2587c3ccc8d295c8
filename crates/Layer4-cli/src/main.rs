//! TaskLab CLI - Main entry point
//!
//! Runs the five deferred-task lab scenarios to completion and exits once
//! every scheduled task has settled and been observed. The binary takes no
//! flags; `RUST_LOG` only adjusts diagnostic logging.

mod scenario;

use tasklab_task::TaskSimulator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let sim = TaskSimulator::new();
    scenario::run_all(&sim).await?;

    Ok(())
}
