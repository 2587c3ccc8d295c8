//! Report sink - user-visible output lines
//!
//! Settlement and aggregate results are reported as plain text lines, one
//! per distinct observation. The sink is injected into the simulator so
//! tests can capture and assert on the exact lines instead of scraping
//! stdout.

use std::sync::Mutex;
use tracing::debug;

/// Destination for user-visible report lines.
pub trait ReportSink: Send + Sync {
    /// Emit one line of report text.
    fn line(&self, text: &str);
}

/// Production sink: prints to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// Capturing sink for tests: stores lines in order of emission.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines emitted so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Check whether any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|l| l.contains(needle))
    }
}

impl ReportSink for MemorySink {
    fn line(&self, text: &str) {
        debug!(line = text, "captured report line");
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.line("first");
        sink.line("second");
        sink.line("third");
        assert_eq!(sink.lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_memory_sink_contains() {
        let sink = MemorySink::new();
        sink.line("Task A complete.");
        assert!(sink.contains("Task A"));
        assert!(!sink.contains("Task B"));
    }
}
