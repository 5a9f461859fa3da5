//! Stage timing for batch ingestion.

use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Wall-clock duration of one named stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTiming {
    pub label: String,
    pub duration_ms: f64,
}

/// Runs labelled stages, logging start and elapsed time for each.
#[derive(Debug, Default)]
pub struct TimedProgress {
    prefix: String,
    timings: Vec<StageTiming>,
}

impl TimedProgress {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            timings: Vec::new(),
        }
    }

    /// Run `f` as stage `label` and record how long it took.
    pub fn stage<R>(&mut self, label: &str, f: impl FnOnce() -> R) -> R {
        info!(prefix = %self.prefix, "{}...", label);

        let start = Instant::now();
        let out = f();
        let elapsed = start.elapsed();

        info!(
            prefix = %self.prefix,
            elapsed_secs = elapsed.as_secs_f64(),
            "{} done",
            label
        );

        self.timings.push(StageTiming {
            label: label.to_string(),
            duration_ms: elapsed.as_secs_f64() * 1000.0,
        });

        out
    }

    pub fn timings(&self) -> &[StageTiming] {
        &self.timings
    }

    pub fn into_timings(self) -> Vec<StageTiming> {
        self.timings
    }
}
