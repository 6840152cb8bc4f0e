use std::fmt;
use std::time::{Duration, Instant};

/// Per-request record of how long each pipeline stage took.
///
/// The orchestrator notes an `Instant` before each stage and records it here
/// afterwards; the whole collection is logged once per request. Replaces
/// wrapping every helper in a timing decorator.
pub struct StageTimings {
    stages: Vec<(&'static str, Duration)>,
}

impl StageTimings {
    pub fn new() -> Self {
        StageTimings { stages: Vec::new() }
    }

    pub fn record(&mut self, stage: &'static str, started: Instant) {
        self.stages.push((stage, started.elapsed()));
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for StageTimings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StageTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (stage, duration)) in self.stages.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}_dur_ms={:.3}", stage, duration.as_secs_f64() * 1000.0)?;
        }
        Ok(())
    }
}
