//! Process-wide schema cache state.
//!
//! Stands in for a schema-consistency check against a real backing store: a
//! single "last refreshed" timestamp gates a pretend database call. Falling
//! through the cache costs a simulated 30-50ms, and every lookup carries a
//! small injected failure chance to behave like a flaky dependency.
//!
//! The timestamp is shared by every in-flight request, so the whole
//! read-check-update sequence runs under one async mutex; concurrent
//! requests serialize through a miss's sleep.

use crate::services::events::error::EventError;
use rand::Rng;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const CACHE_WINDOW: Duration = Duration::from_secs(10);
// one lookup in this many fails, simulating transient backend errors
const FAULT_ODDS: u32 = 62;

pub struct SchemaCache {
    window: Duration,
    fault_odds: u32,
    last_refreshed: Mutex<Option<Instant>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::with_settings(CACHE_WINDOW, FAULT_ODDS)
    }

    /// Custom window and fault odds (1-in-`fault_odds`; 0 disables the
    /// injected failures). Tests use this to get deterministic behavior.
    pub fn with_settings(window: Duration, fault_odds: u32) -> Self {
        SchemaCache {
            window,
            fault_odds,
            last_refreshed: Mutex::new(None),
        }
    }

    /// Checks the schema for a dataset, returning whether the call was served
    /// from cache.
    ///
    /// The very first call initializes the refresh timestamp and still counts
    /// as a hit; only a call arriving more than `window` after the last
    /// refresh pays the miss penalty. Do not normalize this to
    /// miss-on-first-call: it shifts the observed hit ratio.
    pub async fn check_schema(&self, dataset_id: u32) -> Result<bool, EventError> {
        let mut last_refreshed = self.last_refreshed.lock().await;

        let mut hit_cache = true;
        let now = Instant::now();
        if last_refreshed.is_none() {
            *last_refreshed = Some(now);
        }
        if now.duration_since(last_refreshed.unwrap_or(now)) > self.window {
            hit_cache = false;
            // pretend to hit a slow database
            let delay_ms = rand::thread_rng().gen_range(30..=50);
            sleep(Duration::from_millis(delay_ms)).await;
            *last_refreshed = Some(Instant::now());
        }

        if self.fault_odds > 0 && rand::thread_rng().gen_range(0..self.fault_odds) == 0 {
            log::debug!("simulated schema lookup failure for dataset {}", dataset_id);
            return Err(EventError::SchemaLookupFailure);
        }
        Ok(hit_cache)
    }
}

impl Default for SchemaCache {
    fn default() -> Self {
        Self::new()
    }
}
