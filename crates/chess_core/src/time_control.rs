//! Time budget handling for move selection.
//!
//! The caller always hands over a budget, but it is only binding when
//! `enforce_deadline` is set. Otherwise every candidate is evaluated
//! regardless of how long that takes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Limits handed to an engine for one selection.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Time the caller allows for this move (None = no budget given)
    pub time_budget: Option<Duration>,
    /// Stop evaluating candidates once the budget is spent
    pub enforce_deadline: bool,
    /// Clock shared with the engine while it runs
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// No budget at all; every candidate is evaluated.
    pub fn unlimited() -> Self {
        Self {
            time_budget: None,
            enforce_deadline: false,
            time_control: TimeControl::new(None),
        }
    }

    /// Records a budget in whole seconds without enforcing it.
    ///
    /// Non-positive values mean no budget.
    pub fn advisory(secs: i64) -> Self {
        let budget = u64::try_from(secs)
            .ok()
            .filter(|&s| s > 0)
            .map(Duration::from_secs);
        Self {
            time_budget: budget,
            enforce_deadline: false,
            time_control: TimeControl::new(budget),
        }
    }

    /// A budget that stops the candidate loop once it runs out.
    pub fn deadline(budget: Duration) -> Self {
        Self {
            time_budget: Some(budget),
            enforce_deadline: true,
            time_control: TimeControl::new(Some(budget)),
        }
    }

    /// Turns an advisory budget into a binding one, or back.
    pub fn enforced(mut self, enforce: bool) -> Self {
        self.enforce_deadline = enforce;
        self
    }

    /// True when the deadline is binding and has passed.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.enforce_deadline && self.time_control.check_time()
    }

    /// Start the clock. Call this when selection begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Shareable clock with a stop flag.
///
/// Clones share the flag and start time, so a caller holding a clone can
/// call [`TimeControl::stop`] from another thread.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
        }
    }

    pub fn start(&self) {
        if let Ok(mut start) = self.start_time.write() {
            *start = Some(Instant::now());
        }
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force a stop regardless of the clock.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and latches the stop flag once the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = self.started_at()
            && start.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time, or None without a limit.
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    fn started_at(&self) -> Option<Instant> {
        self.start_time.read().ok().and_then(|s| *s)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
