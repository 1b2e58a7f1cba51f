//! Wall-clock budget for a single search.
//!
//! Search is single-threaded and checks the clock cooperatively at node
//! entry, so a budget is just a start instant and a limit. There is no stop
//! flag: a caller that wants to cancel early discards the result instead.

use std::time::{Duration, Instant};

/// Time allowance for one move decision.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,
    /// None = infinite
    limit: Option<Duration>,
}

impl TimeBudget {
    /// Starts the clock now with the given limit.
    pub fn start(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit: Some(limit),
        }
    }

    /// A budget that never expires. Used by tests and analysis.
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            limit: None,
        }
    }

    /// True once elapsed time strictly exceeds the limit.
    #[inline]
    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.start.elapsed() > limit,
            None => false,
        }
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    /// Get elapsed time since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
