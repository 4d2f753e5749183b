//! Bounded exponential backoff for upstream page requests.

use std::time::Duration;

/// Default attempt ceiling per request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Attempt ceiling and backoff schedule for a single upstream request.
///
/// After failed attempt `n` (zero-based) the client sleeps
/// `base_delay * 2^n` before trying again: 1 s, 2 s, 4 s ... with the
/// default one-second base. No sleep follows the final attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Backoff to wait after the zero-based failed `attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Attempt ceiling, never below one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
