//! Minimum-interval rate limiter.
//!
//! The limiter tracks the time of the most recent call on a monotonic clock and
//! delays the next call until `60 / requests_per_minute` seconds have passed.
//! A limit of zero disables waiting, though calls are still stamped.
//!
//! Reading the last timestamp and stamping the new one are separate critical
//! sections. Two callers overlapping on one limiter can both pass the check, so
//! callers sharing a client must serialize externally.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, trace};

/// Client-side request spacing.
///
/// # Examples
///
/// ```
/// use guardian_rate_limit::RateLimiter;
/// use std::time::Duration;
///
/// let limiter = RateLimiter::per_minute(30);
/// assert_eq!(limiter.min_interval(), Duration::from_secs(2));
///
/// // The first call never waits.
/// assert_eq!(limiter.delay(), Duration::ZERO);
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Limiter with an explicit minimum interval between calls.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Limiter allowing `rpm` requests per minute. Zero means unlimited.
    pub fn per_minute(rpm: u32) -> Self {
        let min_interval = if rpm == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(60.0 / f64::from(rpm))
        };
        Self::new(min_interval)
    }

    /// Limiter that never waits.
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Minimum spacing between calls.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Whether waiting is disabled.
    pub fn is_unlimited(&self) -> bool {
        self.min_interval.is_zero()
    }

    /// Time of the most recent call, if any.
    pub fn last_call_at(&self) -> Option<Instant> {
        *self.lock()
    }

    /// How long the next call would have to wait right now.
    pub fn delay(&self) -> Duration {
        if self.is_unlimited() {
            return Duration::ZERO;
        }
        match *self.lock() {
            None => Duration::ZERO,
            Some(prev) => {
                let elapsed = Instant::now().saturating_duration_since(prev);
                self.min_interval.saturating_sub(elapsed)
            }
        }
    }

    /// Wait until the next call is allowed, then record it.
    ///
    /// Suspends the task without blocking the executor. Returns the time waited.
    #[instrument(skip(self), fields(min_interval_ms = self.min_interval.as_millis() as u64))]
    pub async fn wait(&self) -> Duration {
        let delay = self.delay();
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Rate limit: sleeping");
            tokio::time::sleep(delay).await;
        }
        self.stamp();
        delay
    }

    /// Wait until the next call is allowed, then record it.
    ///
    /// Blocks the current thread. Returns the time waited.
    #[instrument(skip(self), fields(min_interval_ms = self.min_interval.as_millis() as u64))]
    pub fn wait_blocking(&self) -> Duration {
        let delay = self.delay();
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Rate limit: sleeping");
            std::thread::sleep(delay);
        }
        self.stamp();
        delay
    }

    fn stamp(&self) {
        let now = Instant::now();
        *self.lock() = Some(now);
        trace!("Rate limit: call stamped");
    }

    // The guarded value is a plain timestamp, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Option<Instant>> {
        self.last_call
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::per_minute(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_rpm() {
        assert_eq!(RateLimiter::per_minute(60).min_interval(), Duration::from_secs(1));
        assert_eq!(RateLimiter::per_minute(30).min_interval(), Duration::from_secs(2));
        assert_eq!(
            RateLimiter::per_minute(120).min_interval(),
            Duration::from_millis(500)
        );
        assert!(RateLimiter::per_minute(0).is_unlimited());
    }

    #[test]
    fn test_never_called() {
        let limiter = RateLimiter::per_minute(1);
        assert!(limiter.last_call_at().is_none());
        assert_eq!(limiter.delay(), Duration::ZERO);
    }

    #[test]
    fn test_unlimited_still_stamps() {
        let limiter = RateLimiter::unlimited();
        assert_eq!(limiter.wait_blocking(), Duration::ZERO);
        assert!(limiter.last_call_at().is_some());
        assert_eq!(limiter.delay(), Duration::ZERO);
    }

    #[test]
    fn test_delay_after_call() {
        let limiter = RateLimiter::new(Duration::from_secs(60));
        limiter.wait_blocking();
        let delay = limiter.delay();
        assert!(delay > Duration::from_secs(59));
        assert!(delay <= Duration::from_secs(60));
    }
}
