//! Timing tests for the rate limiter.

use guardian_rate_limit::RateLimiter;
use std::time::{Duration, Instant};

#[test]
fn test_back_to_back_blocking_calls_are_spaced() {
    let limiter = RateLimiter::new(Duration::from_millis(50));

    let start = Instant::now();
    assert_eq!(limiter.wait_blocking(), Duration::ZERO);
    let waited = limiter.wait_blocking();
    let elapsed = start.elapsed();

    assert!(waited > Duration::ZERO);
    assert!(elapsed >= Duration::from_millis(50));
}

#[test]
fn test_no_delay_when_last_call_is_old() {
    let limiter = RateLimiter::new(Duration::from_millis(20));
    limiter.wait_blocking();
    std::thread::sleep(Duration::from_millis(40));

    assert_eq!(limiter.delay(), Duration::ZERO);
    assert_eq!(limiter.wait_blocking(), Duration::ZERO);
}

#[test]
fn test_unlimited_never_delays() {
    let limiter = RateLimiter::per_minute(0);
    let start = Instant::now();
    for _ in 0..100 {
        assert_eq!(limiter.wait_blocking(), Duration::ZERO);
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_async_wait_suspends_for_remaining_interval() {
    let limiter = RateLimiter::per_minute(30);

    let start = tokio::time::Instant::now();
    assert_eq!(limiter.wait().await, Duration::ZERO);
    assert_eq!(start.elapsed(), Duration::ZERO);

    let waited = limiter.wait().await;
    assert_eq!(waited, Duration::from_secs(2));
    assert_eq!(start.elapsed(), Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn test_async_partial_wait() {
    let limiter = RateLimiter::per_minute(60);
    limiter.wait().await;

    tokio::time::advance(Duration::from_millis(400)).await;
    let waited = limiter.wait().await;
    assert_eq!(waited, Duration::from_millis(600));
}
