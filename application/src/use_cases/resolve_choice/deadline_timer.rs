//! One-shot answer deadline.
//!
//! The timer owns its [`Sleep`] directly instead of spawning a task, so
//! there is nothing left running once the timer is cancelled or dropped.

use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Instant, Sleep, sleep_until};

/// Cap for deadlines too large to represent as an `Instant` (about 30 years)
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Fires once, `duration` after [`start`](Self::start), unless cancelled.
#[derive(Debug)]
pub struct DeadlineTimer {
    sleep: Pin<Box<Sleep>>,
    deadline: Instant,
    cancelled: bool,
}

impl DeadlineTimer {
    /// Arm a timer that fires after `duration`.
    ///
    /// Durations past the representable range are clamped to a far-future
    /// instant.
    pub fn start(duration: Duration) -> Self {
        let now = Instant::now();
        let deadline = now
            .checked_add(duration)
            .unwrap_or_else(|| now + FAR_FUTURE);
        Self {
            sleep: Box::pin(sleep_until(deadline)),
            deadline,
            cancelled: false,
        }
    }

    /// Completes when the deadline is reached.
    ///
    /// Once [`cancel`](Self::cancel) has been called this never completes.
    /// Safe to poll again after it has fired or after being dropped
    /// mid-wait inside a `select!`.
    pub async fn fired(&mut self) {
        if self.cancelled {
            std::future::pending::<()>().await;
        }
        self.sleep.as_mut().await;
    }

    /// Disarm the timer. Takes effect immediately: no signal can be
    /// observed through [`fired`](Self::fired) afterwards.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn remaining(&self) -> Duration {
        if self.cancelled {
            return Duration::ZERO;
        }
        self.deadline.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_at_deadline_not_before() {
        let start = Instant::now();
        let mut timer = DeadlineTimer::start(Duration::from_secs(5));

        let early = tokio::time::timeout(Duration::from_millis(4_999), timer.fired()).await;
        assert!(early.is_err());
        assert!(timer.remaining() > Duration::ZERO);

        timer.fired().await;
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let mut timer = DeadlineTimer::start(Duration::from_secs(1));
        timer.cancel();

        let result = tokio::time::timeout(Duration::from_secs(10), timer.fired()).await;
        assert!(result.is_err());
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fired_is_repeatable() {
        let mut timer = DeadlineTimer::start(Duration::from_millis(10));
        timer.fired().await;
        // A fired timer stays fired
        timer.fired().await;
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_counts_down() {
        let timer = DeadlineTimer::start(Duration::from_secs(5));
        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(timer.remaining(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_deadline_is_clamped() {
        let mut timer = DeadlineTimer::start(Duration::from_secs(u64::MAX));
        assert!(timer.remaining() >= FAR_FUTURE - Duration::from_secs(1));

        let result = tokio::time::timeout(Duration::from_secs(3600), timer.fired()).await;
        assert!(result.is_err());
    }
}
