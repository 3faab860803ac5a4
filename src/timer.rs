use std::time::Duration;

use tokio::time::Instant;

/// Stopwatch on the tokio clock, the same clock a [`crate::deadline::Deadline`] uses.
pub struct Timer {
    instant: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.instant.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deadline::Deadline;

    #[tokio::test(start_paused = true)]
    async fn follows_the_paused_clock() {
        let timer = Timer::new();
        tokio::time::advance(Duration::from_millis(750)).await;
        assert_eq!(timer.elapsed(), Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn agrees_with_deadline_expiry() {
        let timer = Timer::new();
        let deadline = Deadline::after(Duration::from_secs(3));
        tokio::time::advance(Duration::from_secs(3)).await;
        assert!(deadline.is_expired());
        assert_eq!(timer.elapsed(), deadline.budget());
    }
}
