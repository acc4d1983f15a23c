// rate_limit.rs

use std::time::{Duration, Instant};

/// Enforces a minimum spacing between consecutive geocoding calls,
/// process-wide. The spacing computation is separate from the sleep so
/// it can be tested with synthetic instants.
pub struct RateLimiter {
    min_interval: Duration,
    last: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// How long a call arriving at `now` still has to wait. Records `now`
    /// plus that wait as the moment the call goes out.
    pub fn delay_before(&mut self, now: Instant) -> Option<Duration> {
        let delay = match self.last {
            Some(last) => {
                let elapsed = now.duration_since(last);
                self.min_interval.checked_sub(elapsed)
            }
            None => None,
        };
        self.last = Some(now + delay.unwrap_or(Duration::ZERO));
        delay
    }

    /// Block until the next call is allowed.
    pub fn throttle(&mut self) {
        if let Some(delay) = self.delay_before(Instant::now()) {
            std::thread::sleep(delay);
        }
    }
}
