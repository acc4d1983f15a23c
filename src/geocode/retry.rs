// retry.rs

use crate::geocode::{Coordinates, Geocode};
use std::time::Duration;

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF: Duration = Duration::from_secs(2);

/// Wraps a geocoder with the bounded retry policy: 3 attempts, 2 seconds
/// between them, then give up and record no coordinates. A lookup that
/// succeeds with no result is a final answer, not a retryable failure.
pub struct SafeGeocoder<G> {
    inner: G,
    sleep: Box<dyn FnMut(Duration)>,
}

impl<G: Geocode> SafeGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self::with_sleep(inner, Box::new(std::thread::sleep))
    }

    /// Test hook: replace the backoff sleep.
    pub fn with_sleep(inner: G, sleep: Box<dyn FnMut(Duration)>) -> Self {
        Self { inner, sleep }
    }

    pub fn geocode(&mut self, address: &str) -> Option<Coordinates> {
        for attempt in 1..=MAX_ATTEMPTS {
            match self.inner.geocode(address) {
                Ok(found) => return found,
                Err(e) => {
                    eprintln!("⚠️ Geocode attempt {attempt} failed for {address}: {e}");
                    (self.sleep)(BACKOFF);
                }
            }
        }
        None
    }
}
