mod nominatim;
mod rate_limit;
mod retry;

pub use nominatim::NominatimClient;
pub use rate_limit::RateLimiter;
pub use retry::SafeGeocoder;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Narrow seam over the external geocoding service: address in,
/// coordinates-or-absent out. Retry and backoff live above this trait so
/// they can be exercised against a fake.
pub trait Geocode {
    fn geocode(&mut self, address: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

#[derive(Debug)]
pub enum GeocodeError {
    Network(String),
    BadResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Network(msg) => write!(f, "Geocoding network error: {msg}"),
            GeocodeError::BadResponse(msg) => write!(f, "Geocoding response error: {msg}"),
        }
    }
}

impl Error for GeocodeError {}
