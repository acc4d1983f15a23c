// nominatim.rs

use crate::geocode::{Coordinates, Geocode, GeocodeError, RateLimiter};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

// Nominatim usage policy: identify the application, max 1 req/s.
const USER_AGENT: &str = "coworking_locator";
const MIN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoder backed by the public Nominatim (OpenStreetMap) search API.
/// Owns the global throttle, so every request goes through it no matter
/// which address is being resolved.
pub struct NominatimClient {
    client: Client,
    limiter: RateLimiter,
}

impl NominatimClient {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            limiter: RateLimiter::new(MIN_INTERVAL),
        })
    }
}

impl Geocode for NominatimClient {
    fn geocode(&mut self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        self.limiter.throttle();

        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::Network(format!("HTTP {status}")));
        }

        let places: Vec<NominatimPlace> = resp
            .json()
            .map_err(|e| GeocodeError::BadResponse(e.to_string()))?;

        let Some(place) = places.first() else {
            return Ok(None);
        };

        let latitude: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::BadResponse(format!("bad latitude: {}", place.lat)))?;
        let longitude: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::BadResponse(format!("bad longitude: {}", place.lon)))?;

        Ok(Some(Coordinates {
            latitude,
            longitude,
        }))
    }
}
