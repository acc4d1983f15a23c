// districts.rs
//
// Arrondissement derivation for the dashboard. Transient: computed from
// the Address column at render time, never written back to the file.

use crate::scrape::Listing;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn postal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{5}").unwrap())
}

/// First 5-digit run in the address, taken as the postal code.
pub fn postal_code(address: &str) -> Option<&str> {
    postal_re().find(address).map(|m| m.as_str())
}

/// Last two digits of the postal code, used as a proxy for the Paris
/// arrondissement. Deliberately the literal [3..5] slice: a non-Parisian
/// code yields a nonsense district rather than being filtered out.
pub fn district_code(address: &str) -> Option<&str> {
    postal_code(address).map(|code| &code[3..5])
}

/// Listing counts grouped by district code, ascending by code. Rows with
/// no postal code in their address are left out.
pub fn district_counts(listings: &[Listing]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for listing in listings {
        let Some(address) = listing.address.as_deref() else {
            continue;
        };
        if let Some(code) = district_code(address) {
            *counts.entry(code.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
