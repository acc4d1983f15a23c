use crate::scrape::Listing;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh temp path for a spreadsheet under test.
pub fn temp_xlsx_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}.xlsx",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            name: "Cowork Hub".to_string(),
            url: "https://example.com/cowork-hub".to_string(),
            address: Some("10 Rue de la Paix, 75011 Paris".to_string()),
            phone: Some("0612345678".to_string()),
            latitude: Some(48.8566),
            longitude: Some(2.3522),
        },
        Listing {
            name: "Le Bureau Partage".to_string(),
            url: "https://example.com/bureau-partage".to_string(),
            address: None,
            phone: None,
            latitude: None,
            longitude: None,
        },
    ]
}
