use crate::districts::{district_code, district_counts, postal_code};
use crate::scrape::Listing;

fn listing_at(address: Option<&str>) -> Listing {
    Listing {
        name: "X".to_string(),
        url: "https://example.com/x".to_string(),
        address: address.map(str::to_string),
        phone: None,
        latitude: None,
        longitude: None,
    }
}

#[test]
fn postal_code_is_first_five_digit_run() {
    assert_eq!(
        postal_code("10 Rue de la Paix, 75011 Paris"),
        Some("75011")
    );
}

#[test]
fn district_is_last_two_digits_of_postal_code() {
    assert_eq!(district_code("10 Rue de la Paix, 75011 Paris"), Some("11"));
}

#[test]
fn no_five_digit_run_means_no_district() {
    assert_eq!(district_code("10 Rue de la Paix, Paris"), None);
    assert_eq!(postal_code("bat. 3, Paris"), None);
}

#[test]
fn non_paris_codes_still_get_the_literal_slice() {
    // The derivation is a literal slice, so a Lyon code yields "03".
    assert_eq!(district_code("5 Place Bellecour, 69003"), Some("03"));
}

#[test]
fn counts_group_by_district_and_skip_missing() {
    let listings = vec![
        listing_at(Some("1 Rue A, 75011 Paris")),
        listing_at(Some("2 Rue B, 75011 Paris")),
        listing_at(Some("3 Rue C, 75002 Paris")),
        listing_at(Some("4 Rue D, Paris")),
        listing_at(None),
    ];

    let counts = district_counts(&listings);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("11"), Some(&2));
    assert_eq!(counts.get("02"), Some(&1));
}
