use crate::spreadsheets::{read_listings, write_listings};
use crate::tests::utils::{sample_listings, temp_xlsx_path};

#[test]
fn round_trip_preserves_all_fields() {
    let path = temp_xlsx_path("roundtrip");
    let listings = sample_listings();

    write_listings(&path, &listings).unwrap();
    let reloaded = read_listings(&path).unwrap();

    assert_eq!(reloaded, listings);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn absent_values_come_back_as_missing_not_empty_strings() {
    let path = temp_xlsx_path("absent");
    let listings = sample_listings();

    write_listings(&path, &listings).unwrap();
    let reloaded = read_listings(&path).unwrap();

    // The second sample row has no address/phone/coordinates; the writer
    // put down empty cells and the reader must normalize them to None.
    assert_eq!(reloaded[1].address, None);
    assert_eq!(reloaded[1].phone, None);
    assert_eq!(reloaded[1].latitude, None);
    assert_eq!(reloaded[1].longitude, None);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn empty_table_round_trips_to_zero_rows() {
    let path = temp_xlsx_path("empty");

    write_listings(&path, &[]).unwrap();
    let reloaded = read_listings(&path).unwrap();

    assert!(reloaded.is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn export_overwrites_an_existing_file() {
    let path = temp_xlsx_path("overwrite");
    let listings = sample_listings();

    write_listings(&path, &listings).unwrap();
    write_listings(&path, &listings[..1]).unwrap();

    let reloaded = read_listings(&path).unwrap();
    assert_eq!(reloaded.len(), 1);

    let _ = std::fs::remove_file(&path);
}
