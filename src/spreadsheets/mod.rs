pub mod export_xlsx;
pub mod read_xlsx;

pub use export_xlsx::write_listings;
pub use read_xlsx::read_listings;

/// The spreadsheet written by the crawl stage and re-read by the dashboard.
pub const EXPORT_PATH: &str = "coworking_paris.xlsx";

/// Column order shared by the writer and the reader.
pub const HEADERS: [&str; 6] = ["Name", "URL", "Address", "Phone", "Latitude", "Longitude"];
