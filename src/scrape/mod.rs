mod clean;
mod crawler;
mod extract;
mod models;
mod scrape_error;

pub use clean::{clean_address, clean_name, clean_phone};
pub use crawler::{CoworkClient, Fetch};
pub use extract::{Extractor, NOT_AVAILABLE};
pub use models::Listing;
pub use scrape_error::ScrapeError;
