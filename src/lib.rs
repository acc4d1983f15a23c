pub mod districts;
pub mod errors;
pub mod geocode;
pub mod pipeline;
pub mod responses;
pub mod router;
pub mod scrape;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;
