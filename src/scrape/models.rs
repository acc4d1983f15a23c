/// One coworking-space record scraped from a single detail page.
///
/// Name and URL are always present; everything else degrades to `None`
/// when the page doesn't carry it or geocoding came up empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub name: String,
    pub url: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
