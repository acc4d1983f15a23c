// pipeline.rs
//
// The one-pass crawl: fetch the directory, visit each Paris listing once,
// clean the fields, geocode, export, print. The seen-URL set and the
// accumulating list are owned here and nowhere else.

use crate::geocode::{Geocode, NominatimClient, SafeGeocoder};
use crate::scrape::{
    clean_address, clean_name, clean_phone, CoworkClient, Extractor, Fetch, Listing, ScrapeError,
    NOT_AVAILABLE,
};
use crate::spreadsheets::{write_listings, EXPORT_PATH};
use scraper::Html;
use std::collections::HashSet;
use std::path::Path;

pub const BASE_URL: &str = "https://www.leportagesalarial.com/coworking/";

const ADDRESS_LABEL: &str = "Adresse";
const PHONE_LABEL: &str = "Téléphone";

/// Fetch the directory page and every discovered listing page, in
/// discovery order. Any fetch failure aborts the crawl; only the later
/// geocoding step ever retries.
pub fn crawl(client: &impl Fetch, extractor: &Extractor) -> Result<Vec<Listing>, ScrapeError> {
    let html = client.fetch_html(BASE_URL)?;
    let doc = Html::parse_document(&html);
    let links = extractor.listing_links(&doc);

    eprintln!("🔗 Found {} Paris links", links.len());

    let mut seen = HashSet::new();
    let mut listings = Vec::new();

    for url in links {
        if !seen.insert(url.clone()) {
            continue;
        }

        eprintln!("📄 Scraping {url}");
        let page = client.fetch_html(&url)?;
        let page_doc = Html::parse_document(&page);

        let name = clean_name(&extractor.title(&page_doc))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let address = clean_address(&extractor.labelled_field(&page_doc, ADDRESS_LABEL));
        let phone = clean_phone(&extractor.labelled_field(&page_doc, PHONE_LABEL));

        listings.push(Listing {
            name,
            url,
            address,
            phone,
            latitude: None,
            longitude: None,
        });
    }

    Ok(listings)
}

/// Resolve coordinates for every listing that has an address. A missing
/// address is treated as no result; a geocoder that exhausts its retries
/// leaves both columns absent.
pub fn geocode_listings<G: Geocode>(geocoder: &mut SafeGeocoder<G>, listings: &mut [Listing]) {
    for listing in listings.iter_mut() {
        let Some(address) = listing.address.as_deref() else {
            continue;
        };
        let full_address = format!("{address}, Paris, France");
        if let Some(coords) = geocoder.geocode(&full_address) {
            listing.latitude = Some(coords.latitude);
            listing.longitude = Some(coords.longitude);
        }
    }
}

pub fn run() -> Result<(), ScrapeError> {
    let client = CoworkClient::new()?;
    let extractor = Extractor::new()?;

    let mut listings = crawl(&client, &extractor)?;
    eprintln!("✅ Scraped {} listings", listings.len());

    let nominatim = NominatimClient::new().map_err(|e| ScrapeError::Network(e.to_string()))?;
    let mut geocoder = SafeGeocoder::new(nominatim);
    geocode_listings(&mut geocoder, &mut listings);

    write_listings(Path::new(EXPORT_PATH), &listings)?;
    eprintln!("💾 Wrote {} rows to {EXPORT_PATH}", listings.len());

    print_table(&listings);
    Ok(())
}

/// Final table on stdout, one line per listing.
pub fn print_table(listings: &[Listing]) {
    println!("Name | URL | Address | Phone | Latitude | Longitude");
    for l in listings {
        println!(
            "{} | {} | {} | {} | {} | {}",
            l.name,
            l.url,
            l.address.as_deref().unwrap_or(""),
            l.phone.as_deref().unwrap_or(""),
            l.latitude.map(|v| v.to_string()).unwrap_or_default(),
            l.longitude.map(|v| v.to_string()).unwrap_or_default(),
        );
    }
}
