use crate::scrape::{Listing, ScrapeError};
use crate::spreadsheets::HEADERS;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write the full listing table to `path`, overwriting any existing file.
/// One header row, no index column; absent values become empty cells.
pub fn write_listings(path: &Path, listings: &[Listing]) -> Result<(), ScrapeError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ScrapeError::Xlsx(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.name)
            .map_err(|e| ScrapeError::Xlsx(format!("Failed to write name: {e}")))?;

        worksheet
            .write_string(r, 1, &listing.url)
            .map_err(|e| ScrapeError::Xlsx(format!("Failed to write url: {e}")))?;

        let address = listing.address.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 2, address)
            .map_err(|e| ScrapeError::Xlsx(format!("Failed to write address: {e}")))?;

        let phone = listing.phone.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 3, phone)
            .map_err(|e| ScrapeError::Xlsx(format!("Failed to write phone: {e}")))?;

        if let Some(lat) = listing.latitude {
            worksheet
                .write_number(r, 4, lat)
                .map_err(|e| ScrapeError::Xlsx(format!("Failed to write latitude: {e}")))?;
        }

        if let Some(lon) = listing.longitude {
            worksheet
                .write_number(r, 5, lon)
                .map_err(|e| ScrapeError::Xlsx(format!("Failed to write longitude: {e}")))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ScrapeError::Xlsx(format!("Failed to save workbook: {e}")))?;

    Ok(())
}
