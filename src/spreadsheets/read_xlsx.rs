use crate::scrape::{Listing, ScrapeError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Load the listing table back from the exported spreadsheet. Empty string
/// cells normalize to `None`, matching what the writer put down for absent
/// values.
pub fn read_listings(path: &Path) -> Result<Vec<Listing>, ScrapeError> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| ScrapeError::Xlsx(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScrapeError::Xlsx("workbook has no sheets".into()))?
        .map_err(|e| ScrapeError::Xlsx(e.to_string()))?;

    let mut listings = Vec::new();
    for row in range.rows().skip(1) {
        listings.push(Listing {
            name: string_cell(row.get(0)).unwrap_or_default(),
            url: string_cell(row.get(1)).unwrap_or_default(),
            address: string_cell(row.get(2)),
            phone: string_cell(row.get(3)),
            latitude: float_cell(row.get(4)),
            longitude: float_cell(row.get(5)),
        });
    }

    Ok(listings)
}

fn string_cell(cell: Option<&Data>) -> Option<String> {
    match cell {
        Some(Data::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Data::Float(f)) => Some(f.to_string()),
        Some(Data::Int(i)) => Some(i.to_string()),
        _ => None,
    }
}

fn float_cell(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::String(s)) => s.parse().ok(),
        _ => None,
    }
}
