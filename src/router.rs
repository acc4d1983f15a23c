use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::{read_listings, EXPORT_PATH};
use crate::templates;
use astra::Request;
use std::path::Path;

/// Dispatch a dashboard request. The spreadsheet is re-read on every hit:
/// the dashboard shares no in-memory state with the crawl stage.
pub fn handle(req: Request) -> ResultResp {
    handle_at(req, Path::new(EXPORT_PATH))
}

pub fn handle_at(req: Request, spreadsheet: &Path) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let listings =
                read_listings(spreadsheet).map_err(|e| ServerError::Xlsx(e.to_string()))?;

            if listings.is_empty() {
                html_response(templates::pages::empty_page())
            } else {
                html_response(templates::pages::dashboard_page(&listings))
            }
        }
        _ => Err(ServerError::NotFound),
    }
}
