// errors.rs
use std::fmt;

/// Errors surfaced by the dashboard server: routing misses and failures
/// while re-reading the exported spreadsheet.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    Xlsx(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::Xlsx(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
