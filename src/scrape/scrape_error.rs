use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ScrapeError {
    Network(String),
    HtmlParse(String),
    Xlsx(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Network(msg) => write!(f, "Network error: {msg}"),
            ScrapeError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScrapeError::Xlsx(msg) => write!(f, "Spreadsheet error: {msg}"),
        }
    }
}

impl Error for ScrapeError {}
