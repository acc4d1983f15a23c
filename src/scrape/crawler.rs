// crawler.rs

use crate::scrape::ScrapeError;
use reqwest::blocking::Client;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Page fetching as the crawl loop sees it, so the loop can run against
/// canned pages in tests.
pub trait Fetch {
    fn fetch_html(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Blocking HTTP client for the directory page and the listing pages.
/// No retry and no timeout override: a failed fetch aborts the crawl.
pub struct CoworkClient {
    client: Client,
}

impl CoworkClient {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for CoworkClient {
    fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScrapeError::Network(format!("HTTP {status} for {url}")));
        }

        Ok(text)
    }
}
