// extract.rs
//
// HTML extraction for the directory page and the listing detail pages.
// The listing pages are not consistently marked up: some carry
// "<strong>Label</strong> value" pairs, others plain "<li>Label: value</li>"
// items, so labelled fields go through a two-tier lookup.

use crate::scrape::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// Placeholder recorded when a field cannot be located on the page.
pub const NOT_AVAILABLE: &str = "Not Available";

pub struct Extractor {
    anchor: Selector,
    bold: Selector,
    list_item: Selector,
    heading: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            anchor: Self::parse_selector("a")?,
            bold: Self::parse_selector("strong")?,
            list_item: Self::parse_selector("li")?,
            heading: Self::parse_selector("h1")?,
        })
    }

    fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
        Selector::parse(css).map_err(|e| ScrapeError::HtmlParse(e.to_string()))
    }

    /// Hrefs of all anchors whose visible text contains "Paris", in
    /// document order. Duplicates are left in; the crawl loop de-dups
    /// with its seen-URL set.
    pub fn listing_links(&self, doc: &Html) -> Vec<String> {
        doc.select(&self.anchor)
            .filter(|a| element_text(a).contains("Paris"))
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// Trimmed first-level heading text, or the sentinel if the page has
    /// no `<h1>`.
    pub fn title(&self, doc: &Html) -> String {
        doc.select(&self.heading)
            .next()
            .map(|h| element_text(&h).trim().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Two-tier labelled-field lookup: the bold tier first, then the
    /// list-item tier, then the sentinel.
    pub fn labelled_field(&self, doc: &Html, label: &str) -> String {
        self.bold_field(doc, label)
            .or_else(|| self.list_field(doc, label))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// "<strong>Label</strong> value" shape: the value is the text node
    /// immediately after the first matching bold element.
    fn bold_field(&self, doc: &Html, label: &str) -> Option<String> {
        let strong = doc
            .select(&self.bold)
            .find(|s| element_text(s).contains(label))?;
        let text = strong.next_sibling()?.value().as_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// "<li>Label: value</li>" shape: the value is whatever follows the
    /// first ": " separator.
    fn list_field(&self, doc: &Html, label: &str) -> Option<String> {
        for li in doc.select(&self.list_item) {
            let text = element_text(&li);
            if !text.contains(label) {
                continue;
            }
            let value = match text.split_once(": ") {
                Some((_, rest)) => rest,
                None => &text,
            };
            return Some(value.trim().to_string());
        }
        None
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}
