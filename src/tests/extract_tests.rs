use crate::pipeline::{crawl, BASE_URL};
use crate::scrape::{Extractor, Fetch, ScrapeError, NOT_AVAILABLE};
use scraper::Html;
use std::collections::HashMap;

fn extractor() -> Extractor {
    Extractor::new().expect("selectors should parse")
}

#[test]
fn links_keep_only_paris_anchors_in_document_order() {
    let doc = Html::parse_document(
        r#"<body>
            <a href="https://example.com/a">Coworking Paris 11</a>
            <a href="https://example.com/lyon">Coworking Lyon</a>
            <a href="https://example.com/b">Espace Paris Centre</a>
        </body>"#,
    );
    let links = extractor().listing_links(&doc);
    assert_eq!(
        links,
        vec![
            "https://example.com/a".to_string(),
            "https://example.com/b".to_string()
        ]
    );
}

#[test]
fn links_without_href_are_skipped() {
    let doc = Html::parse_document("<body><a>Paris sans lien</a></body>");
    assert!(extractor().listing_links(&doc).is_empty());
}

#[test]
fn bold_tier_returns_trailing_sibling_text() {
    let doc = Html::parse_document(
        "<body><p><strong>Adresse :</strong> 10 Rue de la Paix</p></body>",
    );
    assert_eq!(
        extractor().labelled_field(&doc, "Adresse"),
        "10 Rue de la Paix"
    );
}

#[test]
fn list_tier_is_used_when_no_bold_label_exists() {
    let doc = Html::parse_document(
        "<body><ul><li>Téléphone: 06 12 34 56 78</li></ul></body>",
    );
    assert_eq!(
        extractor().labelled_field(&doc, "Téléphone"),
        "06 12 34 56 78"
    );
}

#[test]
fn bold_tier_wins_over_list_tier() {
    let doc = Html::parse_document(
        "<body>
            <p><strong>Adresse</strong> 1 Rue du Gras</p>
            <ul><li>Adresse: 2 Rue du Maigre</li></ul>
        </body>",
    );
    assert_eq!(extractor().labelled_field(&doc, "Adresse"), "1 Rue du Gras");
}

#[test]
fn missing_label_yields_sentinel() {
    let doc = Html::parse_document("<body><p>Rien ici</p></body>");
    assert_eq!(extractor().labelled_field(&doc, "Adresse"), NOT_AVAILABLE);
}

#[test]
fn title_is_trimmed_h1_or_sentinel() {
    let doc = Html::parse_document("<body><h1>  Cowork Hub  </h1></body>");
    assert_eq!(extractor().title(&doc), "Cowork Hub");

    let headless = Html::parse_document("<body><p>no heading</p></body>");
    assert_eq!(extractor().title(&headless), NOT_AVAILABLE);
}

struct CannedFetcher {
    pages: HashMap<String, String>,
}

impl Fetch for CannedFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Network(format!("no canned page for {url}")))
    }
}

#[test]
fn duplicate_urls_create_exactly_one_listing() {
    let listing_page = "<body>\
        <h1>Cowork Hub</h1>\
        <ul><li>Adresse: 10 Rue de la Paix, 75002 Paris</li></ul>\
        </body>";
    let directory = "<body>\
        <a href=\"https://example.com/hub\">Cowork Hub Paris</a>\
        <a href=\"https://example.com/hub\">Cowork Hub Paris (encore)</a>\
        </body>";

    let mut pages = HashMap::new();
    pages.insert(BASE_URL.to_string(), directory.to_string());
    pages.insert("https://example.com/hub".to_string(), listing_page.to_string());

    let listings = crawl(&CannedFetcher { pages }, &extractor()).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].name, "Cowork Hub");
    assert_eq!(listings[0].url, "https://example.com/hub");
    assert_eq!(
        listings[0].address.as_deref(),
        Some("10 Rue de la Paix, 75002 Paris")
    );
}

#[test]
fn listing_fetch_failure_aborts_the_crawl() {
    let directory = "<body><a href=\"https://example.com/gone\">Paris Perdu</a></body>";
    let mut pages = HashMap::new();
    pages.insert(BASE_URL.to_string(), directory.to_string());

    let result = crawl(&CannedFetcher { pages }, &extractor());
    assert!(matches!(result, Err(ScrapeError::Network(_))));
}
