use crate::districts::{district_code, district_counts, postal_code};
use crate::scrape::Listing;
use crate::spreadsheets::HEADERS;
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Marker {
    lat: f64,
    lon: f64,
    popup: String,
}

pub fn dashboard_page(listings: &[Listing]) -> Markup {
    desktop_layout(
        "Coworking Spaces in Paris",
        html! {
            main class="container" {
                h1 { "Coworking Spaces in Paris" }

                section class="card" {
                    div id="map" {}
                    (map_script(listings))
                }

                section class="card" {
                    h3 { "Coworking Space Data" }
                    (bar_chart(&district_counts(listings)))
                }

                section class="card" {
                    h3 { "Coworking Space Table" }
                    (listing_table(listings))
                }
            }
        },
    )
}

/// Leaflet map centered on Paris, one marker per row that carries both
/// coordinates. Marker data is embedded as a JSON array in the page.
fn map_script(listings: &[Listing]) -> Markup {
    let markers: Vec<Marker> = listings
        .iter()
        .filter_map(|l| match (l.latitude, l.longitude) {
            (Some(lat), Some(lon)) => Some(Marker {
                lat,
                lon,
                popup: format!(
                    "{}<br>{}<br>{}",
                    l.name,
                    l.address.as_deref().unwrap_or(""),
                    l.phone.as_deref().unwrap_or("")
                ),
            }),
            _ => None,
        })
        .collect();

    let json = serde_json::to_string(&markers).unwrap_or_else(|_| "[]".to_string());

    let js = format!(
        "const map = L.map('map').setView([48.8566, 2.3522], 12);\n\
         L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{\n\
             attribution: '&copy; OpenStreetMap contributors'\n\
         }}).addTo(map);\n\
         const markers = {json};\n\
         for (const m of markers) {{\n\
             L.marker([m.lat, m.lon]).bindPopup(m.popup).addTo(map);\n\
         }}"
    );

    html! { script { (PreEscaped(js)) } }
}

/// Listing counts per arrondissement as an inline SVG bar chart.
fn bar_chart(counts: &BTreeMap<String, usize>) -> Markup {
    const W: f64 = 640.0;
    const H: f64 = 320.0;
    const LEFT: f64 = 50.0;
    const RIGHT: f64 = 20.0;
    const TOP: f64 = 40.0;
    const BOTTOM: f64 = 50.0;

    let plot_w = W - LEFT - RIGHT;
    let plot_h = H - TOP - BOTTOM;
    let max = counts.values().copied().max().unwrap_or(1) as f64;
    let step = plot_w / counts.len().max(1) as f64;
    let bar_w = step * 0.7;

    html! {
        svg id="district-chart" width=(W) height=(H) viewBox=(format!("0 0 {W} {H}")) role="img" {
            text x=(W / 2.0) y="24" text-anchor="middle" font-size="16" {
                "Number of Coworking Spaces per Arrondissement"
            }
            text x=(W / 2.0) y=(H - 8.0) text-anchor="middle" font-size="12" {
                "Arrondissement"
            }
            text x="14" y=(H / 2.0) text-anchor="middle" font-size="12"
                transform=(format!("rotate(-90 14 {})", H / 2.0)) {
                "Number of Spaces"
            }
            line x1=(LEFT) y1=(TOP + plot_h) x2=(LEFT + plot_w) y2=(TOP + plot_h) stroke="#333" {}
            @for (i, (code, count)) in counts.iter().enumerate() {
                @let x = LEFT + i as f64 * step + (step - bar_w) / 2.0;
                @let bar_h = (*count as f64 / max) * plot_h;
                @let y = TOP + plot_h - bar_h;
                rect x=(x) y=(y) width=(bar_w) height=(bar_h) fill="#4a7fb5" {}
                text x=(x + bar_w / 2.0) y=(TOP + plot_h + 16.0) text-anchor="middle" font-size="12" {
                    (code)
                }
                text x=(x + bar_w / 2.0) y=(y - 4.0) text-anchor="middle" font-size="11" {
                    (count)
                }
            }
        }
    }
}

/// The full table, with the transient postal-code and arrondissement
/// columns computed from the address at render time.
fn listing_table(listings: &[Listing]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for header in HEADERS {
                        th { (header) }
                    }
                    th { "Code Postal" }
                    th { "Arrondissement" }
                }
            }
            tbody {
                @for l in listings {
                    @let address = l.address.as_deref().unwrap_or("");
                    tr {
                        td { (l.name) }
                        td { a href=(l.url) { (l.url) } }
                        td { (address) }
                        td { (l.phone.as_deref().unwrap_or("")) }
                        td { @if let Some(lat) = l.latitude { (lat) } }
                        td { @if let Some(lon) = l.longitude { (lon) } }
                        td { (postal_code(address).unwrap_or("")) }
                        td { (district_code(address).unwrap_or("")) }
                    }
                }
            }
        }
    }
}
