use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Shown when the exported spreadsheet has no data rows.
pub fn empty_page() -> Markup {
    desktop_layout(
        "Coworking Spaces in Paris",
        html! {
            main class="container" {
                h1 { "Coworking Spaces in Paris" }
                p { "No coworking spaces found." }
            }
        },
    )
}
