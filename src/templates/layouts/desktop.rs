use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" {}
                style {
                    r#"
                    body { font-family: sans-serif; margin: 0; background: #f5f5f5; }
                    main.container { max-width: 960px; margin: 0 auto; padding: 1rem; }
                    section.card { background: #fff; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
                    #map { height: 480px; }
                    table { border-collapse: collapse; width: 100%; font-size: 0.85rem; }
                    th, td { border: 1px solid #ddd; padding: 4px 8px; text-align: left; }
                    th { background: #f0f0f0; }
                    "#
                }
            }
            body {
                (content)
            }
        }
    }
}
