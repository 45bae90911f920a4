use maud::{DOCTYPE, Markup, html};
use maudit::maud::generator;
use maudit::route::PageContext;

mod nav;

pub use nav::nav;

/// Site-wide metadata, resolved once and passed into the rendering functions
/// instead of being queried from inside them.
pub struct SiteMeta {
    pub title: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),
        }
    }
}

pub fn layout(main: Markup, page_title: Option<&str>, ctx: &mut PageContext) -> Markup {
    let site = SiteMeta::default();

    let title = match page_title {
        Some(page_title) => format!("{} - {}", page_title, site.title),
        None => site.title.clone(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                title { (title) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                div.layout {
                    (nav(&site.title, ctx.current_path))
                    main.main {
                        (main)
                    }
                }
            }
        }
    }
}
