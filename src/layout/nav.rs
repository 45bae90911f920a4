use maud::{Markup, html};

const LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Writing", "/writing"),
    ("Speaking", "/speaking"),
    ("Podcasting", "/podcasting"),
];

pub fn nav(site_title: &str, current_path: &str) -> Markup {
    html! {
        nav.nav {
            h3.nav__title { (site_title) }
            ul.nav__list {
                @for (label, route) in LINKS {
                    li {
                        a.nav__link.nav__link--active[is_active(route, current_path)] href=(route) {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

// The root link is only active on the root itself, never as a prefix.
fn is_active(route: &str, current_path: &str) -> bool {
    if route == "/" {
        return current_path == "/";
    }

    current_path.trim_end_matches('/') == route
}
