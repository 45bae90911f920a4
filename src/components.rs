use maud::{Markup, PreEscaped, html};

/// Clickable summary of a blog post, used by the writing page listing.
pub fn post_square(title: &str, date: &str, description: &str, href: &str) -> Markup {
    html! {
        a.post-square href=(href) {
            h3.post-square__title { (title) }
            h4.post-square__date { (date) }
            p.post-square__description { (description) }
        }
    }
}

/// Full body of a post page. `body_html` was already rendered from Markdown
/// by the content pipeline and is inserted as-is.
pub fn post_article(title: &str, author: &str, date: &str, body_html: &str) -> Markup {
    html! {
        a.back-link href="/writing" { "Back to blogs" }
        h1.post__title { (title) }
        h4.post__byline { "Posted by " (author) " on " (date) }
        article.post__body {
            (PreEscaped(body_html))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_square_links_to_the_post() {
        let markup = post_square("A", "January 1, 2020", "d", "/a").into_string();

        assert!(markup.contains("href=\"/a\""));
        assert!(markup.contains(">A</h3>"));
        assert!(markup.contains("January 1, 2020"));
        assert!(markup.contains(">d</p>"));
    }

    #[test]
    fn post_square_renders_missing_fields_as_empty_text() {
        let markup = post_square("A", "", "", "/a").into_string();

        assert!(markup.contains("<h4 class=\"post-square__date\"></h4>"));
        assert!(markup.contains("<p class=\"post-square__description\"></p>"));
    }

    #[test]
    fn post_article_inserts_the_body_verbatim() {
        let body = "<p>Hello, <em>world</em> &amp; co.</p>";
        let markup = post_article("A", "Sam", "January 1, 2020", body).into_string();

        assert!(markup.contains(body));
        assert!(markup.contains("Posted by Sam on January 1, 2020"));
        assert!(markup.contains(">A</h1>"));
    }

    #[test]
    fn post_article_links_back_to_the_listing() {
        let markup = post_article("A", "Sam", "January 1, 2020", "").into_string();

        assert!(markup.contains("href=\"/writing\""));
        assert!(markup.contains("Back to blogs"));
    }
}
