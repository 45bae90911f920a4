use chrono::NaiveDate;
use maudit::content::{ContentSources, glob_markdown, markdown_entry};
use maudit::content_sources;

/// Frontmatter of a blog post. `path` doubles as the post's route and as the
/// join key between the writing page listing and the post page itself, so it
/// must be unique across posts.
#[markdown_entry]
pub struct PostContent {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub path: String,
    pub author: String,
}

pub fn content_sources() -> ContentSources {
    content_sources!["posts" => glob_markdown::<PostContent>("content/posts/*.md")]
}

/// Route parameter for a post, derived from its frontmatter `path`.
pub fn post_slug(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Frontmatter dates are ISO, posts display them long-form, e.g. "November 3, 2019".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_surrounding_slashes() {
        assert_eq!(post_slug("/my-first-blog-post"), "my-first-blog-post");
        assert_eq!(post_slug("/trailing/"), "trailing");
        assert_eq!(post_slug("bare"), "bare");
    }

    #[test]
    fn dates_display_long_form() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 3).unwrap();
        assert_eq!(display_date(date), "November 3, 2019");
    }
}
