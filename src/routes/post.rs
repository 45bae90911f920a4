use maudit::route::prelude::*;

use crate::components::post_article;
use crate::content::{PostContent, display_date, post_slug};
use crate::layout::layout;

/// One page per Markdown post, at the route declared in its frontmatter.
#[route("/[slug]")]
pub struct Post;

#[derive(Params, Clone)]
pub struct PostParams {
    pub slug: String,
}

impl Route<PostParams> for Post {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<PostParams> {
        let posts = ctx.content::<PostContent>("posts");

        posts
            .entries()
            .map(|entry| {
                Page::from_params(PostParams {
                    slug: post_slug(&entry.data(ctx).path),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<PostParams>();
        let posts = ctx.content::<PostContent>("posts");

        // The slug was derived from the frontmatter `path` in `pages`, so a
        // miss here means the content source changed under us mid-build.
        let entry = posts
            .entries()
            .find(|entry| post_slug(&entry.data(ctx).path) == params.slug)
            .unwrap_or_else(|| panic!("No post found for route '/{}'", params.slug));

        let body = entry.render(ctx);
        let post = entry.data(ctx);

        layout(
            post_article(&post.title, &post.author, &display_date(post.date), &body),
            Some(post.title.as_str()),
            ctx,
        )
    }
}
