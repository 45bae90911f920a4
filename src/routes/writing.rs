use maud::html;
use maudit::route::prelude::*;

use crate::components::post_square;
use crate::content::{PostContent, display_date, post_slug};
use crate::layout::layout;

use super::post::{Post, PostParams};

#[route("/writing")]
pub struct Writing;

impl Route for Writing {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let mut posts = ctx
            .content::<PostContent>("posts")
            .entries()
            .collect::<Vec<_>>();

        // Newest first
        posts.sort_by(|a, b| b.data(ctx).date.cmp(&a.data(ctx).date));

        layout(
            html! {
                h1 { "I write about things" }
                @for entry in &posts {
                    @let post = entry.data(ctx);
                    (post_square(
                        &post.title,
                        &display_date(post.date),
                        &post.description,
                        &Post.url(PostParams { slug: post_slug(&post.path) }),
                    ))
                }
            },
            Some("Writing"),
            ctx,
        )
    }
}
