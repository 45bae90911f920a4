use maud::html;
use maudit::route::prelude::*;

use crate::layout::layout;

#[route("/podcasting")]
pub struct Podcasting;

impl Route for Podcasting {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                h1 { "I podcast about things" }
            },
            Some("Podcasting"),
            ctx,
        )
    }
}
