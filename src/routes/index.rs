use maud::html;
use maudit::route::prelude::*;

use crate::layout::layout;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                h1 { "This is my portfolio" }
                h2 { "I build cool things." }
            },
            Some("Home"),
            ctx,
        )
    }
}
