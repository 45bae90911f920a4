use maud::html;
use maudit::route::prelude::*;

use crate::layout::layout;

#[route("/speaking")]
pub struct Speaking;

impl Route for Speaking {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                h1 { "I speak about things" }
            },
            Some("Speaking"),
            ctx,
        )
    }
}
