mod components;
mod content;
mod layout;

use content::content_sources;
use maudit::{BuildOptions, BuildOutput, coronate, routes};

mod routes {
    mod index;
    mod podcasting;
    mod post;
    mod speaking;
    mod writing;

    pub use index::Index;
    pub use podcasting::Podcasting;
    pub use post::Post;
    pub use speaking::Speaking;
    pub use writing::Writing;
}

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    coronate(
        routes![
            routes::Index,
            routes::Writing,
            routes::Speaking,
            routes::Podcasting,
            routes::Post
        ],
        content_sources(),
        BuildOptions::default(),
    )
}
