pub mod resources;
pub mod tree;

pub use resources::{ResourcePanel, resource_panel, youtube_search_url};
pub use tree::{RoadmapTree, TreeState};
