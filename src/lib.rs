pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod model;
pub mod search;
pub mod theme;

pub use cache::LayoutCache;
pub use config::{Config, Direction, LayoutConfig, load_config};
pub use layout::{
    BoundingBox, ConnectionDescriptor, ConnectionKind, ConnectionStyle, Layout, NodeLayout,
    ViewportTransform, compute_layout, fit_transform, oldest_parentless,
};
pub use model::{Person, RelationshipEdge, RelationshipKind, Sex};
pub use search::search_nodes;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
