//! Bough - renders any in-memory tree as connector-drawn text

pub mod error;
pub mod output;
pub mod render;

pub use error::{ConfigError, Error};
pub use output::{OutputConfig, TreeFormatter};
pub use render::{
    ClosedLevels, Connectors, ListChildren, Node, NodeLine, RenderConfig, TreeOptions, node_prefix,
    print_tree,
};
