//! Tree rendering core
//!
//! This module turns any in-memory tree into indented connector-drawn
//! text. Two pieces do the real work:
//!
//! - `prefix`: the pure glyph-margin generator
//! - `walker`: the recursive depth-first traversal that drives it
//!
//! Everything else is configuration and the pluggable strategy surface.

mod children;
mod config;
mod connectors;
mod options;
mod prefix;
mod strategies;
mod walker;

// Re-export public types
pub use children::ListChildren;
pub use config::RenderConfig;
pub use connectors::Connectors;
pub use options::TreeOptions;
pub use prefix::{ClosedLevels, node_prefix};
pub use strategies::{
    ChildrenFn, DescendFn, EmitFn, EmitRootFn, IterateFn, LevelContext, Node, NodeLine, OrderFn,
    Strategies, Visit, emit_plain, emit_root_dot, iterate_in_order,
};
pub use walker::print_tree;
