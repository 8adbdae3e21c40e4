//! The options bundle handed to `print_tree`

use std::io::{self, Write};

use super::children::ListChildren;
use super::config::RenderConfig;
use super::connectors::Connectors;
use super::strategies::{LevelContext, Node, NodeLine, Strategies};

/// Everything one traversal runs on: the root value, the layout
/// configuration, and the strategy bundle.
///
/// Traversal state (path, depth, sequence counter, closed-level set) is
/// not part of this type; the walker creates it fresh on every call, so
/// there is nothing for a caller to reset or corrupt.
pub struct TreeOptions<'a, T> {
    pub(crate) root: Option<T>,
    pub(crate) config: RenderConfig,
    pub(crate) strategies: Strategies<'a, T>,
}

impl<'a, T: 'a> TreeOptions<'a, T> {
    /// Build options around an explicit children strategy. This is the
    /// one required strategy; everything else has a stock default.
    pub fn with_children(
        root: Option<T>,
        children: impl Fn(&LevelContext<'_, T>) -> Vec<Node<T>> + 'a,
    ) -> Self {
        Self {
            root,
            config: RenderConfig::default(),
            strategies: Strategies::with_children(children),
        }
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    pub fn indentation(mut self, indentation: usize) -> Self {
        self.config.indentation = indentation;
        self
    }

    pub fn h_lines(mut self, h_lines: usize) -> Self {
        self.config.h_lines = Some(h_lines);
        self
    }

    pub fn connectors(mut self, connectors: Connectors) -> Self {
        self.config.connectors = connectors;
        self
    }

    /// Gate whether an enumerated level is visited at all.
    pub fn descend(
        mut self,
        descend: impl Fn(&LevelContext<'_, T>, &[Node<T>]) -> bool + 'a,
    ) -> Self {
        self.strategies.descend = Box::new(descend);
        self
    }

    /// Reorder and/or filter each level in place before iteration.
    pub fn order(
        mut self,
        order: impl Fn(&LevelContext<'_, T>, &mut Vec<Node<T>>) + 'a,
    ) -> Self {
        self.strategies.order = Box::new(order);
        self
    }

    /// Replace the per-node emission strategy.
    pub fn emit(
        mut self,
        emit: impl FnMut(&mut dyn Write, &NodeLine<'_, T>) -> io::Result<()> + 'a,
    ) -> Self {
        self.strategies.emit = Box::new(emit);
        self
    }

    /// Replace the root marker line.
    pub fn emit_root(
        mut self,
        emit_root: impl FnMut(&mut dyn Write) -> io::Result<()> + 'a,
    ) -> Self {
        self.strategies.emit_root = Box::new(emit_root);
        self
    }

    /// Replace the iteration primitive. The replacement must call the
    /// visitor exactly once per node, in order.
    pub fn iterate(
        mut self,
        iterate: impl Fn(&[Node<T>], super::strategies::Visit<'_, T>) -> io::Result<()> + 'a,
    ) -> Self {
        self.strategies.iterate = Box::new(iterate);
        self
    }
}

impl<'a, T: ListChildren + 'a> TreeOptions<'a, T> {
    /// Build options for a value type that knows its own children.
    pub fn new(root: Option<T>) -> Self {
        Self::with_children(root, |ctx| {
            ctx.parent.map(T::list_children).unwrap_or_default()
        })
    }
}
