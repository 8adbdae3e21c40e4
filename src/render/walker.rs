//! The traversal engine
//!
//! One synchronous, depth-first, pre-order walk. Each recursive frame
//! owns an independent copy of its path and closed-level set, so sibling
//! subtrees cannot observe each other's state. The only shared pieces
//! are the sink and the line counter, both confined to `Output`.

use std::io::{self, Write};

use crate::error::Error;

use super::config::RenderConfig;
use super::options::TreeOptions;
use super::prefix::{ClosedLevels, node_prefix};
use super::strategies::{
    ChildrenFn, DescendFn, EmitFn, IterateFn, LevelContext, NodeLine, OrderFn, Strategies,
};

/// The read-only half of a walk: configuration plus the pure strategies.
struct Passes<'p, 'a, T> {
    config: &'p RenderConfig,
    children: &'p ChildrenFn<'a, T>,
    descend: &'p DescendFn<'a, T>,
    order: &'p OrderFn<'a, T>,
    iterate: &'p IterateFn<'a, T>,
}

/// The mutable half: where lines go and how many have gone.
struct Output<'o, 'a, T> {
    emit: &'o mut EmitFn<'a, T>,
    sink: &'o mut dyn Write,
    sequence: usize,
}

/// Walk the tree described by `options`, writing one line per node to
/// `sink`.
///
/// Validation failures surface before a single byte is written; after
/// that, the only error source is emission, passed through unmodified.
/// Termination is entirely the children strategy's business: a strategy
/// that enumerates a cyclic structure recurses without bound.
pub fn print_tree<T>(options: TreeOptions<'_, T>, sink: &mut dyn Write) -> Result<(), Error> {
    options.config.validate()?;

    let TreeOptions {
        root,
        config,
        strategies,
    } = options;
    let Strategies {
        children,
        descend,
        order,
        mut emit,
        mut emit_root,
        iterate,
    } = strategies;

    emit_root(&mut *sink)?;

    let passes = Passes {
        config: &config,
        children: &children,
        descend: &descend,
        order: &order,
        iterate: &iterate,
    };
    let mut output = Output {
        emit: &mut emit,
        sink,
        sequence: 1,
    };

    walk(
        &passes,
        &mut output,
        root.as_ref(),
        1,
        &[],
        &ClosedLevels::new(),
    )?;
    Ok(())
}

fn walk<T>(
    passes: &Passes<'_, '_, T>,
    output: &mut Output<'_, '_, T>,
    parent: Option<&T>,
    depth: usize,
    path: &[String],
    closed: &ClosedLevels,
) -> io::Result<()> {
    // The cutoff comes first: enumeration has a cost the caller
    // controls, and it must never run past the configured bound.
    if passes.config.max_depth.is_some_and(|max| depth > max) {
        return Ok(());
    }

    let ctx = LevelContext {
        path,
        parent,
        depth,
    };
    let mut nodes = (passes.children)(&ctx);
    if nodes.is_empty() {
        return Ok(());
    }
    if !(passes.descend)(&ctx, &nodes) {
        return Ok(());
    }
    (passes.order)(&ctx, &mut nodes);

    (passes.iterate)(&nodes, &mut |node, index, all| {
        let is_last = index == all.len() - 1;

        let mut current_path = Vec::with_capacity(path.len() + 1);
        current_path.extend_from_slice(path);
        current_path.push(node.name.clone());

        let prefix = node_prefix(depth, is_last, closed, passes.config);

        output.sequence += 1;
        let line = NodeLine {
            node,
            prefix: &prefix,
            path: &current_path,
            parent,
            depth,
            sequence: output.sequence,
        };
        (output.emit)(&mut *output.sink, &line)?;

        walk(
            passes,
            output,
            Some(&node.value),
            depth + 1,
            &current_path,
            &closed.child(depth, is_last),
        )
    })
}
