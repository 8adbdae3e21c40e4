//! Prefix generation - the glyph margin to the left of a node's label
//!
//! Every printed line is `prefix + label`. The prefix encodes, column by
//! column, which ancestors still have siblings below (vertical bar) and
//! which are finished (blank), then marks the node's own branch point.

use super::config::RenderConfig;

/// Depths at which an ancestor of the current node was the last child of
/// its parent. A closed level renders as a blank column instead of a
/// vertical bar, because nothing below needs to reach through it.
///
/// The set only grows, and it is cloned on every descent into a last
/// child, so sibling branches never observe each other's additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosedLevels(Vec<usize>);

impl ClosedLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, depth: usize) -> bool {
        self.0.contains(&depth)
    }

    /// The set a child frame receives: unchanged for a non-last child,
    /// extended with `depth` when the branch taken is the final one.
    pub fn child(&self, depth: usize, is_last: bool) -> Self {
        let mut next = self.clone();
        if is_last {
            next.0.push(depth);
        }
        next
    }
}

impl FromIterator<usize> for ClosedLevels {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Build the glyph margin for one node line.
///
/// `depth` is 1-based; the root's children are depth 1. For each ancestor
/// level the prefix gets a connector glyph plus `indentation - 1` spaces,
/// and the node's own level gets its branch connector plus the configured
/// horizontal run padded out to the same column width. Total width is
/// always `depth * indentation` glyphs.
///
/// Pure: identical inputs produce identical output. Range validity of the
/// numeric inputs is enforced upstream by [`RenderConfig::validate`].
pub fn node_prefix(
    depth: usize,
    is_last: bool,
    closed: &ClosedLevels,
    config: &RenderConfig,
) -> String {
    let c = config.connectors;
    let fill = config.indentation - 1;
    let mut prefix = String::new();

    for level in 1..depth {
        prefix.push(if closed.contains(level) {
            c.space
        } else {
            c.v_line
        });
        for _ in 0..fill {
            prefix.push(c.space);
        }
    }

    prefix.push(if is_last { c.elbow } else { c.tee });

    let h_lines = config.h_lines();
    for _ in 0..h_lines {
        prefix.push(c.h_line);
    }
    for _ in 0..fill - h_lines {
        prefix.push(c.space);
    }

    prefix
}
