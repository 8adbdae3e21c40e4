//! Error types for tree rendering

use std::io;

use thiserror::Error;

/// Rejected configuration, raised before any line is written.
///
/// Only numeric ranges are checked at runtime; everything else about the
/// options bundle is enforced by its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `indentation` must leave room for a connector plus at least one fill glyph.
    #[error("`indentation` must be greater than or equal to 2 (got {0})")]
    IndentationTooNarrow(usize),

    /// `h_lines` must fit inside one indentation column.
    #[error("`h_lines` must be less than or equal to `indentation` - 1 ({max}), got {got}")]
    HLinesOutOfRange { got: usize, max: usize },
}

/// Anything `print_tree` can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An emission strategy or the sink failed; passed through unmodified.
    #[error(transparent)]
    Io(#[from] io::Error),
}
