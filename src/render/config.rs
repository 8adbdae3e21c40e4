//! Configuration for tree rendering

use crate::error::ConfigError;

use super::connectors::Connectors;

/// Configuration for prefix layout and traversal bounds.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Levels deeper than this are never enumerated. `None` = unbounded.
    pub max_depth: Option<usize>,
    /// Glyph width of one depth column, connector included. Must be >= 2.
    pub indentation: usize,
    /// Horizontal glyphs between a branch connector and the label.
    /// `None` means `indentation - 2`, leaving one space before the label.
    pub h_lines: Option<usize>,
    pub connectors: Connectors,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            indentation: 4,
            h_lines: None,
            connectors: Connectors::unicode(),
        }
    }
}

impl RenderConfig {
    /// The effective horizontal-line run length.
    pub fn h_lines(&self) -> usize {
        self.h_lines.unwrap_or(self.indentation - 2)
    }

    /// Check the numeric ranges. Called by the walker before it writes
    /// anything; exposed for callers that want to fail early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indentation < 2 {
            return Err(ConfigError::IndentationTooNarrow(self.indentation));
        }
        if let Some(h_lines) = self.h_lines {
            let max = self.indentation - 1;
            if h_lines > max {
                return Err(ConfigError::HLinesOutOfRange { got: h_lines, max });
            }
        }
        Ok(())
    }
}
