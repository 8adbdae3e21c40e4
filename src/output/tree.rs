//! Colored tree formatter for JSON values
//!
//! This module provides `TreeFormatter`, the emission strategy behind the
//! CLI: branch nodes (objects and arrays) in bold blue, leaves in white,
//! scalar values in green when enabled.

use std::io::{self, Write};

use serde_json::Value;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::render::NodeLine;

use super::config::OutputConfig;

/// Formatter for colored console output of JSON trees.
///
/// Owns its writer; hand its `write_root`/`write_node` methods to the
/// walker as the root and emission strategies.
pub struct TreeFormatter<W> {
    config: OutputConfig,
    writer: W,
}

impl TreeFormatter<StandardStream> {
    /// A formatter writing to stdout, honoring the color setting.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: Write> TreeFormatter<NoColor<W>> {
    /// A colorless formatter over any writer.
    pub fn plain(config: OutputConfig, writer: W) -> Self {
        Self::new(config, NoColor::new(writer))
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(config: OutputConfig, writer: W) -> Self {
        Self { config, writer }
    }

    /// Write the root marker line.
    pub fn write_root(&mut self, label: &str) -> io::Result<()> {
        self.writer
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(self.writer, "{}", label)?;
        self.writer.reset()
    }

    /// Write one node line: prefix, colored name, optional scalar value.
    pub fn write_node(&mut self, line: &NodeLine<'_, Value>) -> io::Result<()> {
        write!(self.writer, "{}", line.prefix)?;

        if is_branch(&line.node.value) {
            self.writer
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.writer, "{}", line.node.name)?;
            self.writer.reset()?;
        } else {
            self.writer
                .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            write!(self.writer, "{}", line.node.name)?;
            self.writer.reset()?;

            if self.config.show_values {
                write!(self.writer, ": ")?;
                self.writer
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                // Scalars display as their compact JSON text.
                write!(self.writer, "{}", line.node.value)?;
                self.writer.reset()?;
            }
        }

        writeln!(self.writer)
    }
}

/// Branch nodes are the ones that can have children of their own.
fn is_branch(value: &Value) -> bool {
    value.is_object() || value.is_array()
}
