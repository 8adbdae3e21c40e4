//! Output configuration types

/// Configuration for console output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Append scalar leaf values after the node name (`name: value`).
    pub show_values: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_values: false,
        }
    }
}
