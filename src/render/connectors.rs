//! Connector glyph sets

/// The five glyphs a tree line is drawn from.
///
/// A prefix is built out of these and nothing else: `tee`/`elbow` mark a
/// node's own branch point, `v_line` continues an ancestor column that
/// still has siblings below, `h_line` runs from the branch point toward
/// the label, and `space` pads everything to the column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectors {
    pub tee: char,
    pub elbow: char,
    pub h_line: char,
    pub v_line: char,
    pub space: char,
}

impl Connectors {
    /// Box-drawing characters, the style of `tree` under a UTF-8 locale.
    ///
    /// ```text
    /// ├── a
    /// │   └── b
    /// └── c
    /// ```
    pub const fn unicode() -> Self {
        Self {
            tee: '├',
            elbow: '└',
            h_line: '─',
            v_line: '│',
            space: ' ',
        }
    }

    /// Plain ASCII, the style of `tree` with `LANG=C`.
    ///
    /// ```text
    /// |-- a
    /// |   `-- b
    /// `-- c
    /// ```
    pub const fn ascii() -> Self {
        Self {
            tee: '|',
            elbow: '`',
            h_line: '-',
            v_line: '|',
            space: ' ',
        }
    }
}

impl Default for Connectors {
    fn default() -> Self {
        Self::unicode()
    }
}
