//! CLI entry point for bough

use std::cell::RefCell;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use serde_json::Value;

use bough::{
    Connectors, Error, OutputConfig, RenderConfig, TreeFormatter, TreeOptions, print_tree,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bough")]
#[command(about = "Draw a JSON document as a box-drawing tree")]
#[command(version)]
struct Args {
    /// JSON file to render; reads stdin when omitted
    file: Option<PathBuf>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Column width of one depth level (connector included)
    #[arg(long = "indent", default_value = "4")]
    indent: usize,

    /// Horizontal-line glyphs before each label (default: indent - 2)
    #[arg(long = "h-lines", value_name = "N")]
    h_lines: Option<usize>,

    /// Use plain ASCII connectors instead of box-drawing characters
    #[arg(long = "ascii")]
    ascii: bool,

    /// Label for the root line
    #[arg(long = "root", default_value = ".", value_name = "LABEL")]
    root: String,

    /// Sort sibling nodes by name
    #[arg(short = 's', long = "sort")]
    sort: bool,

    /// Show scalar leaf values after their names
    #[arg(short = 'v', long = "values")]
    values: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let render_config = RenderConfig {
        max_depth: args.level,
        indentation: args.indent,
        h_lines: args.h_lines,
        connectors: if args.ascii {
            Connectors::ascii()
        } else {
            Connectors::unicode()
        },
    };

    // Reject bad numeric options before touching the input.
    if let Err(e) = render_config.validate() {
        eprintln!("bough: {}", e);
        process::exit(1);
    }

    let text = match &args.file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("bough: cannot read '{}': {}", path.display(), e);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("bough: cannot read stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let value: Value = serde_json::from_str(&text).unwrap_or_else(|e| {
        let source = args
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        eprintln!("bough: invalid JSON in '{}': {}", source, e);
        process::exit(1);
    });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        show_values: args.values,
    };
    let formatter = RefCell::new(TreeFormatter::stdout(output_config));

    let mut options = TreeOptions::new(Some(value))
        .config(render_config)
        .emit_root(|_| formatter.borrow_mut().write_root(&args.root))
        .emit(|_, line| formatter.borrow_mut().write_node(line));

    if args.sort {
        options = options.order(|_, nodes| {
            nodes.sort_by(|left, right| left.name.cmp(&right.name));
        });
    }

    if let Err(e) = print_tree(options, &mut io::stdout()) {
        match e {
            Error::Config(e) => eprintln!("bough: {}", e),
            Error::Io(e) => eprintln!("bough: error writing output: {}", e),
        }
        process::exit(1);
    }
}
