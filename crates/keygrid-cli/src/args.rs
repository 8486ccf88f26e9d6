//! Command-line argument definitions for the Keygrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, logging verbosity and whether to render or list.

use clap::Parser;

/// Command-line arguments for the Keygrid keyboard diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the annotated source file
    #[arg(help = "Path to the input file (default: `source.path` from the config)")]
    pub input: Option<String>,

    /// Path to the output SVG file (default: `render.image` from the config, else out.svg)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the parsed keymaps instead of rendering them
    #[arg(long)]
    pub list: bool,
}
