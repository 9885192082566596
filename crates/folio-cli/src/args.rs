//! Command-line argument definitions for the Folio CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the page and output format, the output
//! destination, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// What to produce for the selected page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The rendered page body as HTML
    #[default]
    Html,
    /// The table of contents as an indented outline
    Toc,
    /// The page metadata as TOML
    Metadata,
}

/// Command-line arguments for the Folio page renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Slug, permalink or id of the page to render
    #[arg(default_value = "/")]
    pub page: String,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Break lines after block-level HTML elements
    #[arg(long)]
    pub pretty: bool,
}
