//! CLI argument parsing for chotha
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use chotha_core::format::OutputFormat;
use chotha_core::level::CompressionLevel;

/// Chotha - cue-card note compactor
#[derive(Parser, Debug)]
#[command(name = "chotha")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, or records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full generation cycle: segment, compact, report boxes and stats
    Generate {
        /// Plain-text source files (stdin when none given)
        source: Vec<PathBuf>,

        /// Compression level
        #[arg(long, short, value_parser = parse_level, default_value = "medium")]
        level: CompressionLevel,
    },

    /// Split raw notes into topics without compacting them
    Segment {
        /// Plain-text source file (stdin when omitted)
        source: Option<PathBuf>,
    },

    /// Run one body (stdin) through the compaction pipeline
    Compact {
        /// Compression level
        #[arg(long, short, value_parser = parse_level, default_value = "medium")]
        level: CompressionLevel,
    },
}

/// Parse compression level from string
fn parse_level(s: &str) -> Result<CompressionLevel, String> {
    s.parse::<CompressionLevel>().map_err(|e| e.to_string())
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
