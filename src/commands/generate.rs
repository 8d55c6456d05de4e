//! `chotha generate` command - full generation cycle
//!
//! Reads plain-text sources (stdin when none are given), segments them into
//! topics, compacts each topic body at the requested level, and prints the
//! resulting boxes plus aggregate stats.

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::{extract, output};
use chotha_core::error::Result;
use chotha_core::generate::generate;
use chotha_core::level::{CompressionConfig, CompressionLevel};

/// Execute the generate command
pub fn execute(
    cli: &Cli,
    sources: &[PathBuf],
    level: CompressionLevel,
    start: Instant,
) -> Result<()> {
    let raw = extract::read_sources(sources)?;

    if cli.verbose {
        debug!(
            sources = sources.len(),
            chars = raw.chars().count(),
            elapsed = ?start.elapsed(),
            "read_sources"
        );
    }

    let config = CompressionConfig::new(level);
    let report = generate(&raw, &config)?;

    if cli.verbose {
        debug!(
            boxes = report.stats.box_count,
            chars = report.stats.total_characters,
            elapsed = ?start.elapsed(),
            "generate"
        );
    }

    output::print_report(cli, &report)
}
