//! `chotha segment` command - topic segmentation only
//!
//! Shows the heading/body split the generation cycle would use, without
//! running the compaction pipeline. Useful for checking how the heading
//! heuristic reads a set of notes.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::{extract, output};
use chotha_core::error::{ChothaError, Result};
use chotha_core::segment::segment;

/// Execute the segment command
pub fn execute(cli: &Cli, source: Option<&Path>, start: Instant) -> Result<()> {
    let raw = match source {
        Some(path) => extract::read_source(path)?,
        None => extract::read_stdin()?,
    };

    // Same precondition as generation: segmentation never sees blank input
    if raw.trim().is_empty() {
        return Err(ChothaError::EmptyInput);
    }

    let topics = segment(&raw);

    if cli.verbose {
        debug!(topics = topics.len(), elapsed = ?start.elapsed(), "segment");
    }

    output::print_topics(cli, &topics)
}
