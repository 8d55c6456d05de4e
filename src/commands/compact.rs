//! `chotha compact` command - run one body through the pipeline
//!
//! Reads a single topic body from stdin and prints its compacted form.
//! The pipeline is total: empty input simply produces empty output.
//!
//! Example usage:
//! - `pbpaste | chotha compact --level extreme`
//! - `chotha compact < body.txt`

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::extract;
use chotha_core::error::Result;
use chotha_core::level::{CompressionConfig, CompressionLevel};
use chotha_core::pipeline::compact;
use chotha_core::records::escape_body;

/// Execute the compact command
pub fn execute(cli: &Cli, level: CompressionLevel, start: Instant) -> Result<()> {
    let body = extract::read_stdin()?;

    let config = CompressionConfig::new(level);
    let processed = compact(&body, &config);

    if cli.verbose {
        debug!(
            chars_in = body.chars().count(),
            chars_out = processed.chars().count(),
            elapsed = ?start.elapsed(),
            "compact"
        );
    }

    match cli.format {
        OutputFormat::Human => println!("{}", processed),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "level": level.to_string(),
                "body": processed,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => println!("B \"{}\"", escape_body(&processed)),
    }

    Ok(())
}
