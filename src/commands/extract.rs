//! Source acquisition
//!
//! The engine only ever receives already-decoded text. Plain-text files are
//! read directly; binary document formats (PDF, Word, Excel, PowerPoint)
//! belong to an external extraction service and are rejected here with an
//! error naming the source file. Extraction failures are reported exactly
//! once, at this boundary.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use chotha_core::error::{ChothaError, Result};

/// Source types this CLI reads itself
const SUPPORTED: &str = "plain text (.txt, .md, or stdin)";

/// Document formats delegated to an external extraction service
const DELEGATED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx"];

/// Read all sources into one raw text blob. With no sources, read stdin.
/// Multiple files are joined with a blank line so their boundaries never
/// satisfy the heading heuristic.
pub fn read_sources(sources: &[impl AsRef<Path>]) -> Result<String> {
    if sources.is_empty() {
        return read_stdin();
    }

    let mut parts = Vec::with_capacity(sources.len());
    for source in sources {
        parts.push(read_source(source.as_ref())?);
    }
    Ok(parts.join("\n\n"))
}

/// Read stdin to a string
pub fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    debug!(chars = raw.chars().count(), "read_stdin");
    Ok(raw)
}

/// Read one plain-text source file
pub fn read_source(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    if let Some(ext) = &extension {
        if DELEGATED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ChothaError::unsupported_source(path, SUPPORTED));
        }
    }

    // Anything with a confidently non-text MIME guess is not ours to decode
    if let Some(mime) = mime_guess::from_path(path).first() {
        if mime.type_() != mime_guess::mime::TEXT {
            return Err(ChothaError::unsupported_source(path, SUPPORTED));
        }
    }

    let raw =
        fs::read_to_string(path).map_err(|e| ChothaError::extraction_failed(path, e))?;
    debug!(path = %path.display(), chars = raw.chars().count(), "read_source");
    Ok(raw)
}
