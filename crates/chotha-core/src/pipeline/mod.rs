//! Compaction pipeline
//!
//! Transforms one topic body through an ordered sequence of lossy textual
//! compressions. The stage order is fixed; the compression level only
//! decides which stages run. Later stages operate on the output of earlier
//! ones, and skipped stages pass the text through unchanged.
//!
//! The pipeline is a pure function of `(body, config)`: no hidden state,
//! identical output on repeated calls, total over arbitrary printable text.

pub mod rules;
pub mod stages;

use crate::level::{CompressionConfig, Stage};

/// Marker inserted after sentence-ending punctuation
pub const LINE_BREAK: &str = "\n";

/// Opening highlight marker
pub const HIGHLIGHT_OPEN: &str = "«";

/// Closing highlight marker
pub const HIGHLIGHT_CLOSE: &str = "»";

/// Compact a topic body at the configured level.
///
/// Empty (or whitespace-only) bodies come back empty. A body consisting
/// solely of stop words may collapse to an empty string at High/Extreme;
/// that is accepted output, not an error.
pub fn compact(body: &str, config: &CompressionConfig) -> String {
    let level = config.level;

    let mut text = stages::normalize_whitespace(body);
    if text.is_empty() {
        return text;
    }

    text = stages::apply_rules(&text, rules::abbreviations());
    if level.is_active(Stage::Symbolize) {
        text = stages::apply_rules(&text, rules::symbols());
    }
    if level.is_active(Stage::StopWords) {
        text = stages::remove_stop_words(&text);
    }
    if level.is_active(Stage::VowelElision) {
        text = stages::elide_vowels(&text);
    }
    if level.is_active(Stage::SuffixStrip) {
        text = stages::strip_suffixes(&text);
    }
    text = stages::break_sentences(&text);
    let out = stages::highlight_keywords(&text);

    tracing::trace!(
        level = %level,
        chars_in = body.chars().count(),
        chars_out = out.chars().count(),
        "compact_body"
    );
    out
}
