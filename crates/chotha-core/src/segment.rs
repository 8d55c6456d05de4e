//! Topic segmenter
//!
//! Splits a raw note blob into an ordered sequence of (heading, body) topics
//! using line-oriented syntactic heuristics. No markup is required in the
//! input; a line "looks like" a heading if it is ALL-CAPS-and-spaces followed
//! by a colon, a short entirely upper-case line, or any line ending with a
//! colon. Input with no heading-qualifying line collapses to a single topic
//! under the fallback heading.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Heading used when the input yields no heading-qualifying line
pub const FALLBACK_HEADING: &str = "Notes";

/// Lines shorter than this qualify as headings when entirely upper-case
const CAPS_HEADING_MAX_LEN: usize = 30;

static CAPS_COLON_RE: OnceLock<Regex> = OnceLock::new();

fn caps_colon_re() -> &'static Regex {
    // Uppercase letters and spaces immediately followed by a colon
    CAPS_COLON_RE.get_or_init(|| Regex::new(r"^[A-Z][A-Z ]*:$").expect("valid regex"))
}

/// One cue-card's worth of content: a heading plus the raw text that
/// belongs to it. `processed_body` stays `None` until a generation cycle
/// runs the body through the compaction pipeline, and is fully recomputed
/// on every cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Short label for the box
    pub heading: String,
    /// Original text belonging to this topic, trimmed
    pub raw_body: String,
    /// Compacted body, populated by `generate`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_body: Option<String>,
}

impl Topic {
    /// Create an unprocessed topic with a trimmed body
    pub fn new(heading: impl Into<String>, raw_body: &str) -> Self {
        Self {
            heading: heading.into(),
            raw_body: raw_body.trim().to_string(),
            processed_body: None,
        }
    }
}

/// Whether a (non-blank, trimmed) line qualifies as a topic heading
fn is_heading(line: &str) -> bool {
    if caps_colon_re().is_match(line) {
        return true;
    }

    // Short, entirely upper-case line (must contain at least one letter so
    // bare numbers or separators do not open topics)
    if line.chars().count() < CAPS_HEADING_MAX_LEN
        && line.chars().any(|c| c.is_alphabetic())
        && !line.chars().any(|c| c.is_lowercase())
    {
        return true;
    }

    line.ends_with(':')
}

/// Heading text for a heading line: trailing colon dropped, whitespace trimmed
fn heading_text(line: &str) -> String {
    line.trim_end_matches(':').trim().to_string()
}

/// Split raw text into an ordered sequence of topics.
///
/// Deterministic: the same input always yields the same topics in the same
/// order. Never fails; malformed input degrades to the single fallback
/// topic. Callers reject empty/whitespace-only input before calling.
pub fn segment(raw_text: &str) -> Vec<Topic> {
    let mut topics = Vec::new();
    let mut open_heading: Option<String> = None;
    let mut body = String::new();

    for line in raw_text.lines() {
        let trimmed = line.trim();

        // Blank lines never qualify as headings but stay part of the body
        if !trimmed.is_empty() && is_heading(trimmed) {
            match open_heading.take() {
                Some(heading) => topics.push(Topic::new(heading, &body)),
                // Body text before the first heading belongs to an implicit
                // fallback topic
                None if !body.trim().is_empty() => {
                    topics.push(Topic::new(FALLBACK_HEADING, &body));
                }
                None => {}
            }
            body.clear();
            open_heading = Some(heading_text(trimmed));
        } else {
            body.push_str(line);
            body.push(' ');
        }
    }

    if let Some(heading) = open_heading {
        topics.push(Topic::new(heading, &body));
    }

    if topics.is_empty() {
        // No heading-qualifying line anywhere
        return vec![Topic::new(FALLBACK_HEADING, raw_text)];
    }

    topics
}
