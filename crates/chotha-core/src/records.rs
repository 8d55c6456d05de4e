//! Utilities for the records output format
//!
//! Records output is line-oriented: `H` lines carry headings, `B` lines
//! carry bodies (processed when the topic has been compacted, raw otherwise;
//! one line per topic, line-break markers escaped), and a final `S` line
//! carries generation stats.

use crate::generate::GenerationStats;
use crate::segment::Topic;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Escape a body for a single-line record: quotes escaped, line-break
/// markers rendered as literal `\n`
pub fn escape_body(s: &str) -> String {
    escape_quotes(s).replace('\n', r"\n")
}

/// Format one topic as its H/B record lines. Unprocessed topics carry
/// their raw body so segmentation output stays lossless.
pub fn format_topic_record(topic: &Topic) -> Vec<String> {
    let mut lines = vec![format!("H \"{}\"", escape_quotes(&topic.heading))];
    let body = topic
        .processed_body
        .as_deref()
        .unwrap_or(topic.raw_body.as_str());
    if !body.is_empty() {
        lines.push(format!("B \"{}\"", escape_body(body)));
    }
    lines
}

/// Format the trailing stats line
pub fn format_stats_record(stats: &GenerationStats) -> String {
    format!(
        "S boxes={} chars={}",
        stats.box_count, stats.total_characters
    )
}
