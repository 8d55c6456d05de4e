//! Full generation cycle
//!
//! Segments raw text once, compacts every topic body at the configured
//! level, and reports aggregate stats. Runs to completion synchronously;
//! there is no partial or streaming output.

use serde::Serialize;

use crate::error::{ChothaError, Result};
use crate::level::CompressionConfig;
use crate::pipeline::compact;
use crate::segment::{segment, Topic};

/// Aggregate numbers for one generation cycle, recomputed every cycle and
/// never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Number of cue-card boxes produced
    pub box_count: usize,
    /// Total Unicode chars across all processed bodies
    pub total_characters: usize,
}

/// Result of one generation cycle: processed topics plus derived stats
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub topics: Vec<Topic>,
    pub stats: GenerationStats,
}

/// Run a full generation cycle over raw note text.
///
/// Empty or whitespace-only input is rejected before segmentation runs; no
/// partial output is produced. Everything past that precondition is
/// infallible: the segmenter and pipeline are total over string input.
pub fn generate(raw_text: &str, config: &CompressionConfig) -> Result<GenerationReport> {
    if raw_text.trim().is_empty() {
        return Err(ChothaError::EmptyInput);
    }

    let mut topics = segment(raw_text);

    let mut total_characters = 0;
    for topic in &mut topics {
        let processed = compact(&topic.raw_body, config);
        total_characters += processed.chars().count();
        topic.processed_body = Some(processed);
    }

    let stats = GenerationStats {
        box_count: topics.len(),
        total_characters,
    };

    tracing::debug!(
        boxes = stats.box_count,
        chars = stats.total_characters,
        level = %config.level,
        "generate"
    );

    Ok(GenerationReport { topics, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::CompressionLevel;
    use crate::segment::FALLBACK_HEADING;

    #[test]
    fn test_rejects_whitespace_only_input() {
        let config = CompressionConfig::default();
        assert!(matches!(generate("   ", &config), Err(ChothaError::EmptyInput)));
        assert!(matches!(generate("", &config), Err(ChothaError::EmptyInput)));
        assert!(matches!(generate("\n\t \n", &config), Err(ChothaError::EmptyInput)));
    }

    #[test]
    fn test_perception_scenario_low() {
        let raw = "PERCEPTION:\nSelection, organization, and interpretation are important steps.";
        let report = generate(raw, &CompressionConfig::new(CompressionLevel::Low)).unwrap();

        assert_eq!(report.topics.len(), 1);
        assert_eq!(report.topics[0].heading, "PERCEPTION");
        let body = report.topics[0].processed_body.as_deref().unwrap();
        assert!(body.contains("Imp."));
        assert!(!body.contains("important"));
        assert!(body.contains("and"));
        assert!(body.contains('\n'));
    }

    #[test]
    fn test_every_topic_gets_a_processed_body() {
        let raw = "ONE:\nfirst body\nTWO:\nsecond body";
        let report = generate(raw, &CompressionConfig::default()).unwrap();
        assert_eq!(report.topics.len(), 2);
        assert!(report.topics.iter().all(|t| t.processed_body.is_some()));
    }

    #[test]
    fn test_stats_count_boxes_and_processed_chars() {
        let raw = "ONE:\nalpha\nTWO:\nbeta";
        let report = generate(raw, &CompressionConfig::default()).unwrap();
        assert_eq!(report.stats.box_count, 2);
        let expected: usize = report
            .topics
            .iter()
            .map(|t| t.processed_body.as_deref().unwrap().chars().count())
            .sum();
        assert_eq!(report.stats.total_characters, expected);
    }

    #[test]
    fn test_empty_topic_body_contributes_zero_chars() {
        let raw = "LONE HEADING:";
        let report = generate(raw, &CompressionConfig::default()).unwrap();
        assert_eq!(report.stats.box_count, 1);
        assert_eq!(report.stats.total_characters, 0);
        assert_eq!(report.topics[0].processed_body.as_deref(), Some(""));
    }

    #[test]
    fn test_headingless_input_falls_back() {
        let report = generate("plain notes, nothing more", &CompressionConfig::default()).unwrap();
        assert_eq!(report.topics.len(), 1);
        assert_eq!(report.topics[0].heading, FALLBACK_HEADING);
    }

    #[test]
    fn test_deterministic_report() {
        let raw = "TOPIC:\nthe body is here";
        let config = CompressionConfig::new(CompressionLevel::High);
        let a = generate(raw, &config).unwrap();
        let b = generate(raw, &config).unwrap();
        assert_eq!(a.topics, b.topics);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_json_shape() {
        let raw = "TOPIC:\nbody text";
        let report = generate(raw, &CompressionConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["topics"].is_array());
        assert_eq!(json["stats"]["box_count"], 1);
        assert!(json["topics"][0]["processed_body"].is_string());
    }
}
