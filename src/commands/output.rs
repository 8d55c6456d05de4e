//! Output rendering for topics and generation reports
//!
//! Human output draws one simple box per topic; line-break markers in
//! processed bodies become real lines, highlight markers are printed as-is
//! for downstream emphasis. JSON and records outputs are stable shapes for
//! machine consumption.

use crate::cli::{Cli, OutputFormat};
use chotha_core::error::Result;
use chotha_core::generate::GenerationReport;
use chotha_core::records::{format_stats_record, format_topic_record};
use chotha_core::segment::Topic;

/// Print a full generation report
pub fn print_report(cli: &Cli, report: &GenerationReport) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            print_topics_human(&report.topics);
            if !cli.quiet {
                println!(
                    "boxes={} chars={}",
                    report.stats.box_count, report.stats.total_characters
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Records => {
            for topic in &report.topics {
                for line in format_topic_record(topic) {
                    println!("{}", line);
                }
            }
            println!("{}", format_stats_record(&report.stats));
        }
    }
    Ok(())
}

/// Print segmented (unprocessed) topics
pub fn print_topics(cli: &Cli, topics: &[Topic]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            print_topics_human(topics);
            if !cli.quiet {
                println!("topics={}", topics.len());
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({ "topics": topics });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            for topic in topics {
                for line in format_topic_record(topic) {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

fn print_topics_human(topics: &[Topic]) {
    for topic in topics {
        println!("== {} ==", topic.heading);
        // Processed bodies carry line-break markers; raw bodies are single
        // flattened lines
        let body = topic
            .processed_body
            .as_deref()
            .unwrap_or(topic.raw_body.as_str());
        if !body.is_empty() {
            println!("{}", body);
        }
        println!();
    }
}
