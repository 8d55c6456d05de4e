//! Integration tests for the chotha CLI
//!
//! These tests run the chotha binary and verify exit codes, output formats,
//! and end-to-end generation behavior.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for chotha
fn chotha() -> Command {
    cargo_bin_cmd!("chotha")
}

const PERCEPTION_NOTES: &str =
    "PERCEPTION:\nSelection, organization, and interpretation are important steps.";

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    chotha()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: chotha"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("compact"));
}

#[test]
fn test_version_flag() {
    chotha()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chotha"));
}

#[test]
fn test_subcommand_help() {
    chotha()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generation cycle"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    chotha()
        .args(["--format", "invalid", "generate"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    chotha()
        .args(["--format", "json", "generate", "--bogus-flag"])
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_usage_error() {
    chotha()
        .args(["--format", "json", "--format", "human", "generate"])
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    chotha().arg("nonexistent").assert().code(2);
}

#[test]
fn test_no_command_exit_code_2() {
    chotha()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no command given"));
}

#[test]
fn test_unknown_level_exit_code_2() {
    chotha()
        .args(["compact", "--level", "maximal"])
        .write_stdin("x")
        .assert()
        .code(2);
}

// ============================================================================
// Empty-input precondition tests
// ============================================================================

#[test]
fn test_whitespace_only_input_rejected_exit_code_3() {
    chotha()
        .arg("generate")
        .write_stdin("   \n\t  ")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_whitespace_only_input_json_envelope() {
    chotha()
        .args(["--format", "json", "generate"])
        .write_stdin("   ")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"empty_input\""));
}

#[test]
fn test_rejected_input_produces_no_boxes() {
    let output = chotha().arg("generate").write_stdin("   ").unwrap_err();
    let output = output.as_output().unwrap();
    assert!(output.stdout.is_empty());
}

// ============================================================================
// Source acquisition tests
// ============================================================================

#[test]
fn test_generate_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, PERCEPTION_NOTES).unwrap();

    chotha()
        .arg("generate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("== PERCEPTION =="))
        .stdout(predicate::str::contains("Imp."));
}

#[test]
fn test_generate_from_multiple_files() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "ALPHA:\nfirst body").unwrap();
    fs::write(&b, "BETA:\nsecond body").unwrap();

    chotha()
        .arg("generate")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("== ALPHA =="))
        .stdout(predicate::str::contains("== BETA =="))
        .stdout(predicate::str::contains("boxes=2"));
}

#[test]
fn test_binary_document_rejected_with_source_name() {
    chotha()
        .args(["generate", "slides.pptx"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("slides.pptx"));
}

#[test]
fn test_missing_file_exit_code_3() {
    chotha()
        .args(["generate", "no-such-notes.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no-such-notes.txt"));
}

// ============================================================================
// Generate command tests
// ============================================================================

#[test]
fn test_generate_low_scenario() {
    let assert = chotha()
        .args(["generate", "--level", "low"])
        .write_stdin(PERCEPTION_NOTES)
        .assert()
        .success()
        .stdout(predicate::str::contains("== PERCEPTION =="))
        .stdout(predicate::str::contains("Imp."))
        .stdout(predicate::str::contains("boxes=1"));

    // No stop-word removal at low
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("and"));
    assert!(stdout.contains("are"));
    assert!(!stdout.contains("important"));
}

#[test]
fn test_generate_extreme_scenario() {
    let assert = chotha()
        .args(["generate", "--level", "extreme"])
        .write_stdin(PERCEPTION_NOTES)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    // Stop words gone, vowel-elided forms present, "tion" endings stripped
    assert!(!stdout.contains(" are "));
    assert!(stdout.contains("orgnz"));
    assert!(!stdout.contains("organization"));
}

#[test]
fn test_generate_headingless_input_falls_back_to_notes() {
    chotha()
        .arg("generate")
        .write_stdin("just a plain paragraph without headings")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Notes =="))
        .stdout(predicate::str::contains("boxes=1"));
}

#[test]
fn test_generate_deterministic() {
    let run = || {
        let assert = chotha()
            .args(["generate", "--level", "high"])
            .write_stdin(PERCEPTION_NOTES)
            .assert()
            .success();
        String::from_utf8_lossy(&assert.get_output().stdout).to_string()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_quiet_suppresses_stats() {
    chotha()
        .args(["--quiet", "generate"])
        .write_stdin(PERCEPTION_NOTES)
        .assert()
        .success()
        .stdout(predicate::str::contains("boxes=").not());
}

#[test]
fn test_generate_json_output() {
    let assert = chotha()
        .args(["--format", "json", "generate", "--level", "low"])
        .write_stdin(PERCEPTION_NOTES)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["stats"]["box_count"], 1);
    assert_eq!(json["topics"][0]["heading"], "PERCEPTION");
    assert!(json["topics"][0]["processed_body"]
        .as_str()
        .unwrap()
        .contains("Imp."));
}

#[test]
fn test_generate_records_output() {
    chotha()
        .args(["--format", "records", "generate"])
        .write_stdin(PERCEPTION_NOTES)
        .assert()
        .success()
        .stdout(predicate::str::contains("H \"PERCEPTION\""))
        .stdout(predicate::str::starts_with("H "))
        .stdout(predicate::str::contains("S boxes=1"));
}

// ============================================================================
// Segment command tests
// ============================================================================

#[test]
fn test_segment_two_headings() {
    chotha()
        .arg("segment")
        .write_stdin("MEMORY:\nencoding and storage\nRETRIEVAL:\nrecall and recognition")
        .assert()
        .success()
        .stdout(predicate::str::contains("== MEMORY =="))
        .stdout(predicate::str::contains("== RETRIEVAL =="))
        .stdout(predicate::str::contains("topics=2"));
}

#[test]
fn test_segment_shows_raw_bodies() {
    chotha()
        .arg("segment")
        .write_stdin("TOPIC:\nthe important unchanged words")
        .assert()
        .success()
        .stdout(predicate::str::contains("the important unchanged words"));
}

#[test]
fn test_segment_records_include_raw_bodies() {
    chotha()
        .args(["--format", "records", "segment"])
        .write_stdin("TOPIC:\nthe raw body words")
        .assert()
        .success()
        .stdout(predicate::str::contains("H \"TOPIC\""))
        .stdout(predicate::str::contains("B \"the raw body words\""));
}

#[test]
fn test_segment_whitespace_only_rejected() {
    chotha()
        .arg("segment")
        .write_stdin("  \n ")
        .assert()
        .code(3);
}

// ============================================================================
// Compact command tests
// ============================================================================

#[test]
fn test_compact_medium_substitutes_symbols() {
    chotha()
        .arg("compact")
        .write_stdin("heat leads to an increase in pressure")
        .assert()
        .success()
        .stdout(predicate::str::contains("→"))
        .stdout(predicate::str::contains("↑"));
}

#[test]
fn test_compact_low_keeps_connectives() {
    chotha()
        .args(["compact", "--level", "low"])
        .write_stdin("this definition leads to that")
        .assert()
        .success()
        .stdout(predicate::str::contains("Def."))
        .stdout(predicate::str::contains("leads to"));
}

#[test]
fn test_compact_extreme_elides_vowels() {
    chotha()
        .args(["compact", "--level", "extreme"])
        .write_stdin("selection of materials")
        .assert()
        .success()
        .stdout(predicate::str::contains("slc"));
}

#[test]
fn test_compact_empty_stdin_is_empty_output() {
    chotha()
        .arg("compact")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff("\n"));
}

#[test]
fn test_compact_records_output() {
    chotha()
        .args(["--format", "records", "compact"])
        .write_stdin("one. two")
        .assert()
        .success()
        .stdout(predicate::str::contains("B \"one.\\ntwo\""));
}
