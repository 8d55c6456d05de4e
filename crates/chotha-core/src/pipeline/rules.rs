//! Fixed replacement-rule tables for the compaction pipeline
//!
//! Rules are immutable and ordered; order of application is part of the
//! contract. Each table is applied once per rule, in table order, and a
//! replacement's output is never re-scanned by an earlier rule. Multi-word
//! phrases sit ahead of their component words so idioms are recognized
//! before the words become individually eligible for later stages.

use std::sync::OnceLock;

use regex::Regex;

/// A single pattern-to-replacement mapping, case-insensitive and
/// word/phrase-boundary matched
pub struct ReplacementRule {
    /// Case-insensitive matcher
    pub matcher: Regex,
    /// Literal replacement, may carry typographic symbols
    pub replacement: &'static str,
}

impl ReplacementRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            matcher: Regex::new(&format!(r"(?i)\b{pattern}\b")).expect("valid rule pattern"),
            replacement,
        }
    }
}

static ABBREVIATIONS: OnceLock<Vec<ReplacementRule>> = OnceLock::new();
static SYMBOLS: OnceLock<Vec<ReplacementRule>> = OnceLock::new();

/// Long-form to short-form abbreviation table (all levels)
pub fn abbreviations() -> &'static [ReplacementRule] {
    ABBREVIATIONS.get_or_init(|| {
        vec![
            ReplacementRule::new("for example", "e.g."),
            ReplacementRule::new("that is", "i.e."),
            ReplacementRule::new("important", "Imp."),
            ReplacementRule::new("definition", "Def."),
            ReplacementRule::new("function", "Func."),
            ReplacementRule::new("example", "Eg."),
            ReplacementRule::new("equation", "Eqn."),
            ReplacementRule::new("question", "Qn."),
            ReplacementRule::new("answer", "Ans."),
            ReplacementRule::new("number", "No."),
            ReplacementRule::new("maximum", "Max."),
            ReplacementRule::new("minimum", "Min."),
            ReplacementRule::new("average", "Avg."),
            ReplacementRule::new("department", "Dept."),
            ReplacementRule::new("government", "Govt."),
            ReplacementRule::new("introduction", "Intro."),
            ReplacementRule::new("information", "Info."),
            ReplacementRule::new("difference", "Diff."),
            ReplacementRule::new("versus", "vs."),
            ReplacementRule::new("between", "b/w"),
        ]
    })
}

/// Connective-word to symbol table (Medium and above)
pub fn symbols() -> &'static [ReplacementRule] {
    SYMBOLS.get_or_init(|| {
        vec![
            ReplacementRule::new("leads to", "→"),
            ReplacementRule::new("results in", "→"),
            ReplacementRule::new("not equal to", "≠"),
            ReplacementRule::new("not equal", "≠"),
            ReplacementRule::new("greater than", ">"),
            ReplacementRule::new("less than", "<"),
            ReplacementRule::new("divided by", "÷"),
            ReplacementRule::new("multiplied by", "×"),
            ReplacementRule::new("approximately", "≈"),
            ReplacementRule::new("therefore", "∴"),
            ReplacementRule::new("because", "∵"),
            ReplacementRule::new("increas(?:es|ed|ing|e)", "↑"),
            ReplacementRule::new("decreas(?:es|ed|ing|e)", "↓"),
            ReplacementRule::new("equals", "="),
            ReplacementRule::new("without", "w/o"),
            ReplacementRule::new("with", "w/"),
            ReplacementRule::new("and", "&"),
            ReplacementRule::new("plus", "+"),
            // U+2212 rather than a hyphen so the highlighter never matches
            // hyphenated words
            ReplacementRule::new("minus", "−"),
        ]
    })
}

/// Symbol tokens the highlighter treats as emphasis-worthy
pub const HIGHLIGHT_SYMBOLS: &str = "↑↓→∴∵≈=≠><+−÷×";

/// Stop words removed at High and Extreme: articles, copulas,
/// demonstrative/relative pronouns
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "be", "being", "been", "this", "that", "these",
    "those", "which", "who", "whom", "whose",
];

/// Derivational suffixes stripped at Extreme, in application order.
///
/// Each literal suffix is paired with its disemvoweled skeleton (where the
/// skeleton keeps at least 2 chars) so the fixed stage order — vowel
/// elision before suffix stripping — still removes suffixes from already
/// elided words ("organization" → "orgnztn" → "orgnz").
pub const SUFFIXES: &[&str] = &[
    "ing", "ng", "ed", "tion", "tn", "sion", "sn", "ment", "mnt", "ity", "ty", "able", "ible",
    "bl", "al", "ive", "ous", "ful", "fl", "less", "lss", "ness", "nss", "ship", "shp", "hood",
    "hd", "dom", "dm", "ism", "sm", "ist", "st", "ance", "ence", "nc", "ery", "ory", "ry",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_rules_compile_and_match_whole_words() {
        let imp = &abbreviations()[2];
        assert!(imp.matcher.is_match("important"));
        assert!(imp.matcher.is_match("Important steps"));
        // Phrase boundary: no match inside a longer word
        assert!(!imp.matcher.is_match("unimportantly"));
        assert_eq!(imp.replacement, "Imp.");
    }

    #[test]
    fn test_phrase_rules_precede_component_words() {
        let table = abbreviations();
        let phrase_pos = table
            .iter()
            .position(|r| r.replacement == "e.g.")
            .unwrap();
        let word_pos = table.iter().position(|r| r.replacement == "Eg.").unwrap();
        assert!(phrase_pos < word_pos);
    }

    #[test]
    fn test_symbol_rules_case_insensitive() {
        let therefore = symbols()
            .iter()
            .find(|r| r.replacement == "∴")
            .unwrap();
        assert!(therefore.matcher.is_match("Therefore"));
        assert!(therefore.matcher.is_match("THEREFORE"));
    }

    #[test]
    fn test_without_precedes_with() {
        let table = symbols();
        let wo = table.iter().position(|r| r.replacement == "w/o").unwrap();
        let w = table.iter().position(|r| r.replacement == "w/").unwrap();
        assert!(wo < w);
    }

    #[test]
    fn test_skeleton_suffixes_follow_their_literals() {
        let tion = SUFFIXES.iter().position(|s| *s == "tion").unwrap();
        let tn = SUFFIXES.iter().position(|s| *s == "tn").unwrap();
        assert_eq!(tn, tion + 1);
    }
}
