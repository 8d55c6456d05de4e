//! The individual pipeline stage transforms
//!
//! Every stage is a total, pure function over arbitrary printable text.
//! Stages that insert markers (line breaks, highlights) recognize their own
//! output and never re-wrap or duplicate markers on reapplication.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::pipeline::rules::{ReplacementRule, HIGHLIGHT_SYMBOLS, STOP_WORDS, SUFFIXES};
use crate::pipeline::{HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, LINE_BREAK};

/// Words shorter than this count as short and are never vowel-elided.
/// A 3-letter word carries at most two consonants, so 4 is the first
/// length that can hold the required three consonant-bearing characters.
const ELISION_MIN_LEN: usize = 4;

/// A suffix strip must leave a stem of at least this many chars
const SUFFIX_MIN_STEM: usize = 2;

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
static STOP_WORD_RE: OnceLock<Regex> = OnceLock::new();
static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
static HIGHLIGHT_RE: OnceLock<Regex> = OnceLock::new();

/// Stage 1: collapse whitespace runs (including newlines) to a single
/// space and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    let re = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    re.replace_all(text, " ").trim().to_string()
}

/// Stages 2 and 3: apply an ordered rule table, once per rule
pub fn apply_rules(text: &str, rules: &[ReplacementRule]) -> String {
    let mut out = text.to_string();
    for rule in rules {
        out = rule.matcher.replace_all(&out, rule.replacement).into_owned();
    }
    out
}

/// Stage 4: remove whole-word stop words, then collapse the spacing the
/// removals leave behind
pub fn remove_stop_words(text: &str) -> String {
    let re = STOP_WORD_RE.get_or_init(|| {
        let alternation = STOP_WORDS.join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid regex")
    });
    normalize_whitespace(&re.replace_all(text, ""))
}

/// Stage 5: strip internal vowels from each long word, keeping the leading
/// character and every consonant
pub fn elide_vowels(text: &str) -> String {
    map_words(text, elide_word)
}

/// Stage 6: strip one derivational suffix (or its disemvoweled skeleton)
/// from the end of each word
pub fn strip_suffixes(text: &str) -> String {
    map_words(text, strip_word_suffix)
}

/// Stage 7: insert a line break after sentence-ending punctuation followed
/// by a space; the space is consumed.
///
/// The optional closing highlight marker keeps reapplication from losing
/// breaks that sit after an already highlighted abbreviation.
pub fn break_sentences(text: &str) -> String {
    let re = SENTENCE_RE.get_or_init(|| {
        Regex::new(&format!(r"([.!?;]{HIGHLIGHT_CLOSE}?) ")).expect("valid regex")
    });
    re.replace_all(text, format!("${{1}}{LINE_BREAK}"))
        .into_owned()
}

/// Stage 8: wrap capitalized words, standalone numbers (optional `%`), and
/// symbol tokens in highlight markers. Already wrapped tokens are left
/// untouched, which makes the stage insertion-only on reapplication.
pub fn highlight_keywords(text: &str) -> String {
    let re = HIGHLIGHT_RE.get_or_init(|| {
        Regex::new(&format!(
            r"({HIGHLIGHT_OPEN}?)(\b[A-Z][A-Za-z]*\.?|\b\d+(?:\.\d+)?%?|[{HIGHLIGHT_SYMBOLS}])({HIGHLIGHT_CLOSE}?)"
        ))
        .expect("valid regex")
    });
    re.replace_all(text, |caps: &Captures| {
        let (open, token, close) = (&caps[1], &caps[2], &caps[3]);
        if open.is_empty() && close.is_empty() {
            format!("{HIGHLIGHT_OPEN}{token}{HIGHLIGHT_CLOSE}")
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

/// Apply a word transform to each space-separated token, leaving any
/// leading/trailing punctuation (and markers) around the token intact.
/// Tokens whose core is not purely alphabetic pass through unchanged.
fn map_words(text: &str, transform: impl Fn(&str) -> String) -> String {
    text.split(' ')
        .map(|token| {
            let core_start = token
                .find(|c: char| c.is_alphabetic())
                .unwrap_or(token.len());
            let core_end = token
                .rfind(|c: char| c.is_alphabetic())
                .map_or(core_start, |i| i + token[i..].chars().next().map_or(1, char::len_utf8));
            let (prefix, rest) = token.split_at(core_start);
            let (core, suffix) = rest.split_at(core_end - core_start);

            if core.is_empty() || !core.chars().all(|c| c.is_alphabetic()) {
                return token.to_string();
            }
            format!("{prefix}{}{suffix}", transform(core))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Reduce a word to its skeletal consonant shape: keep the first char,
/// drop every later vowel. Short words stay untouched.
fn elide_word(word: &str) -> String {
    if word.chars().count() < ELISION_MIN_LEN {
        return word.to_string();
    }

    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        out.push(first);
    }
    out.extend(chars.filter(|c| !is_vowel(*c)));

    // Never reduce past a recognizable remnant
    if out.chars().count() < 2 {
        return word.to_string();
    }
    out
}

/// Strip the first matching suffix in table order, once
fn strip_word_suffix(word: &str) -> String {
    // Suffix table is ASCII; byte offsets below rely on that
    if !word.is_ascii() {
        return word.to_string();
    }
    let lower = word.to_lowercase();
    for suffix in SUFFIXES {
        if let Some(stem_len) = lower.len().checked_sub(suffix.len()) {
            if lower.ends_with(suffix) && lower[..stem_len].chars().count() >= SUFFIX_MIN_STEM {
                return word[..stem_len].to_string();
            }
        }
    }
    word.to_string()
}
