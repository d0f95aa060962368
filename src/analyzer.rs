// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: tokenization, stop words, stemming, and correlation prefixes.
//!
//! Everything that turns raw field text into index terms lives here, and the
//! query path reuses the exact same machinery. If ingest and query ever
//! disagree on the character class or the stemmer, phrase positions and term
//! lookups silently stop lining up, so both sides call into this module.
//!
//! # Correlation prefixes
//!
//! Tokens may carry a semantic marker: `%%word`, `%word`, or `$word`. Marked
//! tokens are indexed verbatim (never stemmed) and the stripped form is
//! registered as a synonym of the marked form at a fixed closeness. `$`-style
//! tokens double as operator names (`$eq`, `$lookup`), which is why the
//! marker must survive tokenization when prefix retention is requested.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Token pattern: an optional correlation marker followed by an alphanumeric
/// run. `%%` must be tried before `%` so the double marker is not split.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:%%|[%$])?[\p{L}\p{N}]+").expect("valid token regex"));

static STEMMER: LazyLock<rust_stemmers::Stemmer> =
    LazyLock::new(|| rust_stemmers::Stemmer::create(rust_stemmers::Algorithm::English));

/// English stop words.
///
/// These words are too common to carry ranking signal and would otherwise
/// dominate the per-field token totals that the relevance model divides by.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let words: &[&str] = &[
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did",
        "didn't", "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few",
        "for", "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
        "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him",
        "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into",
        "is", "isn't", "it", "it's", "its", "itself", "let's", "me", "more", "most", "mustn't",
        "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
        "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "she'd",
        "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
        "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
        "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through",
        "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
        "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
        "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
        "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
        "yourself", "yourselves",
    ];
    words.iter().copied().collect()
});

/// Check if a word is a stop word. Callers filter at the call site so that
/// the global position counter only advances for tokens that are kept.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Normalize a string for indexing: strip diacritics, lowercase, and collapse
/// whitespace.
///
/// This enables matching between ASCII and accented spellings:
/// - "café" → "cafe"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Lowercases and collapses whitespace; assumes ASCII or pre-folded input.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-preserving variant of [`normalize`], used by the query parser so
/// mandatory-term lookups can see the original spelling.
#[cfg(feature = "unicode-normalization")]
fn normalize_keep_case(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(not(feature = "unicode-normalization"))]
fn normalize_keep_case(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Tokenize text into lowercase terms.
///
/// With `keep_prefixes`, correlation markers (`$`, `%`, `%%`) stay attached
/// to their token; otherwise they are stripped. The character class is shared
/// with the query parser, which is the contract that keeps ingest and query
/// in agreement.
pub fn tokenize(text: &str, keep_prefixes: bool) -> Vec<String> {
    scan(&normalize(text), keep_prefixes)
}

/// Tokenize preserving the original case. Only the query parser wants this:
/// mandatory-term membership is decided on the raw spelling before the terms
/// are lowercased for stemming.
pub fn tokenize_preserving_case(text: &str, keep_prefixes: bool) -> Vec<String> {
    scan(&normalize_keep_case(text), keep_prefixes)
}

fn scan(text: &str, keep_prefixes: bool) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| {
            if keep_prefixes {
                m.as_str().to_string()
            } else {
                m.as_str().trim_start_matches(['$', '%']).to_string()
            }
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split a correlation marker off a token: `"%%atlas"` → `("%%", "atlas")`.
///
/// Returns `None` for unmarked tokens and for bare markers.
pub fn split_correlation_prefix(token: &str) -> Option<(&str, &str)> {
    if let Some(rest) = token.strip_prefix("%%") {
        if !rest.is_empty() {
            return Some(("%%", rest));
        }
    } else if token.starts_with('$') || token.starts_with('%') {
        let rest = &token[1..];
        if !rest.is_empty() {
            return Some((&token[..1], rest));
        }
    }
    None
}

/// Stem a lowercase token.
///
/// Tokens carrying a correlation marker pass through verbatim: the index
/// stores them unaltered, and stemming here would desynchronize the synonym
/// registered by the marker rule from the posting it points at.
pub fn stem(token: &str) -> String {
    if split_correlation_prefix(token).is_some() {
        return token.to_string();
    }
    STEMMER.stem(token).to_string()
}
