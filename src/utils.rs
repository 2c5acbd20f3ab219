// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

use std::ops::Range;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Words that belong to a price phrase. The price extractor already read them
/// from the raw query, so the token walk skips them.
pub const PRICE_CONNECTORS: &[&str] = &[
    "under", "below", "above", "between", "from", "to", "and", "rs", "rs.", "inr", "rupees",
];

/// Comparison words that only belong to a price phrase when one was found
/// ("more than 5000"). Otherwise they stay in the residual text ("game over").
/// They are never resolved: "over" would land on "oven", "less" on "dress".
pub const PRICE_QUALIFIERS: &[&str] = &["over", "less", "more", "than"];

/// Words that carry no marketplace meaning. They are kept in the residual
/// text but never fed to the fuzzy resolver, where a short word like "the"
/// would match anything that happens to contain it ("clothes").
pub const FILLER_WORDS: &[&str] = &[
    "a", "an", "the", "i", "im", "me", "my", "we", "you", "it", "is", "this", "that", "for",
    "with", "of", "in", "on", "at", "or", "want", "need", "looking", "buy", "cheap",
];

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "café" → "cafe"
/// - "Naïve  Sofa" → "naive sofa"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
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
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
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

/// Pre-normalize a raw query before interpretation.
///
/// On top of [`normalize`]: hyphens and en-dashes become spaces, "2nd" becomes
/// "second" (so "2nd-hand" reads as "second hand"), and remaining ordinal
/// suffixes are dropped ("3rd" → "3").
///
/// ```ignore
/// assert_eq!(normalize_query("  2nd-Hand  Bike "), "second hand bike");
/// ```
pub fn normalize_query(raw: &str) -> String {
    let lowered = normalize(raw).replace(['-', '–'], " ");
    lowered
        .split_whitespace()
        .map(|word| match word {
            "2nd" => "second",
            _ => strip_ordinal_suffix(word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "1st" → "1", "23rd" → "23"; anything else is returned unchanged.
fn strip_ordinal_suffix(word: &str) -> &str {
    let digits = word.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return word;
    }
    match &word[digits..] {
        "st" | "nd" | "rd" | "th" => &word[..digits],
        _ => word,
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Does this token look like part of a price expression?
pub fn is_price_token(token: &str) -> bool {
    token
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '₹' | '$' | '€' | '£'))
        || PRICE_CONNECTORS.contains(&token)
}

pub fn is_price_qualifier(token: &str) -> bool {
    PRICE_QUALIFIERS.contains(&token)
}

pub fn is_filler(token: &str) -> bool {
    FILLER_WORDS.contains(&token)
}

/// Find `needle` in `haystack` as whole words.
///
/// A match must not be glued to alphanumerics on either side, so "tab" is found
/// in "tab cover" but not in "table". Returns the byte range of the first such
/// match.
pub fn find_phrase(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    haystack.match_indices(needle).find_map(|(start, _)| {
        let end = start + needle.len();
        let open = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let close = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        (open && close).then_some(start..end)
    })
}
