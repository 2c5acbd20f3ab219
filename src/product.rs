// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Specific-product detection.
//!
//! A handful of product nouns ("laptop", "phone", ...) are common enough that
//! buyers type them directly, and misspell them often. When one shows up it
//! becomes the query's `specific_product` and takes precedence over category
//! inference for the rest of the query.
//!
//! Matching runs in two passes:
//!
//! 1. **Exact**: whole-word containment of a product term in the normalized
//!    query. Entries are tried in table order and, within an entry, longest
//!    term first, so "mobile phone" is claimed whole by `mobile`.
//! 2. **Fuzzy**: each query word is scored against every product term with
//!    [`similarity_above`], so only terms that can still beat the best score
//!    get the full DP. Words that are too short, that belong to a price
//!    phrase, that are filler, or that are exact vocabulary hits on their own
//!    are left out. The best score wins if it clears the product threshold, which is
//!    stricter than the word threshold.

use crate::fuzzy::similarity_above;
use crate::utils::{find_phrase, is_filler, is_price_token, normalize_query};
use crate::vocabulary::{Vocabulary, VocabularyEntry};
use std::ops::Range;

/// Acceptance threshold for fuzzy product matches.
pub const PRODUCT_THRESHOLD: f64 = 0.7;

/// Words shorter than this never match a product fuzzily.
pub const MIN_PRODUCT_FUZZY_LEN: usize = 4;

/// A product found in a normalized query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMatch {
    /// Canonical product name.
    pub canonical: String,
    /// The query text that matched.
    pub matched: String,
    /// Byte range of `matched` in the normalized query.
    pub span: Range<usize>,
    pub score: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ProductMatcher<'a> {
    vocabulary: &'a Vocabulary,
    threshold: f64,
    min_fuzzy_len: usize,
}

impl<'a> ProductMatcher<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            threshold: PRODUCT_THRESHOLD,
            min_fuzzy_len: MIN_PRODUCT_FUZZY_LEN,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_min_fuzzy_len(mut self, min_fuzzy_len: usize) -> Self {
        self.min_fuzzy_len = min_fuzzy_len;
        self
    }

    /// Canonical product named by a raw query, if any.
    pub fn match_product(&self, raw: &str) -> Option<String> {
        self.find(&normalize_query(raw)).map(|m| m.canonical)
    }

    /// Locate a product in an already normalized query.
    pub fn find(&self, normalized: &str) -> Option<ProductMatch> {
        self.find_exact(normalized)
            .or_else(|| self.find_fuzzy(normalized))
    }

    fn find_exact(&self, normalized: &str) -> Option<ProductMatch> {
        self.vocabulary.products().iter().find_map(|entry| {
            entry_terms_longest_first(entry)
                .into_iter()
                .find_map(|term| {
                    find_phrase(normalized, &term).map(|span| ProductMatch {
                        canonical: entry.canonical.clone(),
                        matched: term,
                        span,
                        score: 1.0,
                    })
                })
        })
    }

    fn find_fuzzy(&self, normalized: &str) -> Option<ProductMatch> {
        let mut best: Option<ProductMatch> = None;

        for (span, word) in words_with_spans(normalized) {
            if word.chars().count() < self.min_fuzzy_len
                || is_price_token(word)
                || is_filler(word)
                || self.vocabulary.contains_exact(word)
            {
                continue;
            }

            for entry in self.vocabulary.products() {
                let terms = std::iter::once(&entry.canonical).chain(&entry.variants);
                for term in terms {
                    let floor = best.as_ref().map_or(self.threshold, |b| b.score);
                    if let Some(score) = similarity_above(word, term, floor) {
                        best = Some(ProductMatch {
                            canonical: entry.canonical.clone(),
                            matched: word.to_string(),
                            span: span.clone(),
                            score,
                        });
                    }
                }
            }
        }

        let found = best?;
        log::debug!(
            "fuzzy product {:?} -> {:?} ({:.3})",
            found.matched,
            found.canonical,
            found.score
        );
        Some(found)
    }
}

fn entry_terms_longest_first(entry: &VocabularyEntry) -> Vec<String> {
    let mut terms: Vec<String> = std::iter::once(&entry.canonical)
        .chain(&entry.variants)
        .map(|term| term.to_lowercase())
        .collect();
    // Stable, so equal lengths keep canonical-then-variant order
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    terms
}

/// Whitespace-separated words with their byte ranges.
fn words_with_spans(text: &str) -> impl Iterator<Item = (Range<usize>, &str)> {
    let base = text.as_ptr() as usize;
    text.split_whitespace().map(move |word| {
        let start = word.as_ptr() as usize - base;
        (start..start + word.len(), word)
    })
}
