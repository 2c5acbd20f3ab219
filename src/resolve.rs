// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word and phrase resolution: token → canonical term.
//!
//! Two passes. First an exact hash lookup (variant table, then category
//! table). Only when that misses do we scan every vocabulary string and keep
//! the best score above the threshold. Each candidate is first checked with a
//! bounded edit distance against the score to beat. The scan is linear in the
//! vocabulary size, a few hundred strings, so there is no index.
//!
//! Phrases get the same treatment on `"a b"`, except the fuzzy pass only looks
//! at multi-word terms. Otherwise "new tv" would fuzzily match "new" and eat
//! the "tv" along with it.

use crate::fuzzy::similarity_above;
use crate::vocabulary::{TermKind, Vocabulary};
use serde::Serialize;

/// Acceptance threshold for fuzzy word resolution.
pub const WORD_THRESHOLD: f64 = 0.4;

/// Acceptance threshold for fuzzy two-word phrases. A phrase that resolves
/// consumes the lookahead token too, so the bar is higher than for words.
pub const PHRASE_THRESHOLD: f64 = 0.7;

/// Tokens shorter than this (in chars) only resolve exactly.
pub const MIN_FUZZY_LEN: usize = 3;

/// A token resolved to a canonical term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTerm {
    pub canonical: String,
    pub kind: TermKind,
    /// 1.0 for exact hits, the similarity score otherwise.
    pub score: f64,
}

/// Resolves tokens against a borrowed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    vocabulary: &'a Vocabulary,
    threshold: f64,
    phrase_threshold: f64,
    min_fuzzy_len: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            threshold: WORD_THRESHOLD,
            phrase_threshold: PHRASE_THRESHOLD,
            min_fuzzy_len: MIN_FUZZY_LEN,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_phrase_threshold(mut self, threshold: f64) -> Self {
        self.phrase_threshold = threshold;
        self
    }

    pub fn with_min_fuzzy_len(mut self, min_fuzzy_len: usize) -> Self {
        self.min_fuzzy_len = min_fuzzy_len;
        self
    }

    /// Resolve a single token.
    pub fn resolve_word(&self, token: &str) -> Option<ResolvedTerm> {
        self.resolve(token, false)
    }

    /// Resolve a two-token phrase, tried before single words so that
    /// "second hand" beats "second" + "hand".
    ///
    /// Not quite the word procedure on `"first second"`: the fuzzy pass only
    /// considers multi-word vocabulary terms and must clear the phrase
    /// threshold (0.7 by default) instead of the word threshold. Scored like a
    /// word, "bike red" would pass as "like new" and swallow both tokens.
    pub fn resolve_phrase(&self, first: &str, second: &str) -> Option<ResolvedTerm> {
        self.resolve(&format!("{} {}", first, second), true)
    }

    fn resolve(&self, text: &str, multi_word: bool) -> Option<ResolvedTerm> {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        if let Some((kind, canonical)) = self.vocabulary.lookup_exact(&text) {
            return Some(ResolvedTerm {
                canonical: canonical.to_string(),
                kind,
                score: 1.0,
            });
        }

        if text.chars().count() < self.min_fuzzy_len {
            return None;
        }

        let threshold = if multi_word {
            self.phrase_threshold
        } else {
            self.threshold
        };

        // Strictly better only, so the first candidate keeps a tie
        let mut best: Option<(&str, f64)> = None;
        for term in self.vocabulary.fuzzy_terms() {
            if multi_word && !term.contains(' ') {
                continue;
            }
            let floor = best.map_or(threshold, |(_, best_score)| best_score);
            if let Some(score) = similarity_above(&text, term, floor) {
                best = Some((term.as_str(), score));
            }
        }

        let (term, score) = best?;
        log::trace!("fuzzy resolved {:?} to {:?} ({:.3})", text, term, score);

        // Map back: category table first, then the variant table
        let (kind, canonical) = match self.vocabulary.lookup_category(term) {
            Some(slug) => (TermKind::Category, slug),
            None => self.vocabulary.lookup_variant(term)?,
        };
        Some(ResolvedTerm {
            canonical: canonical.to_string(),
            kind,
            score,
        })
    }
}
