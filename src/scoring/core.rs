// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance score: four additive signals.
//!
//! | Signal                 | Weight | Fires when                                        |
//! |------------------------|--------|---------------------------------------------------|
//! | `title_contains`       | 10     | lower-cased title contains the lower-cased query  |
//! | `sequential_phrase`    | 5      | title contains the whitespace-collapsed query     |
//! | `title_word` (each)    | 3      | a query word is > 0.8 similar to some title word  |
//! | `description_contains` | 2      | description contains the query                    |
//!
//! The first two overlap on purpose for well-formed queries: a clean
//! "gaming laptop" in a title earns both. They differ when the query carries
//! stray spacing, where only the collapsed form still lines up.
//!
//! Weights are integers, so scores are exact sums and ties compare equal.

use crate::fuzzy::similarity;
use crate::utils::collapse_whitespace;
use serde::{Deserialize, Serialize};

use crate::types::CandidateItem;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Title contains the whole query.
pub const TITLE_CONTAINS_SCORE: f64 = 10.0;

/// Title contains the query with its whitespace collapsed.
pub const SEQUENTIAL_PHRASE_SCORE: f64 = 5.0;

/// Per query word with a close title word.
pub const TITLE_WORD_SCORE: f64 = 3.0;

/// Description contains the whole query.
pub const DESCRIPTION_CONTAINS_SCORE: f64 = 2.0;

/// A title word counts when similarity exceeds this.
pub const TITLE_WORD_SIMILARITY: f64 = 0.8;

/// Results scoring at or below this are dropped.
pub const MIN_RELEVANCE: f64 = 0.3;

/// Scoring weights. Defaults are the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    pub title_contains: f64,
    pub sequential_phrase: f64,
    pub title_word: f64,
    pub description_contains: f64,
    pub title_word_similarity: f64,
    pub min_relevance: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            title_contains: TITLE_CONTAINS_SCORE,
            sequential_phrase: SEQUENTIAL_PHRASE_SCORE,
            title_word: TITLE_WORD_SCORE,
            description_contains: DESCRIPTION_CONTAINS_SCORE,
            title_word_similarity: TITLE_WORD_SIMILARITY,
            min_relevance: MIN_RELEVANCE,
        }
    }
}

/// Where an item's score came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub title_contains: f64,
    pub sequential_phrase: f64,
    pub title_words: f64,
    /// How many query words found a close title word.
    pub matched_words: usize,
    pub description_contains: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.title_contains + self.sequential_phrase + self.title_words + self.description_contains
    }
}

/// Score one item against a query, component by component.
pub fn explain_score(item: &CandidateItem, query: &str, config: &ScoringConfig) -> ScoreBreakdown {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return ScoreBreakdown::default();
    }

    let title = item.title.to_lowercase();
    let description = item.description.to_lowercase();
    let mut breakdown = ScoreBreakdown::default();

    if title.contains(&query) {
        breakdown.title_contains = config.title_contains;
    }
    if title.contains(&collapse_whitespace(&query)) {
        breakdown.sequential_phrase = config.sequential_phrase;
    }

    let title_words: Vec<&str> = title.split_whitespace().collect();
    breakdown.matched_words = query
        .split_whitespace()
        .filter(|word| {
            title_words
                .iter()
                .map(|title_word| similarity(word, title_word))
                .fold(0.0_f64, f64::max)
                > config.title_word_similarity
        })
        .count();
    breakdown.title_words = breakdown.matched_words as f64 * config.title_word;

    if description.contains(&query) {
        breakdown.description_contains = config.description_contains;
    }

    breakdown
}

/// Relevance of one item to a query.
#[inline]
pub fn relevance_score(item: &CandidateItem, query: &str, config: &ScoringConfig) -> f64 {
    explain_score(item, query, config).total()
}
