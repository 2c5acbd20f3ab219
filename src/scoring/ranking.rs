// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score, drop the noise, sort.
//!
//! Ordering is by score alone, descending. There is no secondary key; the
//! sort is stable, so items that tie keep the order the caller fetched them
//! in (usually newest first).

use super::core::{relevance_score, ScoringConfig};
use crate::contracts::{check_ranked_order, check_relevance_floor};
use crate::types::{CandidateItem, RankedResult};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compare two ranked results, higher score first.
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Rank candidates against a raw query.
///
/// A blank query passes every candidate through unchanged with score 0.0.
/// Otherwise each candidate is scored, those at or below
/// `config.min_relevance` are dropped, and the rest are sorted.
pub fn rank(items: Vec<CandidateItem>, query: &str, config: &ScoringConfig) -> Vec<RankedResult> {
    if query.trim().is_empty() {
        return items
            .into_iter()
            .map(|item| RankedResult { item, score: 0.0 })
            .collect();
    }

    let candidates = items.len();

    // Order-preserving: collect keeps input order, which the stable sort relies on
    #[cfg(feature = "parallel")]
    let scored: Vec<RankedResult> = items
        .into_par_iter()
        .map(|item| {
            let score = relevance_score(&item, query, config);
            RankedResult { item, score }
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<RankedResult> = items
        .into_iter()
        .map(|item| {
            let score = relevance_score(&item, query, config);
            RankedResult { item, score }
        })
        .collect();

    let mut results: Vec<RankedResult> = scored
        .into_iter()
        .filter(|result| result.score > config.min_relevance)
        .collect();
    results.sort_by(compare_ranked);

    log::debug!(
        "ranked {:?}: {} of {} candidates kept",
        query,
        results.len(),
        candidates
    );

    check_ranked_order(&results);
    check_relevance_floor(&results, config.min_relevance);
    results
}
