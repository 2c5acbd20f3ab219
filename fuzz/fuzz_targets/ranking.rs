// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for relevance ranking.
//!
//! Results must be sorted, above the relevance floor, deterministic, and a
//! subset of the candidates in the same relative order among equal scores.

#![no_main]

use arbitrary::Arbitrary;
use bazaar_query::{rank, CandidateItem, ScoringConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    listings: Vec<(String, String)>,
}

fuzz_target!(|input: RankInput| {
    let query: String = input.query.chars().take(60).collect();
    let items: Vec<CandidateItem> = input
        .listings
        .into_iter()
        .take(64)
        .map(|(title, description)| CandidateItem {
            title: title.chars().take(120).collect(),
            description: description.chars().take(300).collect(),
            ..Default::default()
        })
        .collect();

    let config = ScoringConfig::default();
    let results = rank(items.clone(), &query, &config);

    // INVARIANT 1: Blank queries pass everything through
    if query.trim().is_empty() {
        assert_eq!(results.len(), items.len());
        assert!(results.iter().all(|r| r.score == 0.0));
        return;
    }

    // INVARIANT 2: Sorted descending, all above the floor, all finite
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order");
    }
    for result in &results {
        assert!(result.score.is_finite());
        assert!(result.score > config.min_relevance);
    }

    // INVARIANT 3: Ties keep input order (only checkable without duplicates)
    let position = |item: &CandidateItem| items.iter().position(|c| c == item);
    let unique = items
        .iter()
        .enumerate()
        .all(|(i, item)| position(item) == Some(i));
    if unique {
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(position(&pair[0].item) < position(&pair[1].item), "tie order broken");
            }
        }
    }

    // INVARIANT 4: Deterministic
    let again = rank(items, &query, &config);
    assert_eq!(results, again);
});
