// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring and ranking invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** during development and fuzzing
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_similarity_bounds`  | similarity scores lie in `[0, 1]`               |
//! | `check_ranked_order`       | ranked results are non-increasing in score      |
//! | `check_relevance_floor`    | no ranked result scores at or below the floor   |
//!
//! # Usage
//!
//! ```ignore
//! use bazaar_query::contracts::*;
//!
//! // In debug builds, this panics if the order is broken
//! check_ranked_order(&results);
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::product::PRODUCT_THRESHOLD;
    use crate::resolve::{PHRASE_THRESHOLD, WORD_THRESHOLD};

    // A product claim suppresses category inference, so it must be harder
    // to earn than a plain word resolution.
    assert!(PRODUCT_THRESHOLD > WORD_THRESHOLD);
    assert!(PHRASE_THRESHOLD > WORD_THRESHOLD);
};

const _: () = {
    use crate::scoring::{
        DESCRIPTION_CONTAINS_SCORE, MIN_RELEVANCE, SEQUENTIAL_PHRASE_SCORE, TITLE_CONTAINS_SCORE,
        TITLE_WORD_SCORE,
    };

    // Any single signal clears the floor on its own
    assert!(DESCRIPTION_CONTAINS_SCORE > MIN_RELEVANCE);
    assert!(TITLE_WORD_SCORE > MIN_RELEVANCE);

    // A whole-title hit outweighs the phrase and description signals combined
    assert!(TITLE_CONTAINS_SCORE > SEQUENTIAL_PHRASE_SCORE + DESCRIPTION_CONTAINS_SCORE);
};

use crate::types::RankedResult;

// ============================================================================
// SIMILARITY CONTRACTS
// ============================================================================

/// Check that a similarity score is a valid fraction.
///
/// # Panics (debug builds only)
/// Panics if `score` is NaN or outside `[0, 1]`.
#[inline]
pub fn check_similarity_bounds(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: similarity {} outside [0, 1]",
        score
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that results are sorted by score, descending.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranked_order(results: &[RankedResult]) {
    for (i, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: results[{}].score {} < results[{}].score {} ('{}' before '{}')",
            i,
            pair[0].score,
            i + 1,
            pair[1].score,
            pair[0].item.title,
            pair[1].item.title
        );
    }
}

/// Check that every result cleared the relevance floor.
///
/// # Panics (debug builds only)
/// Panics if a result scoring `<= floor` survived filtering.
#[inline]
pub fn check_relevance_floor(results: &[RankedResult], floor: f64) {
    for (i, result) in results.iter().enumerate() {
        debug_assert!(
            result.score > floor,
            "Contract violation: results[{}] ('{}') scored {} <= floor {}",
            i,
            result.item.title,
            result.score,
            floor
        );
    }
}
