// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity score built on it.
//!
//! `similarity` is lopsided: if the second string contains the
//! first, the answer is 1.0 without running the DP. Queries are short and
//! dictionary terms are longer, so "lap" against "laptop" should be a perfect
//! hit, while "laptop" against "lap" should not. Only the Levenshtein branch
//! is symmetric.

use crate::contracts::check_similarity_bounds;

/// Levenshtein distance between two strings, counted in characters.
///
/// Single-row DP, O(|a|·|b|) time, O(|b|) space.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != *bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: `|len(a) - len(b)|` is a lower bound on edit distance, and
/// row minimums never decrease.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}

/// Case-insensitive similarity in `[0, 1]`.
///
/// 1. `b` contains `a` → 1.0
/// 2. otherwise `(max_len - distance) / max_len`, lengths in characters
///
/// An empty `a` matches nothing (0.0) unless `b` is empty too.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a.is_empty() {
        return if b.is_empty() { 1.0 } else { 0.0 };
    }
    if b.contains(&a) {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein_distance(&a, &b);
    let score = (max_len - distance.min(max_len)) as f64 / max_len as f64;

    check_similarity_bounds(score);
    score
}

/// [`similarity`] when it beats `floor`, `None` otherwise.
///
/// Beating `floor` needs `distance < max_len · (1 − floor)`, so a bounded
/// [`levenshtein_within`] check throws out most candidates of a vocabulary
/// scan before the full DP runs.
pub fn similarity_above(a: &str, b: &str, floor: f64) -> Option<f64> {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    if !a_lower.is_empty() && !b_lower.contains(&a_lower) {
        let max_len = a_lower.chars().count().max(b_lower.chars().count());
        let budget = (max_len as f64 * (1.0 - floor.clamp(0.0, 1.0))).ceil() as usize;
        if !levenshtein_within(&a_lower, &b_lower, budget) {
            return None;
        }
    }

    let score = similarity(a, b);
    (score > floor).then_some(score)
}
