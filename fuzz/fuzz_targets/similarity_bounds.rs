// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Similarity feeds every threshold in the interpreter. If it escapes [0, 1]
//! or the bounded distance disagrees with the full one, fuzzy matching
//! silently drifts.

#![no_main]

use arbitrary::Arbitrary;
use bazaar_query::{levenshtein_distance, levenshtein_within, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: PairInput| {
    let a: String = input.a.chars().take(50).collect();
    let b: String = input.b.chars().take(100).collect();
    let max = usize::from(input.max % 8);

    // INVARIANT 1: Bounded
    let score = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&score), "similarity {} out of range", score);

    // INVARIANT 2: Containment is a perfect match
    if !a.is_empty() && b.to_lowercase().contains(&a.to_lowercase()) {
        assert_eq!(score, 1.0);
    }

    // INVARIANT 3: Distance is symmetric and bounded by the longer length
    let distance = levenshtein_distance(&a, &b);
    assert_eq!(distance, levenshtein_distance(&b, &a));
    assert!(distance <= a.chars().count().max(b.chars().count()));

    // INVARIANT 4: The bounded check agrees with the full distance
    assert_eq!(levenshtein_within(&a, &b, max), distance <= max);
});
