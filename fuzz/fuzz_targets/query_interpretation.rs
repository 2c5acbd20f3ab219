// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query interpretation.
//!
//! Any string a user can type must come back as an intent or as
//! `Uninterpretable`, never as a panic. A successful intent must also be
//! internally consistent: residual words come from the query and a product
//! never coexists with a category.

#![no_main]

use bazaar_query::{normalize_query, Error, QueryEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    static ENGINE: std::sync::OnceLock<QueryEngine> = std::sync::OnceLock::new();
    let engine = ENGINE.get_or_init(|| QueryEngine::new().expect("built-in vocabulary"));

    let query = String::from_utf8_lossy(data);
    // Cap at a char boundary to avoid timeouts
    let query: String = query.chars().take(200).collect();

    let intent = match engine.interpret(&query) {
        Ok(intent) => intent,
        Err(Error::Uninterpretable { .. }) => return,
        Err(e) => panic!("unexpected error for {:?}: {}", query, e),
    };

    // INVARIANT 1: Residual text is made of query words
    let normalized = normalize_query(&query);
    let words: Vec<&str> = normalized.split_whitespace().collect();
    for word in intent.residual_text.split_whitespace() {
        assert!(
            words.contains(&word),
            "residual word {:?} not in {:?}",
            word,
            normalized
        );
    }

    // INVARIANT 2: A specific product suppresses category assignment
    if intent.specific_product.is_some() {
        assert_eq!(intent.category, None, "product and category for {:?}", query);
    }

    // INVARIANT 3: Ranges are ordered
    if let Some(range) = intent.price_range {
        if let (Some(min), Some(max)) = (range.min, range.max) {
            assert!(min <= max, "unordered range {:?} for {:?}", range, query);
        }
    }

    // INVARIANT 4: Deterministic
    assert_eq!(engine.interpret(&query).ok(), Some(intent));
});
