// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for price phrase extraction.
//!
//! Whatever pattern fires, bounds must be finite, non-negative and ordered,
//! and the first pattern whose phrase occurs is the one that decides.

#![no_main]

use bazaar_query::PriceExtractor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    static PRICES: std::sync::OnceLock<PriceExtractor> = std::sync::OnceLock::new();
    let prices = PRICES.get_or_init(|| PriceExtractor::new().expect("price patterns compile"));

    let text = String::from_utf8_lossy(data);
    let text: String = text.chars().take(200).collect();

    let range = prices.extract(&text);
    for bound in [range.min, range.max].into_iter().flatten() {
        assert!(bound.is_finite() && bound >= 0.0, "bad bound {} for {:?}", bound, text);
    }
    if let (Some(min), Some(max)) = (range.min, range.max) {
        assert!(min <= max, "unordered range for {:?}", text);
    }

    // INVARIANT: The first pattern whose phrase occurs decides, even when
    // its amount does not parse
    let first = prices.patterns().iter().find(|pattern| pattern.is_match(&text));
    match (prices.extract_tagged(&text), first) {
        (Some((kind, tagged)), Some(pattern)) => {
            assert_eq!(tagged, range);
            assert_eq!(kind, pattern.kind(), "precedence broken for {:?}", text);
            assert_eq!(pattern.apply(&text), Some(range));
        }
        (None, first) => {
            assert!(range.is_empty());
            if let Some(pattern) = first {
                assert_eq!(pattern.apply(&text), None, "matched pattern was skipped");
            }
        }
        (Some(_), None) => panic!("extracted a price no pattern matched: {:?}", text),
    }
});
