// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Freeform query interpretation and relevance ranking for marketplace search.
//!
//! Buyers type things like "2nd hand labtop under 15,000" or "brand new sofa
//! between 5000 and 10000". This crate turns such a string into a structured
//! [`SearchIntent`] (category, condition, price range, specific product and
//! leftover text) that a listing store can filter on, then scores and orders
//! whatever the store returns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  vocabulary  │──▶│   resolve    │──▶│              │
//! │ (tables,     │   │ (exact, then │   │  interpret   │──▶ SearchIntent
//! │  validation) │──▶│   fuzzy)     │   │ (token walk) │
//! └──────────────┘   ├──────────────┤   │              │
//!                    │   product    │──▶│              │
//! ┌──────────────┐   └──────────────┘   └──────────────┘
//! │    fuzzy     │          ▲                  ▲
//! │ (similarity) │──────────┘                  │
//! └──────────────┘   ┌──────────────┐          │
//!                    │    price     │──────────┘
//!                    │ (tagged regex│
//!                    │   patterns)  │
//!                    └──────────────┘
//!
//! candidates ──▶ scoring (score, filter, stable sort) ──▶ Vec<RankedResult>
//! ```
//!
//! | Module       | Role                                                  |
//! |--------------|-------------------------------------------------------|
//! | `fuzzy`      | Levenshtein distance, normalized similarity           |
//! | `vocabulary` | Condition, product and category tables                |
//! | `resolve`    | Token or token pair → canonical term                  |
//! | `price`      | Price phrases → `PriceRange`                          |
//! | `product`    | Specific product nouns, typo tolerant                 |
//! | `interpret`  | The whole query → `SearchIntent` pipeline             |
//! | `scoring`    | Relevance score and ranking                           |
//! | `engine`     | `QueryEngine`, the facade most callers want           |
//!
//! # Usage
//!
//! ```
//! use bazaar_query::QueryEngine;
//!
//! let engine = QueryEngine::new()?;
//! let intent = engine.interpret("used laptop under 15000")?;
//! assert_eq!(intent.specific_product.as_deref(), Some("laptop"));
//! assert_eq!(intent.condition.as_deref(), Some("Used"));
//! # Ok::<(), bazaar_query::Error>(())
//! ```

pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod interpret;
pub mod price;
pub mod product;
pub mod resolve;
pub mod scoring;
pub mod testing;
pub mod types;
pub mod utils;
pub mod vocabulary;

pub use config::EngineConfig;
pub use engine::QueryEngine;
pub use error::{Error, Result, VocabularyError};
pub use fuzzy::{levenshtein_distance, levenshtein_within, similarity, similarity_above};
pub use interpret::Interpreter;
pub use price::{PriceExtractor, PricePattern, PricePatternKind, PriceRange};
pub use product::{ProductMatch, ProductMatcher};
pub use resolve::{ResolvedTerm, Resolver};
pub use scoring::{rank, ScoreBreakdown, ScoringConfig};
pub use types::{CandidateItem, RankedResult, SearchIntent};
pub use utils::{normalize, normalize_query};
pub use vocabulary::{TermKind, Vocabulary, VocabularyEntry, VocabularyTables};

#[cfg(test)]
mod tests {
    //! Property tests across modules.

    use super::*;
    use proptest::prelude::*;
    use proptest::string::string_regex;

    fn word_strategy() -> impl Strategy<Value = String> {
        string_regex("[a-z]{1,12}").unwrap()
    }

    fn query_strategy() -> impl Strategy<Value = String> {
        string_regex("[a-z0-9₹ ,.-]{0,40}").unwrap()
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<CandidateItem>> {
        prop::collection::vec(
            (word_strategy(), word_strategy(), 0u32..100_000).prop_map(|(title, desc, price)| {
                testing::make_item(&format!("{} laptop", title), &desc, price as f64)
            }),
            0..20,
        )
    }

    proptest! {
        #[test]
        fn prop_similarity_in_unit_interval(a in word_strategy(), b in word_strategy()) {
            let score = similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_similarity_reflexive(a in word_strategy()) {
            prop_assert_eq!(similarity(&a, &a), 1.0);
        }

        #[test]
        fn prop_substring_short_circuits(a in word_strategy(), pre in "[a-z]{0,4}", post in "[a-z]{0,4}") {
            let haystack = format!("{}{}{}", pre, a, post);
            prop_assert_eq!(similarity(&a, &haystack), 1.0);
        }

        #[test]
        fn prop_distance_symmetric(a in word_strategy(), b in word_strategy()) {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn prop_similarity_above_agrees(a in word_strategy(), b in word_strategy(), floor in 0.0f64..1.0) {
            let score = similarity(&a, &b);
            prop_assert_eq!(similarity_above(&a, &b, floor), (score > floor).then_some(score));
        }

        #[test]
        fn prop_within_agrees_with_distance(a in word_strategy(), b in word_strategy(), k in 0usize..6) {
            prop_assert_eq!(levenshtein_within(&a, &b, k), levenshtein_distance(&a, &b) <= k);
        }

        #[test]
        fn prop_interpret_never_panics(query in query_strategy()) {
            let engine = QueryEngine::new().unwrap();
            match engine.interpret(&query) {
                Ok(_) | Err(Error::Uninterpretable { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }

        #[test]
        fn prop_price_range_is_ordered(query in query_strategy()) {
            let range = PriceExtractor::new().unwrap().extract(&query);
            if let (Some(min), Some(max)) = (range.min, range.max) {
                prop_assert!(min <= max);
            }
        }

        #[test]
        fn prop_rank_sorted_and_filtered(items in catalog_strategy(), query in word_strategy()) {
            let config = ScoringConfig::default();
            let results = rank(items, &query, &config);
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            prop_assert!(results.iter().all(|r| r.score > config.min_relevance));
        }

        #[test]
        fn prop_rank_idempotent(items in catalog_strategy(), query in word_strategy()) {
            let config = ScoringConfig::default();
            let once = rank(items, &query, &config);
            let again = rank(
                once.iter().map(|r| r.item.clone()).collect(),
                &query,
                &config,
            );
            prop_assert_eq!(once, again);
        }

        #[test]
        fn prop_blank_query_passes_through(items in catalog_strategy()) {
            let results = rank(items.clone(), "", &ScoringConfig::default());
            prop_assert_eq!(results.len(), items.len());
            prop_assert!(results.iter().all(|r| r.score == 0.0));
        }
    }
}
