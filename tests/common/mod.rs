//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bazaar_query::{CandidateItem, QueryEngine, SearchIntent};
use std::sync::LazyLock;

// Re-export canonical test utilities from bazaar_query::testing
pub use bazaar_query::testing::{make_item, make_listing, sample_catalog};

/// One engine for the whole test binary; it is immutable and `Sync`.
pub static ENGINE: LazyLock<QueryEngine> =
    LazyLock::new(|| QueryEngine::new().expect("built-in vocabulary is valid"));

/// Interpret with the shared engine, panicking on error.
pub fn interpret(query: &str) -> SearchIntent {
    ENGINE
        .interpret(query)
        .unwrap_or_else(|e| panic!("failed to interpret {:?}: {}", query, e))
}

/// A small but varied marketplace, in "newest first" order.
pub fn marketplace() -> Vec<CandidateItem> {
    vec![
        make_listing(
            "Dell Inspiron Laptop",
            "i5 8th gen, 8GB RAM, charger included",
            14500.0,
            "Used",
            "electronics",
        ),
        make_listing(
            "HP Pavilion gaming laptop",
            "GTX 1650, barely used, bill available",
            42000.0,
            "Like New",
            "electronics",
        ),
        make_listing(
            "Lenovo laptop stand",
            "Aluminium, adjustable",
            900.0,
            "New",
            "electronics",
        ),
        make_listing(
            "Three seater sofa",
            "Brown fabric, 2 years old",
            7500.0,
            "Used",
            "furniture",
        ),
        make_listing(
            "Study table with drawer",
            "Perfect for a laptop and books",
            3200.0,
            "Used",
            "furniture",
        ),
        make_listing(
            "Hero Splendor bike",
            "2015 model, single owner",
            28000.0,
            "Used",
            "vehicles",
        ),
        make_listing(
            "Samsung mobile phone",
            "Galaxy M31, 6GB, with box",
            8500.0,
            "Used",
            "electronics",
        ),
        make_listing(
            "iPhone 12",
            "64GB, battery health 86%",
            31000.0,
            "Used",
            "electronics",
        ),
    ]
}

/// Titles of ranked results, in order.
pub fn titles(results: &[bazaar_query::RankedResult]) -> Vec<&str> {
    results.iter().map(|r| r.item.title.as_str()).collect()
}
