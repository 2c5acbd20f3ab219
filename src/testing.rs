// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::CandidateItem;

/// Create a listing with default condition and category.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(title: &str, description: &str, price: f64) -> CandidateItem {
    CandidateItem {
        title: title.to_string(),
        description: description.to_string(),
        price,
        condition: "Used".to_string(),
        category_slug: "electronics".to_string(),
    }
}

/// Create a listing with every field spelled out.
pub fn make_listing(
    title: &str,
    description: &str,
    price: f64,
    condition: &str,
    category_slug: &str,
) -> CandidateItem {
    CandidateItem {
        title: title.to_string(),
        description: description.to_string(),
        price,
        condition: condition.to_string(),
        category_slug: category_slug.to_string(),
    }
}

/// Four listings used by the ranking tests.
///
/// Against "laptop": the first two score 18 each, the table 2 (description
/// only), the bat 0.
pub fn sample_catalog() -> Vec<CandidateItem> {
    vec![
        make_listing(
            "Dell Inspiron Laptop",
            "i5, 8GB RAM, charger included",
            24000.0,
            "Used",
            "electronics",
        ),
        make_listing(
            "Gaming laptop with RTX",
            "RTX 3060, 16GB, barely used",
            65000.0,
            "Like New",
            "electronics",
        ),
        make_listing(
            "Wooden study table",
            "Fits a laptop and a lamp",
            2500.0,
            "Used",
            "furniture",
        ),
        make_listing(
            "Cricket bat",
            "English willow, hardly used",
            1800.0,
            "Used",
            "sports",
        ),
    ]
}
