// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that crosses the crate boundary.
//!
//! | Type            | Direction | Purpose                                   |
//! |-----------------|-----------|-------------------------------------------|
//! | `SearchIntent`  | out       | Structured reading of a freeform query    |
//! | `PriceRange`    | out       | Optional lower/upper price bound          |
//! | `CandidateItem` | in        | A listing fetched by the caller           |
//! | `RankedResult`  | out       | A candidate paired with its relevance     |
//!
//! All of them serialize as camelCase JSON, the shape the listing service
//! already speaks.

use serde::{Deserialize, Serialize};

pub use crate::price::PriceRange;

/// What a freeform query asks for.
///
/// Every field is optional. `residual_text` holds whatever was not claimed
/// by a category, condition, price or product, space-joined in query order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchIntent {
    pub residual_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_product: Option<String>,
}

impl SearchIntent {
    /// No constraint and no text at all.
    pub fn is_empty(&self) -> bool {
        self.residual_text.is_empty()
            && self.category.is_none()
            && self.condition.is_none()
            && self.price_range.map_or(true, |range| range.is_empty())
            && self.specific_product.is_none()
    }

    /// Does `item` satisfy the structured constraints?
    ///
    /// Checks category slug, condition label and price range. Residual text
    /// and the specific product are left to the ranker, the same split the
    /// listing store makes between filters and relevance.
    pub fn admits(&self, item: &CandidateItem) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |slug| item.category_slug.eq_ignore_ascii_case(slug));
        let condition_ok = self
            .condition
            .as_deref()
            .map_or(true, |label| item.condition.eq_ignore_ascii_case(label));
        let price_ok = self
            .price_range
            .map_or(true, |range| range.contains(item.price));

        category_ok && condition_ok && price_ok
    }
}

/// A marketplace listing as handed to the ranker. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateItem {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub condition: String,
    pub category_slug: String,
}

/// A candidate with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub item: CandidateItem,
    pub score: f64,
}

impl RankedResult {
    pub fn into_item(self) -> CandidateItem {
        self.item
    }
}
