// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the query engine.
//!
//! Almost nothing in here can fail at query time. A price phrase that doesn't
//! parse is just "no price constraint", an empty candidate list ranks to an
//! empty list. The only query-time error is [`Error::Uninterpretable`]: the
//! caller typed something, and none of it meant anything to us. Everything
//! else is a construction-time problem with a custom vocabulary or config.

use thiserror::Error;

/// Top-level error for engine construction and query interpretation.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-blank query that produced no category, condition, price, product
    /// or residual text. Callers should show "no matches" instead of
    /// issuing a fetch-everything query.
    #[error("query {query:?} could not be interpreted")]
    Uninterpretable { query: String },

    #[error("invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("invalid price pattern: {0}")]
    PricePattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Vocabulary table invariant violations.
///
/// Each table must map every string to at most one canonical term, otherwise
/// exact lookup would depend on iteration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("{table} table contains an empty term under {canonical:?}")]
    EmptyTerm {
        table: &'static str,
        canonical: String,
    },

    #[error("{table} table: canonical term {canonical:?} is also a variant of {owner:?}")]
    CanonicalIsVariant {
        table: &'static str,
        canonical: String,
        owner: String,
    },

    #[error("{table} table: {variant:?} is claimed by both {first:?} and {second:?}")]
    AmbiguousVariant {
        table: &'static str,
        variant: String,
        first: String,
        second: String,
    },

    #[error("product link refers to unknown product {product:?}")]
    UnknownProduct { product: String },

    #[error("product {product:?} links to unknown category {category:?}")]
    UnknownCategory { product: String, category: String },
}
