// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Freeform query → [`SearchIntent`].
//!
//! ```text
//! raw ──► normalize ──► product matcher ──► token walk ──► SearchIntent
//!  │                        (claims its text)   │
//!  └──► price extractor ────────────────────────┘
//! ```
//!
//! The token walk goes left to right with one token of lookahead. Each step
//! either skips a price token, passes a filler word (or a comparison word
//! like "over" outside any price phrase) to the residual text,
//! consumes a two-word phrase, consumes one resolved word, or passes the word
//! to the residual text unchanged. The first condition and the first category
//! seen win; later ones are consumed and dropped.
//!
//! A specific product takes precedence over categories. Once one is found,
//! category words stay in the residual text ("labtop table" searches laptops
//! for "table") instead of narrowing the category.

use crate::error::{Error, Result};
use crate::price::PriceExtractor;
use crate::product::ProductMatcher;
use crate::resolve::{ResolvedTerm, Resolver};
use crate::types::SearchIntent;
use crate::utils::{
    collapse_whitespace, is_filler, is_price_qualifier, is_price_token, normalize_query,
};
use crate::vocabulary::{TermKind, Vocabulary};

/// Runs the whole interpretation pipeline over borrowed parts.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'a> {
    vocabulary: &'a Vocabulary,
    resolver: Resolver<'a>,
    products: ProductMatcher<'a>,
    prices: &'a PriceExtractor,
}

/// Mutable state of one token walk.
#[derive(Default)]
struct Walk {
    category: Option<String>,
    condition: Option<String>,
    residual: Vec<String>,
}

impl<'a> Interpreter<'a> {
    pub fn new(vocabulary: &'a Vocabulary, prices: &'a PriceExtractor) -> Self {
        Self {
            vocabulary,
            resolver: Resolver::new(vocabulary),
            products: ProductMatcher::new(vocabulary),
            prices,
        }
    }

    pub fn with_resolver(mut self, resolver: Resolver<'a>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_product_matcher(mut self, products: ProductMatcher<'a>) -> Self {
        self.products = products;
        self
    }

    /// Interpret a raw query.
    ///
    /// A blank query yields an empty intent. A non-blank query that produces
    /// nothing at all (no constraint, no product, no residual text) fails
    /// with [`Error::Uninterpretable`].
    pub fn interpret(&self, raw: &str) -> Result<SearchIntent> {
        if raw.trim().is_empty() {
            return Ok(SearchIntent::default());
        }

        let normalized = normalize_query(raw);
        let price = self.prices.extract(raw);

        let product = self.products.find(&normalized);
        let remaining = match &product {
            Some(found) => collapse_whitespace(&format!(
                "{} {}",
                &normalized[..found.span.start],
                &normalized[found.span.end..]
            )),
            None => normalized.clone(),
        };
        let has_product = product.is_some();
        let priced = !price.is_empty();
        let skipped = |token: &str| is_price_token(token) || (priced && is_price_qualifier(token));
        let unresolved = |token: &str| is_filler(token) || is_price_qualifier(token);

        let tokens: Vec<&str> = remaining.split_whitespace().collect();
        let mut walk = Walk::default();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];

            if skipped(token) {
                i += 1;
                continue;
            }
            if unresolved(token) {
                walk.residual.push(token.to_string());
                i += 1;
                continue;
            }

            let next = tokens
                .get(i + 1)
                .copied()
                .filter(|next| !skipped(next) && !unresolved(next));
            if let Some(next) = next {
                let claimed = self
                    .resolver
                    .resolve_phrase(token, next)
                    .map_or(false, |term| self.apply(&term, has_product, &mut walk));
                if claimed {
                    log::trace!("phrase {:?} consumed", format!("{} {}", token, next));
                    i += 2;
                    continue;
                }
            }

            let claimed = self
                .resolver
                .resolve_word(token)
                .map_or(false, |term| self.apply(&term, has_product, &mut walk));
            if !claimed {
                walk.residual.push(token.to_string());
            }
            i += 1;
        }

        let intent = SearchIntent {
            residual_text: walk.residual.join(" "),
            category: walk.category,
            condition: walk.condition,
            price_range: (!price.is_empty()).then_some(price),
            specific_product: product.map(|found| found.canonical),
        };

        if intent.is_empty() {
            log::debug!("nothing recognised in {:?}", raw);
            return Err(Error::Uninterpretable {
                query: raw.to_string(),
            });
        }

        log::debug!("interpreted {:?} as {:?}", raw, intent);
        Ok(intent)
    }

    /// Fold a resolved term into the walk. Returns whether it was consumed.
    fn apply(&self, term: &ResolvedTerm, has_product: bool, walk: &mut Walk) -> bool {
        match term.kind {
            TermKind::Condition => {
                walk.condition.get_or_insert_with(|| term.canonical.clone());
                true
            }
            TermKind::Category if !has_product => {
                walk.category.get_or_insert_with(|| term.canonical.clone());
                true
            }
            TermKind::Product if !has_product => {
                match self.vocabulary.category_for_product(&term.canonical) {
                    Some(slug) => {
                        walk.category.get_or_insert_with(|| slug.to_string());
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}
