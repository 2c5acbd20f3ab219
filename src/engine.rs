// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public entry point: one engine, built once, shared by reference.
//!
//! `QueryEngine` owns the only long-lived state in the crate, the validated
//! vocabulary and the compiled price patterns. Everything else is built per
//! call on top of borrows, so the engine is `Send + Sync` without locks.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::interpret::Interpreter;
use crate::price::PriceExtractor;
use crate::product::ProductMatcher;
use crate::resolve::Resolver;
use crate::scoring::{self, ScoreBreakdown};
use crate::types::{CandidateItem, RankedResult, SearchIntent};
use crate::vocabulary::{Vocabulary, VocabularyTables};

#[derive(Debug, Clone)]
pub struct QueryEngine {
    config: EngineConfig,
    vocabulary: Vocabulary,
    prices: PriceExtractor,
}

impl QueryEngine {
    /// Engine with the built-in vocabulary and default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Engine from a (validated) configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let tables = config
            .vocabulary
            .clone()
            .unwrap_or_else(VocabularyTables::builtin);
        let vocabulary = Vocabulary::new(tables)?;
        let prices = PriceExtractor::new()?;

        log::debug!(
            "query engine ready: {} vocabulary terms, {} price patterns",
            vocabulary.fuzzy_terms().len(),
            prices.patterns().len()
        );

        Ok(Self {
            config,
            vocabulary,
            prices,
        })
    }

    /// Freeform query → structured intent.
    pub fn interpret(&self, raw: &str) -> Result<SearchIntent> {
        self.interpreter().interpret(raw)
    }

    /// Score, filter and order candidates against the raw query.
    pub fn rank(&self, candidates: Vec<CandidateItem>, raw: &str) -> Vec<RankedResult> {
        scoring::rank(candidates, raw, &self.config.scoring)
    }

    /// Per-signal breakdown of one candidate's score.
    pub fn explain(&self, candidate: &CandidateItem, raw: &str) -> ScoreBreakdown {
        scoring::explain_score(candidate, raw, &self.config.scoring)
    }

    pub fn interpreter(&self) -> Interpreter<'_> {
        Interpreter::new(&self.vocabulary, &self.prices)
            .with_resolver(self.resolver())
            .with_product_matcher(self.product_matcher())
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.vocabulary)
            .with_threshold(self.config.word_threshold)
            .with_phrase_threshold(self.config.phrase_threshold)
            .with_min_fuzzy_len(self.config.min_fuzzy_len)
    }

    pub fn product_matcher(&self) -> ProductMatcher<'_> {
        ProductMatcher::new(&self.vocabulary)
            .with_threshold(self.config.product_threshold)
            .with_min_fuzzy_len(self.config.min_product_fuzzy_len)
    }

    pub fn price_extractor(&self) -> &PriceExtractor {
        &self.prices
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
