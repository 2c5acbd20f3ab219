// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Everything is optional; a missing key keeps its default. A config file is
//! plain JSON:
//!
//! ```json
//! {
//!   "wordThreshold": 0.4,
//!   "productThreshold": 0.7,
//!   "scoring": { "minRelevance": 0.5 },
//!   "vocabulary": { "conditions": [ { "canonical": "New", "variants": ["sealed"] } ] }
//! }
//! ```
//!
//! A `vocabulary` block replaces the built-in tables wholesale rather than
//! merging into them.

use crate::error::{Error, Result};
use crate::product::{MIN_PRODUCT_FUZZY_LEN, PRODUCT_THRESHOLD};
use crate::resolve::{MIN_FUZZY_LEN, PHRASE_THRESHOLD, WORD_THRESHOLD};
use crate::scoring::ScoringConfig;
use crate::vocabulary::VocabularyTables;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Fuzzy acceptance for single words.
    pub word_threshold: f64,
    /// Fuzzy acceptance for two-word phrases.
    pub phrase_threshold: f64,
    /// Fuzzy acceptance for specific products.
    pub product_threshold: f64,
    pub min_fuzzy_len: usize,
    pub min_product_fuzzy_len: usize,
    pub scoring: ScoringConfig,
    /// Replacement vocabulary; `None` means the built-in tables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<VocabularyTables>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_threshold: WORD_THRESHOLD,
            phrase_threshold: PHRASE_THRESHOLD,
            product_threshold: PRODUCT_THRESHOLD,
            min_fuzzy_len: MIN_FUZZY_LEN,
            min_product_fuzzy_len: MIN_PRODUCT_FUZZY_LEN,
            scoring: ScoringConfig::default(),
            vocabulary: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading engine config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Thresholds must be fractions and weights non-negative.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("wordThreshold", self.word_threshold),
            ("phraseThreshold", self.phrase_threshold),
            ("productThreshold", self.product_threshold),
            ("scoring.titleWordSimilarity", self.scoring.title_word_similarity),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        let weights = [
            ("scoring.titleContains", self.scoring.title_contains),
            ("scoring.sequentialPhrase", self.scoring.sequential_phrase),
            ("scoring.titleWord", self.scoring.title_word),
            ("scoring.descriptionContains", self.scoring.description_contains),
            ("scoring.minRelevance", self.scoring.min_relevance),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.product_threshold <= self.word_threshold {
            log::warn!(
                "productThreshold {} does not exceed wordThreshold {}; weak typos will claim products",
                self.product_threshold,
                self.word_threshold
            );
        }

        Ok(())
    }
}
