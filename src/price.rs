// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Price phrase extraction.
//!
//! Price phrases span words and currency symbols ("between ₹1,000 and 2,000"),
//! so they are read from the raw query before tokenization gets a chance to
//! split them up. Patterns run in a fixed order and the first one that
//! produces a range wins. Later patterns are never consulted, so "under 500
//! and above 100" means `max = 500` and nothing else.
//!
//! | Kind         | Phrase                              | Range        |
//! |--------------|-------------------------------------|--------------|
//! | `UpperBound` | under / below / less than X         | max = X      |
//! | `LowerBound` | above / over / more than X          | min = X      |
//! | `Between`    | between X and Y, from X to Y        | min X, max Y |
//! | `Range`      | X-Y, X–Y, X to Y                    | min X, max Y |
//! | `Bare`       | ₹X, X                               | max = X      |
//!
//! A bare number is read as a budget, not a target price.

use crate::error::Result;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Optional currency prefix.
const CURRENCY: &str = r"(?:₹|\brs\.?|\binr)?\s*";

/// A number with optional thousands separators and decimals.
const NUMBER: &str = r"(\d[\d,]*(?:\.\d+)?)";

/// Lower and/or upper price bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Both bounds, swapped if given high-to-low.
    pub fn between(a: f64, b: f64) -> Self {
        Self {
            min: Some(a.min(b)),
            max: Some(a.max(b)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Which price pattern fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricePatternKind {
    UpperBound,
    LowerBound,
    Between,
    Range,
    Bare,
}

impl PricePatternKind {
    /// Precedence order, highest first.
    pub const ALL: [PricePatternKind; 5] = [
        PricePatternKind::UpperBound,
        PricePatternKind::LowerBound,
        PricePatternKind::Between,
        PricePatternKind::Range,
        PricePatternKind::Bare,
    ];

    fn source(self) -> String {
        match self {
            Self::UpperBound => {
                format!(r"(?i)\b(?:under|below|less\s+than)\s*{CURRENCY}{NUMBER}\b")
            }
            Self::LowerBound => {
                format!(r"(?i)\b(?:above|over|more\s+than)\s*{CURRENCY}{NUMBER}\b")
            }
            Self::Between => format!(
                r"(?i)\b(?:between|from)\s*{CURRENCY}{NUMBER}\s*(?:and|to|-|–)\s*{CURRENCY}{NUMBER}\b"
            ),
            Self::Range => {
                format!(r"(?i){CURRENCY}\b{NUMBER}\s*(?:-|–|\bto\b)\s*{CURRENCY}{NUMBER}\b")
            }
            Self::Bare => format!(r"(?i){CURRENCY}\b{NUMBER}\b"),
        }
    }

    fn extract(self, caps: &Captures<'_>) -> Option<PriceRange> {
        let number = |i: usize| caps.get(i).and_then(|m| parse_amount(m.as_str()));
        match self {
            Self::UpperBound | Self::Bare => number(1).map(PriceRange::at_most),
            Self::LowerBound => number(1).map(PriceRange::at_least),
            Self::Between | Self::Range => Some(PriceRange::between(number(1)?, number(2)?)),
        }
    }
}

/// One compiled pattern: a matcher plus the tag that says how to read it.
#[derive(Debug, Clone)]
pub struct PricePattern {
    kind: PricePatternKind,
    matcher: Regex,
}

impl PricePattern {
    pub fn compile(kind: PricePatternKind) -> Result<Self> {
        Ok(Self {
            kind,
            matcher: Regex::new(&kind.source())?,
        })
    }

    pub fn kind(&self) -> PricePatternKind {
        self.kind
    }

    /// Does the phrase occur in `text` at all?
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Apply this pattern alone.
    pub fn apply(&self, text: &str) -> Option<PriceRange> {
        let caps = self.matcher.captures(text)?;
        self.kind.extract(&caps)
    }
}

/// The ordered pattern list.
#[derive(Debug, Clone)]
pub struct PriceExtractor {
    patterns: Vec<PricePattern>,
}

impl PriceExtractor {
    pub fn new() -> Result<Self> {
        let patterns = PricePatternKind::ALL
            .into_iter()
            .map(PricePattern::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[PricePattern] {
        &self.patterns
    }

    /// Price range of the raw query; empty when nothing matched.
    pub fn extract(&self, raw: &str) -> PriceRange {
        self.extract_tagged(raw)
            .map(|(_, range)| range)
            .unwrap_or_default()
    }

    /// Like [`extract`](Self::extract), also reporting which pattern fired.
    ///
    /// The first pattern that matches decides, even when its amount does not
    /// parse (an overflowing "under 999…9"); later patterns are not consulted.
    pub fn extract_tagged(&self, raw: &str) -> Option<(PricePatternKind, PriceRange)> {
        let (pattern, caps) = self
            .patterns
            .iter()
            .find_map(|pattern| pattern.matcher.captures(raw).map(|caps| (pattern, caps)))?;
        let range = pattern.kind.extract(&caps);
        if range.is_none() {
            log::debug!("{:?} matched {:?} without a usable amount", pattern.kind, raw);
        }
        range.map(|range| (pattern.kind, range))
    }
}

/// "15,000" → 15000.0
fn parse_amount(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}
