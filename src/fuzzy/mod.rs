// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! A full Levenshtein distance, a bounded variant for yes/no checks, and the
//! normalized [`similarity`] score that every fuzzy lookup in the crate goes
//! through. Vocabulary scans call [`similarity_above`], which runs the bounded
//! check first and only scores candidates that can still win.

mod levenshtein;

pub use levenshtein::*;
