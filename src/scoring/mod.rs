// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how listings get their numbers.
//!
//! Scores are small additive sums of title and description signals. Anything
//! that barely registers is dropped before sorting.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_ranked, rank};
