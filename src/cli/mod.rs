// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bazaar command-line interface.
//!
//! Four subcommands: `interpret` shows how a query is read, `rank` scores a
//! JSON file of listings against a query, `search` does both the way the
//! marketplace does (filter on the intent, then rank), and `vocab` dumps the
//! vocabulary in effect.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bazaar",
    about = "Interpret and rank freeform marketplace search queries",
    version
)]
pub struct Cli {
    /// Engine configuration file (JSON). Defaults to the built-in settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the structured intent of a query
    Interpret {
        /// Freeform query, e.g. "used laptop under 15000"
        query: String,

        /// Print the intent as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank listings from a JSON file against a query
    Rank {
        /// Freeform query
        query: String,

        /// JSON array of listings ({title, description, price, condition, categorySlug})
        #[arg(short, long)]
        items: PathBuf,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Show the per-signal score breakdown
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interpret, filter listings on the intent, then rank
    Search {
        /// Freeform query
        query: String,

        /// JSON array of listings
        #[arg(short, long)]
        items: PathBuf,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print intent and results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the vocabulary in effect
    Vocab {
        /// Print the tables as JSON
        #[arg(long)]
        json: bool,
    },
}
