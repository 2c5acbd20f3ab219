// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::Path;

use bazaar_query::{
    CandidateItem, EngineConfig, QueryEngine, RankedResult, ScoreBreakdown, SearchIntent, TermKind,
    VocabularyEntry,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// `search --json` output
#[derive(Serialize)]
struct SearchOutput<'a> {
    intent: &'a SearchIntent,
    matched: usize,
    results: &'a [RankedResult],
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> bazaar_query::Result<()> {
    let engine = match &cli.config {
        Some(path) => QueryEngine::with_config(EngineConfig::from_path(path)?)?,
        None => QueryEngine::new()?,
    };

    match cli.command {
        Commands::Interpret { query, json } => {
            let intent = engine.interpret(&query)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                print_intent(&engine, &query, &intent);
            }
        }
        Commands::Rank {
            query,
            items,
            limit,
            explain,
            json,
        } => {
            let candidates = load_items(&items)?;
            let total = candidates.len();
            let mut results = engine.rank(candidates, &query);
            results.truncate(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let breakdowns: Option<Vec<ScoreBreakdown>> = explain.then(|| {
                    results
                        .iter()
                        .map(|r| engine.explain(&r.item, &query))
                        .collect()
                });
                print_results(&query, total, &results, breakdowns.as_deref());
            }
        }
        Commands::Search {
            query,
            items,
            limit,
            json,
        } => {
            let intent = engine.interpret(&query)?;
            let candidates: Vec<CandidateItem> = load_items(&items)?
                .into_iter()
                .filter(|item| intent.admits(item))
                .collect();
            let matched = candidates.len();
            let mut results = engine.rank(candidates, &query);
            results.truncate(limit);
            if json {
                let output = SearchOutput {
                    intent: &intent,
                    matched,
                    results: &results,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_intent(&engine, &query, &intent);
                print_results(&query, matched, &results, None);
            }
        }
        Commands::Vocab { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(engine.vocabulary().tables())?);
            } else {
                print_vocab(&engine);
            }
        }
    }

    Ok(())
}

fn load_items(path: &Path) -> bazaar_query::Result<Vec<CandidateItem>> {
    let json = fs::read_to_string(path)?;
    let items: Vec<CandidateItem> = serde_json::from_str(&json)?;
    log::debug!("loaded {} listings from {}", items.len(), path.display());
    Ok(items)
}

fn print_intent(engine: &QueryEngine, query: &str, intent: &SearchIntent) {
    title(&format!("“{}”", truncate(query, 60)));
    section_top("INTENT");
    field("product", &or_dash(intent.specific_product.as_deref()));
    field("condition", &or_dash(intent.condition.as_deref()));
    field("category", &or_dash(intent.category.as_deref()));

    let price = match engine.price_extractor().extract_tagged(query) {
        Some((kind, range)) => format!(
            "{}  {}",
            price_label(Some(&range)),
            themed(GRAY, &[DIM], &format!("({:?})", kind))
        ),
        None => price_label(intent.price_range.as_ref()),
    };
    field("price", &price);
    field("residual", &or_dash(Some(intent.residual_text.as_str())));
    section_bot();
}

fn print_results(
    query: &str,
    candidates: usize,
    results: &[RankedResult],
    breakdowns: Option<&[ScoreBreakdown]>,
) {
    section_top(&format!(
        "RESULTS  {} of {} for “{}”",
        results.len(),
        candidates,
        truncate(query, 30)
    ));
    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[DIM], "no matches")));
    }
    for (i, result) in results.iter().enumerate() {
        let item = &result.item;
        row(&format!(
            "  {:>2}. {}  {}  {}",
            i + 1,
            score_value(result.score),
            pad_right(&truncate(&item.title, 36), 36),
            price_value(item.price),
        ));
        if let Some(b) = breakdowns.and_then(|all| all.get(i)) {
            row(&themed(
                GRAY,
                &[DIM],
                &format!(
                    "        title {:.0} + phrase {:.0} + words {:.0} ({}) + description {:.0}",
                    b.title_contains,
                    b.sequential_phrase,
                    b.title_words,
                    b.matched_words,
                    b.description_contains
                ),
            ));
        }
    }
    section_bot();
}

fn print_vocab(engine: &QueryEngine) {
    let vocabulary = engine.vocabulary();
    let tables = vocabulary.tables();
    title("VOCABULARY");

    let sections: [(&str, TermKind, &Vec<VocabularyEntry>); 3] = [
        ("CONDITIONS", TermKind::Condition, &tables.conditions),
        ("PRODUCTS", TermKind::Product, &tables.products),
        ("CATEGORIES", TermKind::Category, &tables.categories),
    ];
    for (i, (label, kind, entries)) in sections.iter().enumerate() {
        if i == 0 {
            section_top(label);
        } else {
            section_mid(label);
        }
        for entry in entries.iter() {
            let mut line = format!(
                "  {} {}",
                kind_badge(*kind),
                pad_right(&themed(BRIGHT_CYAN, &[BOLD], &entry.canonical), 16)
            );
            if *kind == TermKind::Product {
                if let Some(slug) = vocabulary.category_for_product(&entry.canonical) {
                    line.push_str(&themed(GRAY, &[], &format!("→ {}  ", slug)));
                }
            }
            let variants: Vec<&str> = entry.variants.iter().map(String::as_str).collect();
            line.push_str(&truncate(&variants.join(", "), 44));
            row(&line);
        }
    }
    section_bot();
}
