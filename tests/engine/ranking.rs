//! Tests for relevance ranking over a realistic candidate set.

use crate::common::{marketplace, titles, ENGINE};
use bazaar_query::{rank, ScoringConfig};

#[test]
fn test_equal_scores_keep_input_order() {
    let results = ENGINE.rank(marketplace(), "laptop");

    // Three titles tie at 18; the study table only matches its description
    assert_eq!(
        titles(&results),
        vec![
            "Dell Inspiron Laptop",
            "HP Pavilion gaming laptop",
            "Lenovo laptop stand",
            "Study table with drawer",
        ]
    );
    let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![18.0, 18.0, 18.0, 2.0]);
}

#[test]
fn test_phrase_match_outranks_word_matches() {
    let results = ENGINE.rank(marketplace(), "gaming laptop");

    assert_eq!(results[0].item.title, "HP Pavilion gaming laptop");
    assert_eq!(results[0].score, 21.0);
    assert!(results[1..].iter().all(|r| r.score == 3.0));
}

#[test]
fn test_irrelevant_items_are_dropped() {
    let results = ENGINE.rank(marketplace(), "sofa");
    assert_eq!(titles(&results), vec!["Three seater sofa"]);

    assert!(ENGINE.rank(marketplace(), "xyzzy").is_empty());
}

#[test]
fn test_description_substring_counts() {
    // "adjustable" contains "table"
    let results = ENGINE.rank(marketplace(), "table");
    assert_eq!(
        titles(&results),
        vec!["Study table with drawer", "Lenovo laptop stand"]
    );
    assert_eq!(results[1].score, 2.0);
}

#[test]
fn test_extra_whitespace_keeps_sequential_bonus() {
    let breakdown = ENGINE.explain(&marketplace()[1], "gaming  laptop");

    assert_eq!(breakdown.title_contains, 0.0);
    assert_eq!(breakdown.sequential_phrase, 5.0);
    assert_eq!(breakdown.matched_words, 2);
    assert_eq!(breakdown.total(), 11.0);
}

#[test]
fn test_plural_query_scores_by_words_only() {
    let results = ENGINE.rank(marketplace(), "laptops");

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.score == 3.0));
}

#[test]
fn test_blank_query_passes_everything_through() {
    let items = marketplace();
    let results = ENGINE.rank(items.clone(), "   ");

    assert_eq!(results.len(), items.len());
    for (result, item) in results.iter().zip(&items) {
        assert_eq!(&result.item, item);
        assert_eq!(result.score, 0.0);
    }
}

#[test]
fn test_custom_floor_drops_weak_matches() {
    let config = ScoringConfig {
        min_relevance: 5.0,
        ..ScoringConfig::default()
    };
    let results = rank(marketplace(), "mobile phone", &config);

    // The iPhone only earns one word match (3.0)
    assert_eq!(titles(&results), vec!["Samsung mobile phone"]);
    assert_eq!(results[0].score, 21.0);
}

#[test]
fn test_ranking_does_not_modify_items() {
    let items = marketplace();
    let results = ENGINE.rank(items.clone(), "phone");

    for result in &results {
        assert!(items.contains(&result.item));
    }
}
