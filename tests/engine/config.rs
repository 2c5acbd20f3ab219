//! Tests for engine configuration files and custom vocabularies.

use crate::common::{marketplace, titles};
use bazaar_query::{EngineConfig, Error, QueryEngine, VocabularyError};
use std::io::Write;
use tempfile::NamedTempFile;

fn engine_from_json(json: &str) -> QueryEngine {
    let config = EngineConfig::from_json_str(json).unwrap();
    QueryEngine::with_config(config).unwrap()
}

#[test]
fn test_config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "wordThreshold": 0.5, "scoring": {{ "minRelevance": 4.0 }} }}"#
    )
    .unwrap();

    let config = EngineConfig::from_path(file.path()).unwrap();
    assert_eq!(config.word_threshold, 0.5);
    assert_eq!(config.scoring.min_relevance, 4.0);
    // Untouched keys keep their defaults
    assert_eq!(config.product_threshold, EngineConfig::default().product_threshold);
    assert_eq!(config.scoring.title_contains, 10.0);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = EngineConfig::from_path(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_config() {
    assert!(matches!(
        EngineConfig::from_json_str("{ wordThreshold: }"),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_out_of_range_threshold() {
    let result = EngineConfig::from_json_str(r#"{ "productThreshold": 1.5 }"#);
    match result {
        Err(Error::InvalidConfig(message)) => assert!(message.contains("productThreshold")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_negative_weight() {
    let result = EngineConfig::from_json_str(r#"{ "scoring": { "titleWord": -3 } }"#);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_tighter_word_threshold_keeps_loose_matches_residual() {
    // "gaming" is half-similar to "mint", a Like New variant
    let loose = QueryEngine::new().unwrap().interpret("gaming laptop").unwrap();
    assert_eq!(loose.condition.as_deref(), Some("Like New"));
    assert_eq!(loose.residual_text, "");

    let strict = engine_from_json(r#"{ "wordThreshold": 0.6 }"#)
        .interpret("gaming laptop")
        .unwrap();
    assert_eq!(strict.condition, None);
    assert_eq!(strict.specific_product.as_deref(), Some("laptop"));
    assert_eq!(strict.residual_text, "gaming");
}

#[test]
fn test_scoring_weights_from_config() {
    let engine = engine_from_json(r#"{ "scoring": { "minRelevance": 5.0 } }"#);
    let results = engine.rank(marketplace(), "gaming laptop");
    assert_eq!(titles(&results), vec!["HP Pavilion gaming laptop"]);
}

#[test]
fn test_custom_vocabulary_from_json() {
    let engine = engine_from_json(
        r#"{
            "vocabulary": {
                "conditions": [ { "canonical": "New", "variants": ["boxed"] } ],
                "products": [ { "canonical": "guitar", "variants": ["gitar"] } ],
                "categories": [ { "canonical": "music", "variants": ["piano"] } ],
                "productCategories": { "guitar": "music" }
            }
        }"#,
    );

    let intent = engine.interpret("boxed gitar amp").unwrap();
    assert_eq!(intent.condition.as_deref(), Some("New"));
    assert_eq!(intent.specific_product.as_deref(), Some("guitar"));
    assert_eq!(intent.residual_text, "amp");

    let intent = engine.interpret("piano").unwrap();
    assert_eq!(intent.category.as_deref(), Some("music"));

    // The built-in tables are gone
    let intent = engine.interpret("sofa").unwrap();
    assert_eq!(intent.category, None);
    assert_eq!(intent.residual_text, "sofa");
}

#[test]
fn test_custom_vocabulary_with_dangling_link() {
    let config = EngineConfig::from_json_str(
        r#"{
            "vocabulary": {
                "products": [ { "canonical": "guitar" } ],
                "productCategories": { "guitar": "music" }
            }
        }"#,
    )
    .unwrap();

    match QueryEngine::with_config(config) {
        Err(Error::Vocabulary(VocabularyError::UnknownCategory { product, category })) => {
            assert_eq!(product, "guitar");
            assert_eq!(category, "music");
        }
        other => panic!("expected UnknownCategory, got {:?}", other.map(|_| ())),
    }
}
