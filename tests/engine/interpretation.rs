//! Tests for query interpretation.

use crate::common::{interpret, ENGINE};
use bazaar_query::{Error, PriceRange, SearchIntent};

#[test]
fn test_used_laptop_under_budget() {
    let intent = interpret("used laptop under 15000");
    assert_eq!(
        intent,
        SearchIntent {
            residual_text: String::new(),
            category: None,
            condition: Some("Used".to_string()),
            price_range: Some(PriceRange::at_most(15000.0)),
            specific_product: Some("laptop".to_string()),
        }
    );
}

#[test]
fn test_brand_new_sofa_with_range() {
    let intent = interpret("Brand New sofa between 5000 and 10000");
    assert_eq!(intent.condition.as_deref(), Some("New"));
    assert_eq!(intent.category.as_deref(), Some("furniture"));
    assert_eq!(intent.price_range, Some(PriceRange::between(5000.0, 10000.0)));
    assert_eq!(intent.specific_product, None);
}

#[test]
fn test_hyphenated_ordinal_condition() {
    for query in ["2nd hand bike", "2nd-hand bike", "second hand bike"] {
        let intent = interpret(query);
        assert_eq!(intent.condition.as_deref(), Some("Used"), "{}", query);
        assert_eq!(intent.category.as_deref(), Some("vehicles"), "{}", query);
        assert_eq!(intent.residual_text, "", "{}", query);
    }
}

#[test]
fn test_pre_owned_phrase() {
    let intent = interpret("pre-owned scooter");
    assert_eq!(intent.condition.as_deref(), Some("Used"));
    assert_eq!(intent.category.as_deref(), Some("vehicles"));
}

#[test]
fn test_product_variant_spellings() {
    assert_eq!(interpret("labtop").specific_product.as_deref(), Some("laptop"));
    assert_eq!(interpret("mobl").specific_product.as_deref(), Some("mobile"));
    assert_eq!(interpret("ipad air").specific_product.as_deref(), Some("tablet"));
    assert_eq!(interpret("iphone").specific_product.as_deref(), Some("phone"));
}

#[test]
fn test_product_claims_category_words() {
    let intent = interpret("labtop table");
    assert_eq!(intent.specific_product.as_deref(), Some("laptop"));
    assert_eq!(intent.category, None);
    assert_eq!(intent.residual_text, "table");
}

#[test]
fn test_conditions_still_apply_with_product() {
    let intent = interpret("refurbished iphone");
    assert_eq!(intent.specific_product.as_deref(), Some("phone"));
    assert_eq!(intent.condition.as_deref(), Some("Refurbished"));
}

#[test]
fn test_category_keyword_without_product() {
    let intent = interpret("antique table");
    assert_eq!(intent.specific_product, None);
    assert_eq!(intent.category.as_deref(), Some("furniture"));
    assert_eq!(intent.residual_text, "antique");
}

#[test]
fn test_typo_in_condition() {
    let intent = interpret("refurbishd sofa");
    assert_eq!(intent.condition.as_deref(), Some("Refurbished"));
    assert_eq!(intent.category.as_deref(), Some("furniture"));
}

#[test]
fn test_first_category_wins() {
    let intent = interpret("sofa bike");
    assert_eq!(intent.category.as_deref(), Some("furniture"));
    assert_eq!(intent.residual_text, "");
}

#[test]
fn test_unknown_words_are_residual_in_order() {
    let intent = interpret("xyzzy labtop galaxy");
    assert_eq!(intent.specific_product.as_deref(), Some("laptop"));
    assert_eq!(intent.residual_text, "xyzzy galaxy");
}

#[test]
fn test_blank_queries() {
    for query in ["", " ", "\t\n"] {
        assert_eq!(ENGINE.interpret(query).unwrap(), SearchIntent::default());
    }
}

#[test]
fn test_uninterpretable_queries() {
    for query in ["under and to", "12abc", "--"] {
        assert!(
            matches!(ENGINE.interpret(query), Err(Error::Uninterpretable { .. })),
            "{:?} should be uninterpretable",
            query
        );
    }
}

#[test]
fn test_intent_json_shape() {
    let json = serde_json::to_value(interpret("used laptop under 15000")).unwrap();
    assert_eq!(json["residualText"], "");
    assert_eq!(json["condition"], "Used");
    assert_eq!(json["specificProduct"], "laptop");
    assert_eq!(json["priceRange"]["max"], 15000.0);
    assert!(json.get("category").is_none());
}
