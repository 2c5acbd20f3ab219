//! Tests for price phrases inside full queries.

use crate::common::{interpret, marketplace, ENGINE};
use bazaar_query::{PricePatternKind, PriceRange};

#[test]
fn test_dash_range_with_category() {
    for query in ["sofa 5000-10000", "sofa 5000 – 10000"] {
        let intent = interpret(query);
        assert_eq!(intent.price_range, Some(PriceRange::between(5000.0, 10000.0)), "{}", query);
        assert_eq!(intent.category.as_deref(), Some("furniture"), "{}", query);
        assert_eq!(intent.residual_text, "", "{}", query);
    }
}

#[test]
fn test_reversed_range_is_swapped() {
    let intent = interpret("bike 30000 to 20000");
    let range = intent.price_range.unwrap();
    assert_eq!(range.min, Some(20000.0));
    assert_eq!(range.max, Some(30000.0));
}

#[test]
fn test_first_matching_pattern_wins() {
    let intent = interpret("phone under 500 and above 100");
    assert_eq!(intent.price_range, Some(PriceRange::at_most(500.0)));
    assert_eq!(intent.specific_product.as_deref(), Some("phone"));
}

#[test]
fn test_from_to_with_thousands_separators() {
    let intent = interpret("from 1,000 to 2,500 table");
    assert_eq!(intent.price_range, Some(PriceRange::between(1000.0, 2500.0)));
    assert_eq!(intent.category.as_deref(), Some("furniture"));
}

#[test]
fn test_currency_prefixes() {
    assert_eq!(
        interpret("₹2,500 chair").price_range,
        Some(PriceRange::at_most(2500.0))
    );
    assert_eq!(
        interpret("phone rs.500").price_range,
        Some(PriceRange::at_most(500.0))
    );
    assert_eq!(
        interpret("mobile less than 9999").price_range,
        Some(PriceRange::at_most(9999.0))
    );
}

#[test]
fn test_decimal_amount() {
    let intent = interpret("table 1500.50");
    assert_eq!(intent.price_range, Some(PriceRange::at_most(1500.5)));
}

#[test]
fn test_bare_number_is_a_budget() {
    // Model numbers read as prices too
    let intent = interpret("iphone 12");
    assert_eq!(intent.specific_product.as_deref(), Some("phone"));
    assert_eq!(intent.price_range, Some(PriceRange::at_most(12.0)));
}

#[test]
fn test_digits_inside_words_are_not_prices() {
    let intent = interpret("i5 laptop");
    assert_eq!(intent.price_range, None);
    assert_eq!(intent.specific_product.as_deref(), Some("laptop"));
    // Still skipped as a token
    assert_eq!(intent.residual_text, "");
}

#[test]
fn test_pattern_tags() {
    let prices = ENGINE.price_extractor();
    let kind = |query: &str| prices.extract_tagged(query).map(|(kind, _)| kind);

    assert_eq!(kind("under 500"), Some(PricePatternKind::UpperBound));
    assert_eq!(kind("over 500"), Some(PricePatternKind::LowerBound));
    assert_eq!(kind("between 1 and 2"), Some(PricePatternKind::Between));
    assert_eq!(kind("100-200"), Some(PricePatternKind::Range));
    assert_eq!(kind("₹300"), Some(PricePatternKind::Bare));
    assert_eq!(kind("sofa"), None);
}

#[test]
fn test_price_only_query_is_interpretable() {
    let intent = interpret("under 500");
    assert_eq!(intent.price_range, Some(PriceRange::at_most(500.0)));
    assert_eq!(intent.residual_text, "");
    assert!(!intent.is_empty());
}

#[test]
fn test_shorthand_amounts_are_not_bounds() {
    let intent = interpret("laptop under 15k");
    assert_eq!(intent.price_range, None);
    assert_eq!(intent.specific_product.as_deref(), Some("laptop"));

    // No bogus "max 15" filtering out every laptop
    let admitted = marketplace()
        .into_iter()
        .filter(|item| intent.admits(item))
        .filter(|item| item.title.to_lowercase().contains("laptop"))
        .count();
    assert_eq!(admitted, 3);

    assert_eq!(interpret("phone above 4gb").price_range, None);
}

#[test]
fn test_unparseable_first_phrase_blocks_later_ones() {
    let raw = format!("sofa under {} above 5", "9".repeat(400));
    let intent = interpret(&raw);
    assert_eq!(intent.price_range, None);
    assert_eq!(intent.category.as_deref(), Some("furniture"));
}

#[test]
fn test_comparison_words_without_price_stay_residual() {
    let intent = interpret("xyzzy over sofa");
    assert_eq!(intent.price_range, None);
    assert_eq!(intent.residual_text, "xyzzy over");

    let intent = interpret("sofa more than 5000");
    assert_eq!(intent.price_range, Some(PriceRange::at_least(5000.0)));
    assert_eq!(intent.residual_text, "");
}
