//! End-to-end: interpret a query, filter candidates on its constraints,
//! then rank what is left against the raw query.

use crate::common::{marketplace, titles, ENGINE};
use bazaar_query::{CandidateItem, RankedResult};

fn search(query: &str, items: Vec<CandidateItem>) -> Vec<RankedResult> {
    let intent = ENGINE.interpret(query).unwrap();
    let admitted: Vec<CandidateItem> = items.into_iter().filter(|item| intent.admits(item)).collect();
    ENGINE.rank(admitted, query)
}

#[test]
fn test_used_laptop_under_budget() {
    let results = search("used laptop under 15000", marketplace());

    assert_eq!(titles(&results), vec!["Dell Inspiron Laptop"]);
    assert_eq!(results[0].score, 3.0);
}

#[test]
fn test_category_and_price_filter() {
    let intent = ENGINE.interpret("sofa under 10000").unwrap();
    let admitted: Vec<CandidateItem> = marketplace()
        .into_iter()
        .filter(|item| intent.admits(item))
        .collect();
    let admitted_titles: Vec<&str> = admitted.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(admitted_titles, vec!["Three seater sofa", "Study table with drawer"]);

    let results = search("sofa under 10000", marketplace());
    assert_eq!(titles(&results), vec!["Three seater sofa"]);
}

#[test]
fn test_lower_bound_then_word_matches() {
    let results = search("mobile phone above 8,000", marketplace());

    assert_eq!(titles(&results), vec!["Samsung mobile phone", "iPhone 12"]);
    assert_eq!(results[0].score, 6.0);
    assert_eq!(results[1].score, 3.0);
}

#[test]
fn test_condition_filter_is_case_insensitive() {
    let mut items = marketplace();
    for item in &mut items {
        item.condition = item.condition.to_uppercase();
    }

    let results = search("brand new laptop stand", items);
    assert_eq!(titles(&results), vec!["Lenovo laptop stand"]);
}

#[test]
fn test_listings_from_json() {
    let json = r#"[
        { "title": "Wooden dining table", "description": "Seats six", "price": 12000,
          "condition": "Used", "categorySlug": "furniture" },
        { "title": "Office chair", "price": 2500, "condition": "Used",
          "categorySlug": "furniture" }
    ]"#;
    let items: Vec<CandidateItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items[1].description, "");

    let results = search("chair under 5000", items);
    let chosen: Vec<CandidateItem> = results.into_iter().map(RankedResult::into_item).collect();
    assert_eq!(chosen.len(), 1);
    assert_eq!(chosen[0].title, "Office chair");
}

#[test]
fn test_blank_query_keeps_everything() {
    let results = search("", marketplace());
    assert_eq!(results.len(), marketplace().len());
    assert!(results.iter().all(|r| r.score == 0.0));
}
