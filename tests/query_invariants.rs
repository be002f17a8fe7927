//! Query engine invariants
//!
//! Descriptor semantics that clients depend on: `*` is a superset of `=`,
//! multi-key sorts are stable, `total` ignores pagination, and pagination
//! clamps instead of erroring.

use gridstore::query::{engine, parse_filters, FilterOp, FilterSpec, SortSpec};
use gridstore::store::{Record, RecordStore};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    serde_json::from_value(value).unwrap()
}

fn people() -> RecordStore {
    RecordStore::new(vec![
        record(json!({"id": 1, "sortIndex": 10, "name": "Ada", "city": "Paris", "age": 34})),
        record(json!({"id": 2, "sortIndex": 20, "name": "Ben", "city": "paris", "age": 41})),
        record(json!({"id": 3, "sortIndex": 30, "name": "Cid", "city": "PARIS", "age": 28})),
        record(json!({"id": 4, "sortIndex": 40, "name": "Dee", "city": "Oslo", "age": 34})),
        record(json!({"id": 5, "sortIndex": 50, "name": "Eva", "city": "Berlin", "age": 22})),
    ])
}

fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().filter_map(Record::id).collect()
}

#[test]
fn test_star_matches_superset_of_eq() {
    let store = people();
    for value in [json!("paris"), json!("ari"), json!(34)] {
        let eq = FilterSpec::new("city", FilterOp::Eq, value.clone(), false);
        let star = FilterSpec::new("city", FilterOp::Contains, value, false);
        for rec in store.records() {
            if eq.matches(rec) {
                assert!(star.matches(rec), "star must cover eq for {:?}", rec.id());
            }
        }
    }
}

#[test]
fn test_star_adds_substring_matches() {
    let star = FilterSpec::new("name", FilterOp::Contains, json!("d"), false);
    let eq = FilterSpec::new("name", FilterOp::Eq, json!("d"), false);
    let store = people();

    let star_ids: Vec<i64> = ids(&store
        .records()
        .iter()
        .filter(|r| star.matches(r))
        .cloned()
        .collect::<Vec<_>>());
    assert_eq!(star_ids, vec![1, 3, 4]);
    assert!(store.records().iter().all(|r| !eq.matches(r)));
}

#[test]
fn test_multi_key_sort_is_stable() {
    let mut store = people();
    // age has a tie between ids 1 and 4; insertion order must hold.
    let out = engine::run(&mut store, &[SortSpec::new("age", true)], &[], 0, None);
    assert_eq!(ids(&out.page), vec![5, 3, 1, 4, 2]);
}

#[test]
fn test_total_is_independent_of_pagination() {
    let filters = parse_filters(
        r#"[{"field":"city","operator":"=","value":"Paris","caseSensitive":false}]"#,
    )
    .unwrap();

    for (start, count) in [(0, Some(1)), (1, Some(10)), (5, Some(2)), (0, None)] {
        let mut store = people();
        let out = engine::run(&mut store, &[], &filters, start, count);
        assert_eq!(out.total, 3, "start={start} count={count:?}");
    }
}

#[test]
fn test_pagination_clamps_to_available_records() {
    let mut store = people();

    let out = engine::run(&mut store, &[], &[], 0, Some(2));
    assert_eq!(out.page.len(), 2);

    let out = engine::run(&mut store, &[], &[], 4, Some(10));
    assert_eq!(out.page.len(), 1);

    let out = engine::run(&mut store, &[], &[], 10, Some(5));
    assert_eq!(out.page.len(), 0);
    assert_eq!(out.total, 5);
}

#[test]
fn test_case_insensitive_eq_matches_all_casings() {
    let filters = parse_filters(
        r#"[{"field":"city","operator":"=","value":"Paris","caseSensitive":false}]"#,
    )
    .unwrap();
    let mut store = people();
    let out = engine::run(&mut store, &[], &filters, 0, None);
    assert_eq!(ids(&out.page), vec![1, 2, 3]);
}

#[test]
fn test_case_sensitive_eq_is_exact() {
    let filters = parse_filters(
        r#"[{"field":"city","operator":"=","value":"Paris","caseSensitive":true}]"#,
    )
    .unwrap();
    let mut store = people();
    let out = engine::run(&mut store, &[], &filters, 0, None);
    assert_eq!(ids(&out.page), vec![1]);
}

#[test]
fn test_filters_compose_as_and() {
    let filters = vec![
        FilterSpec::new("city", FilterOp::Eq, json!("paris"), false),
        FilterSpec::new("age", FilterOp::Lt, json!(40), true),
    ];
    let mut store = people();
    let out = engine::run(&mut store, &[], &filters, 0, None);
    assert_eq!(ids(&out.page), vec![1, 3]);
}

#[test]
fn test_omitted_sort_resorts_only_ever_sorted_sessions() {
    let mut store = people();

    // Scramble with an explicit sort.
    engine::run(&mut store, &[SortSpec::new("name", false)], &[], 0, None);
    assert_eq!(ids(&store.records().to_vec()), vec![5, 4, 3, 2, 1]);

    // Omitting sort now falls back to sortIndex ascending.
    let out = engine::run(&mut store, &[], &[], 0, None);
    assert_eq!(ids(&out.page), vec![1, 2, 3, 4, 5]);
}
