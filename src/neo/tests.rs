use super::catalog::Catalog;
use super::pipeline::{apply_filter, extract_vocabulary, normalize, sort_by_average_diameter_desc};
use super::record::{MalformedRecordError, NeoRecord};
use super::selection::Selection;
use crate::http_handler::http_response::neo_browse::{NeoBrowseResponse, RawNeo};

fn record(name: &str, min: f64, max: f64, bodies: &[&str]) -> NeoRecord {
    NeoRecord::new(name, min, max, bodies.iter().map(|b| String::from(*b)).collect())
}

fn selection_of(bodies: &[&str]) -> Selection {
    let mut selection = Selection::new();
    for body in bodies {
        selection.toggle(body);
    }
    selection
}

fn raw_entry(id: &str, name: &str, min: f64, max: f64, bodies: &[&str]) -> String {
    let approaches: Vec<String> = bodies
        .iter()
        .map(|body| {
            format!(r#"{{"close_approach_date": "2024-03-01", "orbiting_body": "{body}"}}"#)
        })
        .collect();
    format!(
        r#"{{
            "id": "{id}",
            "name": "{name}",
            "estimated_diameter": {{
                "kilometers": {{
                    "estimated_diameter_min": {min},
                    "estimated_diameter_max": {max}
                }}
            }},
            "close_approach_data": [{}]
        }}"#,
        approaches.join(", ")
    )
}

fn raw_neos(entries: &[String]) -> Vec<RawNeo> {
    serde_json::from_str(&format!("[{}]", entries.join(", "))).unwrap()
}

#[test]
fn test_sort_is_descending_and_idempotent() {
    let records = vec![
        record("small", 0.05, 0.05, &["Moon"]),
        record("large", 0.5, 0.5, &["Earth"]),
        record("medium", 0.1, 0.3, &["Earth"]),
    ];
    let sorted = sort_by_average_diameter_desc(records);
    let names: Vec<&str> = sorted.iter().map(NeoRecord::name).collect();
    assert_eq!(names, vec!["large", "medium", "small"]);
    let resorted = sort_by_average_diameter_desc(sorted.clone());
    assert_eq!(resorted, sorted);
}

#[test]
fn test_sort_keeps_input_order_on_equal_averages() {
    let records = vec![
        record("first", 0.1, 0.3, &["Earth"]),
        record("second", 0.2, 0.2, &["Mars"]),
        record("third", 0.0, 0.4, &["Moon"]),
    ];
    let sorted = sort_by_average_diameter_desc(records.clone());
    assert_eq!(sorted, records);
}

#[test]
fn test_filter_with_empty_selection_is_identity() {
    let records = vec![
        record("a", 0.1, 0.3, &["Earth"]),
        record("b", 0.5, 0.5, &[]),
        record("c", 0.05, 0.05, &["Moon"]),
    ];
    let visible = apply_filter(&records, &Selection::new());
    assert_eq!(visible.len(), records.len());
    for (kept, expected) in visible.iter().zip(records.iter()) {
        assert_eq!(*kept, expected);
    }
}

#[test]
fn test_filter_grows_monotonically_with_selection() {
    let records = vec![
        record("a", 0.1, 0.3, &["Earth", "Mars"]),
        record("b", 0.5, 0.5, &["Earth"]),
        record("c", 0.05, 0.05, &["Moon"]),
        record("d", 0.2, 0.2, &["Mercury"]),
    ];
    let narrow = apply_filter(&records, &selection_of(&["Mars"]));
    let wide = apply_filter(&records, &selection_of(&["Mars", "Moon"]));
    let mut remaining = wide.iter();
    for kept in &narrow {
        assert!(remaining.any(|candidate| candidate == kept));
    }
}

#[test]
fn test_filter_matches_on_intersection_not_equality() {
    let records = vec![record("a", 0.1, 0.3, &["Earth", "Mars"])];
    let visible = apply_filter(&records, &selection_of(&["Mars", "Venus"]));
    assert_eq!(visible.len(), 1);
}

#[test]
fn test_vocabulary_is_complete_and_unique() {
    let records = vec![
        record("a", 0.1, 0.3, &["Earth", "Mars"]),
        record("b", 0.5, 0.5, &["Earth"]),
        record("c", 0.05, 0.05, &["Moon", "Mars"]),
    ];
    let vocabulary = extract_vocabulary(&records);
    assert_eq!(vocabulary, vec!["Earth", "Mars", "Moon"]);
}

#[test]
fn test_repeated_close_approaches_collapse_to_one_body() {
    let raw = raw_neos(&[raw_entry(
        "1",
        "repeat",
        0.1,
        0.2,
        &["Earth", "Earth", "Earth", "Earth", "Earth"],
    )]);
    let (records, skipped) = normalize(&raw);
    assert_eq!(skipped, 0);
    assert_eq!(records[0].orbiting_bodies(), ["Earth"]);
}

#[test]
fn test_normalize_skips_malformed_entries_and_counts_them() {
    let no_diameter = String::from(
        r#"{"id": "9", "name": "gutted", "close_approach_data": [
            {"close_approach_date": "2024-03-01", "orbiting_body": "Earth"}
        ]}"#,
    );
    let no_max = String::from(
        r#"{"id": "10", "name": "half", "estimated_diameter": {
            "kilometers": {"estimated_diameter_min": 0.1}
        }, "close_approach_data": []}"#,
    );
    let raw = raw_neos(&[raw_entry("1", "good", 0.1, 0.2, &["Earth"]), no_diameter, no_max]);
    let (records, skipped) = normalize(&raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), "good");
    assert_eq!(skipped, 2);
}

#[test]
fn test_inverted_diameter_bounds_are_malformed() {
    let raw = raw_neos(&[raw_entry("1", "backwards", 0.4, 0.1, &["Earth"])]);
    let inverted = NeoRecord::from_raw(&raw[0]);
    assert!(matches!(inverted, Err(MalformedRecordError::InvalidDiameterBounds)));
}

#[test]
fn test_entry_without_close_approaches_stays_in_catalog() {
    let raw = raw_neos(&[raw_entry("1", "loner", 0.1, 0.2, &[])]);
    let (records, skipped) = normalize(&raw);
    assert_eq!(skipped, 0);
    assert!(records[0].orbiting_bodies().is_empty());
    let all = apply_filter(&records, &Selection::new());
    assert_eq!(all.len(), 1);
    let filtered = apply_filter(&records, &selection_of(&["Earth"]));
    assert!(filtered.is_empty());
}

#[test]
fn test_selection_toggle_round_trips() {
    let mut selection = Selection::new();
    assert!(selection.toggle("Earth"));
    assert!(selection.contains("Earth"));
    assert_eq!(selection.len(), 1);
    assert!(!selection.toggle("Earth"));
    assert!(selection.is_empty());
}

#[test]
fn test_out_of_vocabulary_selection_matches_nothing() {
    let records = vec![record("a", 0.1, 0.3, &["Earth"])];
    let visible = apply_filter(&records, &selection_of(&["Jupiter"]));
    assert!(visible.is_empty());
}

#[test]
fn test_catalog_load_end_to_end() {
    let document = format!(
        r#"{{
            "links": {{"self": "https://api.nasa.gov/neo/rest/v1/neo/browse"}},
            "page": {{"size": 3, "total_elements": 3, "total_pages": 1, "number": 0}},
            "near_earth_objects": [{}, {}, {}]
        }}"#,
        raw_entry("1", "A", 0.1, 0.3, &["Earth", "Earth", "Mars"]),
        raw_entry("2", "B", 0.5, 0.5, &["Earth"]),
        raw_entry("3", "C", 0.05, 0.05, &["Moon"]),
    );
    let response: NeoBrowseResponse = serde_json::from_str(&document).unwrap();
    let (catalog, skipped) = Catalog::from_response(&response);

    assert_eq!(skipped, 0);
    let names: Vec<&str> = catalog.records().iter().map(NeoRecord::name).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
    assert_eq!(catalog.vocabulary(), ["Earth", "Mars", "Moon"]);

    let mars_only: Vec<&str> =
        catalog.visible(&selection_of(&["Mars"])).iter().map(|r| r.name()).collect();
    assert_eq!(mars_only, vec!["A"]);

    let unfiltered: Vec<&str> =
        catalog.visible(&Selection::new()).iter().map(|r| r.name()).collect();
    assert_eq!(unfiltered, vec!["B", "A", "C"]);
}

#[test]
fn test_visible_set_is_a_subset_of_the_catalog() {
    let raw = raw_neos(&[
        raw_entry("1", "a", 0.1, 0.3, &["Earth"]),
        raw_entry("2", "b", 0.2, 0.4, &["Mars"]),
    ]);
    let (records, _) = normalize(&raw);
    let visible = apply_filter(&records, &selection_of(&["Mars"]));
    for kept in visible {
        assert!(records.iter().any(|candidate| candidate == kept));
    }
}
