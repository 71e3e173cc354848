//! Tests for sorting and the memoized table model

use std::cmp::Ordering;

use serpdash_types::{CategoryRecord, FieldValue, SortDirection, SortKey, SortState};

use super::*;
use crate::dataset;

fn record(name: &str, threads: u64, traffic: u64, position: f64) -> CategoryRecord {
    CategoryRecord::new(name, threads, traffic, 10, position, 0)
}

fn names(rows: &[CategoryRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn unset_state_orders_by_traffic_descending() {
    let records = vec![
        record("C", 1, 290, 1.0),
        record("A", 1, 6484, 1.0),
        record("B", 1, 388, 1.0),
    ];
    let view = compute_sorted_view(&records, None);
    assert_eq!(names(&view), ["A", "B", "C"]);

    let explicit = compute_sorted_view(&records, Some(SortState::descending(SortKey::SumOfTraffic)));
    assert_eq!(view, explicit);
}

#[test]
fn view_does_not_mutate_input() {
    let records = dataset::categories().to_vec();
    let before = records.clone();
    let _ = compute_sorted_view(&records, Some(SortState::ascending(SortKey::Name)));
    assert_eq!(records, before);
}

#[test]
fn every_key_yields_ordered_permutation() {
    let records = dataset::categories();

    for &key in SortKey::all() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let view = compute_sorted_view(records, Some(SortState { key, direction }));

            let mut expected: Vec<&str> = names(records);
            let mut got: Vec<&str> = names(&view);
            expected.sort();
            got.sort();
            assert_eq!(got, expected, "{key:?} {direction:?} is not a permutation");

            for pair in view.windows(2) {
                let cmp = compare_fields(pair[0].field(key), pair[1].field(key));
                match direction {
                    SortDirection::Ascending => assert_ne!(cmp, Ordering::Greater),
                    SortDirection::Descending => assert_ne!(cmp, Ordering::Less),
                }
            }
        }
    }
}

#[test]
fn equal_values_keep_input_order() {
    let records = vec![
        record("first", 5, 10, 1.0),
        record("second", 3, 10, 1.0),
        record("third", 5, 20, 1.0),
        record("fourth", 5, 10, 1.0),
    ];

    let asc = compute_sorted_view(&records, Some(SortState::ascending(SortKey::TotalThreads)));
    assert_eq!(names(&asc), ["second", "first", "third", "fourth"]);

    let desc = compute_sorted_view(&records, Some(SortState::descending(SortKey::TotalThreads)));
    assert_eq!(names(&desc), ["first", "third", "fourth", "second"]);

    let default = compute_sorted_view(&records, None);
    assert_eq!(names(&default), ["third", "first", "second", "fourth"]);
}

#[test]
fn name_column_sorts_lexicographically() {
    let records = vec![
        record("b", 1, 1, 1.0),
        record("B", 1, 1, 1.0),
        record("a", 1, 1, 1.0),
        record("10", 1, 1, 1.0),
        record("9", 1, 1, 1.0),
    ];
    let view = compute_sorted_view(&records, Some(SortState::ascending(SortKey::Name)));
    assert_eq!(names(&view), ["10", "9", "B", "a", "b"]);
}

#[test]
fn position_column_sorts_numerically() {
    let records = vec![
        record("x", 1, 1, 37.6),
        record("y", 1, 1, 7.1),
        record("z", 1, 1, 14.9),
    ];
    let view = compute_sorted_view(
        &records,
        Some(SortState::ascending(SortKey::AvgKeywordPosition)),
    );
    assert_eq!(names(&view), ["y", "z", "x"]);
}

#[test]
fn comparator_is_total_across_kinds() {
    let text = FieldValue::Text("zzz");
    let count = FieldValue::Count(0);
    let real = FieldValue::Real(f64::NAN);

    assert_eq!(compare_fields(text, count), Ordering::Less);
    assert_eq!(compare_fields(count, text), Ordering::Greater);
    assert_eq!(compare_fields(count, real), Ordering::Less);
    assert_eq!(compare_fields(real, real), Ordering::Equal);
}

#[test]
fn request_sort_alternates_on_same_key() {
    let mut controller = SortController::new();
    assert_eq!(controller.state(), None);

    let first = controller.request_sort(SortKey::SumOfKeywords);
    assert_eq!(first, SortState::ascending(SortKey::SumOfKeywords));

    let second = controller.request_sort(SortKey::SumOfKeywords);
    assert_eq!(second, SortState::descending(SortKey::SumOfKeywords));

    let third = controller.request_sort(SortKey::SumOfKeywords);
    assert_eq!(third, first);
}

#[test]
fn request_sort_on_new_key_resets_to_ascending() {
    let mut controller = SortController::new();
    controller.request_sort(SortKey::Name);
    controller.request_sort(SortKey::Name);
    assert_eq!(
        controller.state(),
        Some(SortState::descending(SortKey::Name))
    );

    let next = controller.request_sort(SortKey::ThreadsInTop10);
    assert_eq!(next, SortState::ascending(SortKey::ThreadsInTop10));
}

#[test]
fn indicator_only_on_selected_column() {
    let mut controller = SortController::new();
    for &key in SortKey::all() {
        assert_eq!(controller.indicator(key), SortIndicator::None);
    }

    controller.request_sort(SortKey::TotalThreads);
    assert_eq!(
        controller.indicator(SortKey::TotalThreads),
        SortIndicator::Ascending
    );
    assert_eq!(controller.indicator(SortKey::Name), SortIndicator::None);

    controller.request_sort(SortKey::TotalThreads);
    assert_eq!(
        controller.indicator(SortKey::TotalThreads),
        SortIndicator::Descending
    );
}

#[test]
fn table_model_memoizes_view() {
    let mut model = TableModel::new(dataset::categories().to_vec());

    let first = names(model.view()).join("|");
    let _ = model.view();
    let _ = model.view();
    assert_eq!(model.recompute_count(), 1);

    model.request_sort(SortKey::Name);
    let sorted = names(model.view()).join("|");
    assert_ne!(first, sorted);
    assert_eq!(model.recompute_count(), 2);

    let _ = model.view();
    assert_eq!(model.recompute_count(), 2);

    model.set_records(vec![record("only", 1, 1, 1.0)]);
    assert_eq!(names(model.view()), ["only"]);
    assert_eq!(model.recompute_count(), 3);
}

#[test]
fn table_model_default_view_matches_traffic_order() {
    let mut model = TableModel::new(dataset::categories().to_vec());
    let traffic: Vec<u64> = model.view().iter().map(|r| r.sum_of_traffic).collect();
    assert_eq!(traffic, [6484, 388, 290, 112, 72, 45]);
    // Source order preserved
    assert_eq!(model.records()[0].name, "Types of Ransomware");
    assert_eq!(model.records()[3].name, "Ransomware Tools and Software");
}
