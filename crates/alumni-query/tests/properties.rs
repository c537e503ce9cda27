//! Algebraic properties of filter, aggregate and top_n.

use std::collections::BTreeMap;

use proptest::prelude::{Just, Strategy, prop, prop_assert, prop_assert_eq, proptest};

use alumni_model::{AggregateRow, Dataset, FilterCriteria, Record};
use alumni_query::{aggregate, filter, top_n};

const NAMES: &[&str] = &["Asha", "Bilal", "Chen", "Dina", "Emeka", "Farah", "Goran"];
const PLATFORMS: &[&str] = &["LinkedIn", "Discord", "Email"];

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(NAMES),
        prop::sample::select(PLATFORMS),
        -50i32..200,
    )
        .prop_map(|(name, platform, points)| {
            Record::new(1, name, platform, f64::from(points)).expect("valid record")
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(Dataset::new)
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::subsequence(NAMES, 0..=3),
        prop::sample::subsequence(PLATFORMS, 0..=2),
    )
        .prop_map(|(names, platforms)| {
            FilterCriteria::new()
                .with_names(names)
                .with_platforms(platforms)
        })
}

fn as_map(rows: &[AggregateRow]) -> BTreeMap<String, f64> {
    rows.iter()
        .map(|row| (row.name.clone(), row.total_points))
        .collect()
}

proptest! {
    #[test]
    fn empty_criteria_pass_through(data in dataset_strategy()) {
        let view = filter(&data, &FilterCriteria::new());
        let rows: Vec<&Record> = data.iter().collect();
        prop_assert_eq!(view.rows(), rows.as_slice());
    }

    #[test]
    fn filter_is_idempotent(data in dataset_strategy(), criteria in criteria_strategy()) {
        let once = filter(&data, &criteria);
        let twice = once.refine(&criteria);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn aggregate_ignores_row_order(
        (rows, shuffled) in prop::collection::vec(record_strategy(), 0..30)
            .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        prop_assert_eq!(as_map(&aggregate(&rows)), as_map(&aggregate(&shuffled)));
    }

    #[test]
    fn aggregate_conserves_total(data in dataset_strategy(), criteria in criteria_strategy()) {
        let view = filter(&data, &criteria);
        let expected: f64 = view.iter().map(Record::points).sum();
        let actual: f64 = aggregate(view.iter()).iter().map(|row| row.total_points).sum();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn aggregate_names_are_exactly_view_names(
        data in dataset_strategy(),
        criteria in criteria_strategy(),
    ) {
        let view = filter(&data, &criteria);
        let mut view_names: Vec<&str> = view.iter().map(Record::name).collect();
        view_names.sort_unstable();
        view_names.dedup();
        let rows = aggregate(view.iter());
        let mut grouped: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        grouped.sort_unstable();
        prop_assert_eq!(view_names, grouped);
    }

    #[test]
    fn top_n_length_and_order(data in dataset_strategy(), n in 0usize..10) {
        let rows = aggregate(&data);
        let top = top_n(&rows, n);
        prop_assert_eq!(top.len(), n.min(rows.len()));
        prop_assert!(top.windows(2).all(|pair| pair[0].total_points >= pair[1].total_points));
        if let Some(floor) = top.last() {
            let included = as_map(&top);
            for row in rows.iter().filter(|row| !included.contains_key(&row.name)) {
                prop_assert!(row.total_points <= floor.total_points);
            }
        }
    }
}
