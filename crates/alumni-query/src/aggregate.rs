use std::collections::HashMap;

use alumni_model::{AggregateRow, Record};

/// Sum points per distinct name.
///
/// Groups are emitted in the order their name first appears in `rows`, so the
/// output is reproducible for a given input order. An empty input yields an
/// empty output.
pub fn aggregate<'a>(rows: impl IntoIterator<Item = &'a Record>) -> Vec<AggregateRow> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<AggregateRow> = Vec::new();
    for record in rows {
        match positions.get(record.name()).copied() {
            Some(index) => totals[index].total_points += record.points(),
            None => {
                positions.insert(record.name(), totals.len());
                totals.push(AggregateRow::new(record.name(), record.points()));
            }
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, points: f64) -> Record {
        Record::new(1, name, "X", points).unwrap()
    }

    #[test]
    fn groups_follow_first_appearance() {
        let rows = vec![
            record("Zoya", 1.0),
            record("Arun", 2.0),
            record("Zoya", 3.0),
            record("Bela", -4.0),
        ];
        let totals = aggregate(&rows);
        assert_eq!(
            totals,
            vec![
                AggregateRow::new("Zoya", 4.0),
                AggregateRow::new("Arun", 2.0),
                AggregateRow::new("Bela", -4.0),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let rows: Vec<Record> = Vec::new();
        assert!(aggregate(&rows).is_empty());
    }

    #[test]
    fn decimal_points_are_summed() {
        let rows = vec![record("A", 0.5), record("A", 1.25)];
        assert_eq!(aggregate(&rows), vec![AggregateRow::new("A", 1.75)]);
    }
}
