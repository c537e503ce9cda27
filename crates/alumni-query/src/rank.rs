use alumni_model::AggregateRow;

/// Number of rows the dashboard ranks by default.
pub const DEFAULT_TOP_N: usize = 5;

/// The `n` rows with the largest totals, highest first.
///
/// The sort is stable, so rows with equal totals keep their input order.
/// Fewer than `n` rows are returned unchanged apart from ordering.
pub fn top_n(rows: &[AggregateRow], n: usize) -> Vec<AggregateRow> {
    let mut ranked: Vec<&AggregateRow> = rows.iter().collect();
    ranked.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    ranked.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[(&str, f64)]) -> Vec<AggregateRow> {
        values
            .iter()
            .map(|(name, total)| AggregateRow::new(*name, *total))
            .collect()
    }

    #[test]
    fn ties_keep_input_order() {
        let input = rows(&[("A", 3.0), ("B", 9.0), ("C", 3.0), ("D", 3.0)]);
        let names: Vec<String> = top_n(&input, 3).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn short_input_is_not_padded() {
        let input = rows(&[("A", 1.0), ("B", 2.0)]);
        assert_eq!(top_n(&input, DEFAULT_TOP_N), rows(&[("B", 2.0), ("A", 1.0)]));
    }

    #[test]
    fn zero_n_is_empty() {
        let input = rows(&[("A", 1.0)]);
        assert!(top_n(&input, 0).is_empty());
    }

    #[test]
    fn negative_totals_rank_below_zero() {
        let input = rows(&[("A", -1.0), ("B", 0.0), ("C", -0.5)]);
        assert_eq!(top_n(&input, 2), rows(&[("B", 0.0), ("C", -0.5)]));
    }
}
