//! Row selection over a [`Dataset`].

use alumni_model::{Dataset, FilterCriteria, Record};

/// Records selected from a dataset, in their original relative order.
///
/// The view borrows the dataset's rows; the dataset itself is never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.rows.iter().copied()
    }

    /// Apply `criteria` again to the rows already in this view.
    #[must_use]
    pub fn refine(&self, criteria: &FilterCriteria) -> FilteredView<'a> {
        select(self.iter(), criteria)
    }
}

impl<'a> FromIterator<&'a Record> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Keep the records that satisfy `criteria`.
///
/// Empty criteria pass every record through.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    select(dataset.iter(), criteria)
}

fn select<'a>(
    rows: impl Iterator<Item = &'a Record>,
    criteria: &FilterCriteria,
) -> FilteredView<'a> {
    rows.filter(|record| criteria.matches(record)).collect()
}
