//! Query engine for the alumni dashboard.
//!
//! The [`AlumniQueryEngine`] owns a read-only [`Dataset`] and answers each
//! query with one filter pass, from which it derives:
//!
//! - **Participant count**: number of matching records
//! - **Points by name**: per-alumnus totals in first-appearance order
//! - **Top N**: the highest totals, descending, ties in first-appearance order
//!
//! Queries take `&self` and hold no state between calls.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use alumni_model::{AggregateRow, Dataset, FilterCriteria};

use crate::aggregate::aggregate;
use crate::filter::filter;
use crate::rank::{DEFAULT_TOP_N, top_n};

/// Options controlling how results are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// How many rows the ranking keeps.
    pub top_n: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Results derived from a non-empty selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub participant_count: usize,
    pub by_name: Vec<AggregateRow>,
    pub top: Vec<AggregateRow>,
}

/// Outcome of a query: either nothing matched, or a set of results.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Empty,
    Matched(QueryResult),
}

impl QueryOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn participant_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Matched(result) => result.participant_count,
        }
    }

    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            Self::Empty => None,
            Self::Matched(result) => Some(result),
        }
    }

    /// Flatten into the serializable report shape.
    pub fn report(&self) -> QueryReport {
        match self {
            Self::Empty => QueryReport {
                participant_count: 0,
                is_empty: true,
                by_name: Vec::new(),
                top: Vec::new(),
            },
            Self::Matched(result) => QueryReport {
                participant_count: result.participant_count,
                is_empty: false,
                by_name: result.by_name.clone(),
                top: result.top.clone(),
            },
        }
    }
}

/// Machine-readable view of a [`QueryOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    pub participant_count: usize,
    pub is_empty: bool,
    pub by_name: Vec<AggregateRow>,
    pub top: Vec<AggregateRow>,
}

/// Filter, aggregate and rank over a held dataset.
#[derive(Debug, Clone, Default)]
pub struct AlumniQueryEngine {
    dataset: Dataset,
    options: QueryOptions,
}

impl AlumniQueryEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            options: QueryOptions::default(),
        }
    }

    /// Sets the query options.
    #[must_use]
    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// Replace the held dataset. Queries never reload data on their own.
    pub fn reload(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    /// Run one query against the held dataset.
    pub fn run(&self, criteria: &FilterCriteria) -> QueryOutcome {
        let start = Instant::now();
        let view = filter(&self.dataset, criteria);
        if view.is_empty() {
            debug!(
                dataset_rows = self.dataset.len(),
                name_filters = criteria.names.len(),
                platform_filters = criteria.platforms.len(),
                "query matched no records"
            );
            return QueryOutcome::Empty;
        }
        let by_name = aggregate(view.iter());
        let top = top_n(&by_name, self.options.top_n);
        debug!(
            dataset_rows = self.dataset.len(),
            matched_rows = view.len(),
            groups = by_name.len(),
            ranked = top.len(),
            duration_us = start.elapsed().as_micros(),
            "query complete"
        );
        QueryOutcome::Matched(QueryResult {
            participant_count: view.len(),
            by_name,
            top,
        })
    }
}
