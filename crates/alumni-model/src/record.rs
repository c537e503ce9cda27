#![deny(unsafe_code)]

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::{ModelError, Result};

/// One engagement row: an alumnus, the platform the activity happened on, and
/// the points it earned.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Record {
    name: String,
    platform: String,
    points: f64,
}

impl Record {
    /// Build a validated record.
    ///
    /// `row` is the 1-based source row and only appears in error messages.
    /// Name and platform are trimmed; points may be zero or negative but must
    /// be finite.
    pub fn new(
        row: usize,
        name: impl Into<String>,
        platform: impl Into<String>,
        points: f64,
    ) -> Result<Self> {
        let name = name.into();
        let platform = platform.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyName { row });
        }
        let platform = platform.trim();
        if platform.is_empty() {
            return Err(ModelError::EmptyPlatform { row });
        }
        if !points.is_finite() {
            return Err(ModelError::NonFinitePoints { row, value: points });
        }
        Ok(Self {
            name: name.to_string(),
            platform: platform.to_string(),
            points,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn points(&self) -> f64 {
        self.points
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.platform, self.points)
    }
}

/// The full, immutable set of records for a session.
///
/// Cloning shares the underlying rows; nothing can mutate them after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Distinct names in first-appearance order.
    pub fn distinct_names(&self) -> Vec<&str> {
        distinct(self.records.iter().map(Record::name))
    }

    /// Distinct platforms in first-appearance order.
    pub fn distinct_platforms(&self) -> Vec<&str> {
        distinct(self.records.iter().map(Record::platform))
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
