use std::collections::BTreeSet;

use crate::Record;

/// User-selected constraint on names and platforms.
///
/// An empty set leaves that field unconstrained; both sets must be satisfied
/// when both are populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub names: BTreeSet<String>,
    #[serde(default)]
    pub platforms: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms.extend(platforms.into_iter().map(Into::into));
        self
    }

    /// True when neither field constrains the selection.
    pub fn is_unconstrained(&self) -> bool {
        self.names.is_empty() && self.platforms.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        (self.names.is_empty() || self.names.contains(record.name()))
            && (self.platforms.is_empty() || self.platforms.contains(record.platform()))
    }
}
