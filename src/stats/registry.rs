//! Set of queries to run for a report

use std::collections::BTreeSet;

use super::query::StatQuery;

/// Registered queries, deduplicated by identity
///
/// Iteration follows the declaration order of [`StatQuery`] so repeated runs
/// over the same data render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRegistry {
    queries: BTreeSet<StatQuery>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query; returns false if it was already registered
    pub fn insert(&mut self, query: StatQuery) -> bool {
        self.queries.insert(query)
    }

    /// Ensures every built-in query is registered
    ///
    /// Safe to call repeatedly.
    pub fn add_default_queries(&mut self) {
        self.queries.extend(StatQuery::DEFAULTS);
    }

    pub fn contains(&self, query: &StatQuery) -> bool {
        self.queries.contains(query)
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatQuery> {
        self.queries.iter()
    }
}
