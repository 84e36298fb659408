//! Runs registered queries over a dataset and assembles the report

use chrono::Local;

use crate::model::User;

use super::query::StatQuery;
use super::registry::QueryRegistry;
use super::types::Report;

/// Statistics engine
///
/// Holds its own registry; build one per request rather than sharing it.
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    registry: QueryRegistry,
}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with every built-in query registered
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_default_queries();
        engine
    }

    pub fn add_default_queries(&mut self) {
        self.registry.add_default_queries();
    }

    pub fn add_query(&mut self, query: StatQuery) -> bool {
        self.registry.insert(query)
    }

    pub fn registry(&self) -> &QueryRegistry {
        &self.registry
    }

    /// Evaluates every registered query once over `users`
    ///
    /// Never fails; ratios over an empty dataset are reported as 0.
    pub fn get_statistics(&self, users: &[User]) -> Report {
        log::debug!(
            "Computing {} statistics over {} users",
            self.registry.len(),
            users.len()
        );

        let stats = self
            .registry
            .iter()
            .map(|query| query.evaluate(users))
            .collect();

        Report {
            timestamp: Local::now().fixed_offset(),
            user_count: users.len(),
            stats,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
