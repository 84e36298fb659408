//! Type definitions for user statistics

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One line of a statistic: a label and its fraction of the population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub description: String,
    /// Fraction in `[0, 1]`, not multiplied by 100
    pub pct: f64,
}

impl StatItem {
    pub fn new(description: impl Into<String>, pct: f64) -> Self {
        StatItem {
            description: description.into(),
            pct,
        }
    }
}

impl fmt::Display for StatItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.description, self.pct * 100.0)
    }
}

/// Output of a single query
///
/// Item order is significant for ranking queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatResult {
    pub name: String,
    pub items: Vec<StatItem>,
}

impl StatResult {
    pub fn new(name: impl Into<String>, items: Vec<StatItem>) -> Self {
        StatResult {
            name: name.into(),
            items,
        }
    }

    /// Result holding exactly one item described by the result name
    pub fn single(name: &str, pct: f64) -> Self {
        StatResult::new(name, vec![StatItem::new(name, pct)])
    }
}

/// Everything computed for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub timestamp: DateTime<FixedOffset>,
    pub user_count: usize,
    pub stats: Vec<StatResult>,
}

impl Report {
    /// Looks up a statistic by its name
    pub fn stat(&self, name: &str) -> Option<&StatResult> {
        self.stats.iter().find(|s| s.name == name)
    }
}
