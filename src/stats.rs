//! Stats module for computing user statistics
//!
//! A [`StatsEngine`] runs every query in its [`QueryRegistry`] over a dataset
//! and collects the results into a timestamped [`Report`].

mod engine;
pub mod query;
mod registry;
mod types;

// Re-export public types
pub use engine::StatsEngine;
pub use query::StatQuery;
pub use registry::QueryRegistry;
pub use types::{Report, StatItem, StatResult};
