//! userstats library - Summary statistics over Random User Generator payloads
//!
//! The binary is a thin shell over these modules; the HTTP service and the
//! CLI share the same engine, renderers and upstream client.

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod provider;
pub mod server;
pub mod stats;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::UserStatsError;
pub use format::OutputFormat;
pub use model::{RandomUserResults, User};
pub use stats::{Report, StatsEngine};
