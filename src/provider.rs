//! Upstream user source abstraction
//!
//! Defines the [`UserSource`] seam the HTTP layer fetches through, the
//! [`FetchError`] type, and the parser for Random User Generator payloads.

use std::future::Future;

use thiserror::Error;

use crate::model::{RandomUserResults, User};

mod random_user;

pub use random_user::RandomUserClient;

/// Errors that can occur while fetching users
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Transport failure (DNS, TLS, timeout, connection reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {code}")]
    Api { code: u16 },

    /// Body was not a valid generator payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Payload had no `results`, or an empty list
    #[error("Upstream returned no users")]
    MissingResults,
}

/// Something that can produce a batch of users on demand
pub trait UserSource: Send + Sync + 'static {
    fn fetch_users(&self, count: u32) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;
}

/// Parses a generator response body into its user list
///
/// Null, absent, or empty `results` are an error; the engine is never
/// invoked on such a payload.
pub fn parse_random_users(body: &str) -> Result<Vec<User>, FetchError> {
    let payload: RandomUserResults =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    payload
        .into_non_empty_results()
        .ok_or(FetchError::MissingResults)
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
