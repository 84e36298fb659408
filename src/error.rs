use thiserror::Error;

use crate::format::FormatError;
use crate::provider::FetchError;

#[derive(Debug, Error)]
pub enum UserStatsError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("No user records supplied: 'results' is missing or empty")]
    EmptyDataset,

    #[error("Failed to fetch users: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to render report: {0}")]
    Format(#[from] FormatError),

    #[error("Invalid bind address {address}: {message}")]
    InvalidAddress { address: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
