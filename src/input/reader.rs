use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::UserStatsError;
use crate::model::{RandomUserResults, User};

/// Reads a user submission from stdin or a file
pub struct InputReader;

impl InputReader {
    /// Read a payload from stdin or file path
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    ///
    /// # Returns
    /// * `Ok(Vec<User>)` - The submitted, non-empty user list
    /// * `Err(UserStatsError)` - Invalid JSON, no users, or an IO error
    pub fn read_users(path: Option<&Path>) -> Result<Vec<User>, UserStatsError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        parse_submission(&json_str)
    }
}

/// Parses a `{"results": [...]}` payload
///
/// A null, absent or empty `results` list is rejected as
/// [`UserStatsError::EmptyDataset`].
pub fn parse_submission(json_str: &str) -> Result<Vec<User>, UserStatsError> {
    let payload: RandomUserResults =
        serde_json::from_str(json_str).map_err(|e| UserStatsError::InvalidJson(e.to_string()))?;

    payload
        .into_non_empty_results()
        .ok_or(UserStatsError::EmptyDataset)
}
