//! Random User Generator HTTP client
//!
//! Uses reqwest for HTTP on the tokio runtime. One GET per batch; no retries.

use std::time::Duration;

use reqwest::Client;

use super::{FetchError, UserSource, parse_random_users};
use crate::config::ProviderConfig;
use crate::model::User;

#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: Client,
    base_url: String,
    nationality: String,
}

impl RandomUserClient {
    pub fn new(base_url: String, nationality: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            nationality,
        })
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, FetchError> {
        Self::new(
            config.base_url.clone(),
            config.nationality.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Fetches `count` users
    ///
    /// # Returns
    /// * `Ok(users)` - a non-empty user list
    /// * `Err(FetchError::Api)` - non-success status
    /// * `Err(FetchError::Parse | MissingResults)` - unusable body
    /// * `Err(FetchError::Network)` - transport failure
    pub async fn fetch(&self, count: u32) -> Result<Vec<User>, FetchError> {
        log::info!(
            "Requesting {} users from {} (nat={})",
            count,
            self.base_url,
            self.nationality
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("nat", self.nationality.clone()),
                ("results", count.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            log::warn!("User generator answered HTTP {}", code);
            return Err(FetchError::Api { code });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let users = parse_random_users(&body)?;
        log::debug!("Received {} users ({} bytes)", users.len(), body.len());
        Ok(users)
    }
}

impl UserSource for RandomUserClient {
    async fn fetch_users(&self, count: u32) -> Result<Vec<User>, FetchError> {
        self.fetch(count).await
    }
}
