//! Lodestone HTTP Client
//!
//! Client-side workshop helpers for the hosted Lodestone vector database.
//!
//! This crate provides a thin HTTP client for the hosted service plus the two
//! orchestration helpers the workshop notebooks rely on: a cascading resolver
//! that looks up a record by progressively relaxing its match criteria, and a
//! poller that awaits the completion of a long-running job.
//!
//! # Example
//!
//! ```no_run
//! use lodestone_client::{CascadingResolver, JobPoller, LodestoneClient};
//! use lodestone_client::JobHandle;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = LodestoneClient::new("https://demo.lodestone.example");
//!
//!     // Resolve a record by title, loosening the match until something hits
//!     let resolver = CascadingResolver::new(client.collection("Movie"));
//!     let resolution = resolver.resolve("Rogue One").await?;
//!     println!("resolved: {:?}", resolution);
//!
//!     // Await a long-running job
//!     let outcome = JobPoller::new()
//!         .await_completion(&client, &JobHandle::from("agent-workflow-17"))
//!         .await?;
//!     println!("job took {:.2} seconds", outcome.total_secs);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
mod jobs;
pub mod poller;
mod records;
pub mod resolver;
pub mod traits;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use error::{ClientError, Result};
pub use lodestone_core::domain::job::{JobHandle, JobState, JobStatus, PollOutcome};
pub use lodestone_core::domain::record::{RecordHit, Resolution};
pub use lodestone_core::dto::query::MatchQuery;
pub use poller::JobPoller;
pub use records::CollectionClient;
pub use resolver::CascadingResolver;
pub use traits::{RecordStore, StatusSource};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the hosted Lodestone service
///
/// Holds the base URL, an optional API key for the hosted cluster, and the
/// underlying HTTP client. Endpoint methods are grouped by concern:
/// - Record queries, scoped per collection (see [`CollectionClient`])
/// - Job status fetches (see [`traits::StatusSource`])
#[derive(Debug, Clone)]
pub struct LodestoneClient {
    /// Base URL of the hosted service (e.g., "https://demo.lodestone.example")
    base_url: String,
    /// Bearer token for authenticated clusters
    api_key: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl LodestoneClient {
    /// Create a new client for an unauthenticated service
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the hosted service
    ///
    /// # Example
    /// ```
    /// use lodestone_client::LodestoneClient;
    ///
    /// let client = LodestoneClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the hosted service
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            client,
        }
    }

    /// Attach an API key, sent as a bearer token on every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build a client from a [`Config`]
    pub fn from_config(config: &Config) -> Self {
        let client = Self::new(config.url.clone());
        match &config.api_key {
            Some(key) => client.with_api_key(key.clone()),
            None => client,
        }
    }

    /// Get the base URL of the hosted service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request plumbing
    // =============================================================================

    /// Start a GET request with auth applied
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(url))
    }

    /// Start a POST request with auth applied
    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(url))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LodestoneClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = LodestoneClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = LodestoneClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_from_config_carries_api_key() {
        let config = Config::new("https://demo.lodestone.example/").with_api_key("secret");
        let client = LodestoneClient::from_config(&config);
        assert_eq!(client.base_url(), "https://demo.lodestone.example");
        assert_eq!(client.api_key.as_deref(), Some("secret"));
    }
}
