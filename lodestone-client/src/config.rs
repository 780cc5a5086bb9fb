//! Client configuration
//!
//! The workshop environment carries the cluster location and credentials in
//! environment variables so notebooks never embed them.

/// Connection settings for the hosted service
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted service
    pub url: String,

    /// API key for authenticated clusters, if any
    pub api_key: Option<String>,
}

impl Config {
    /// Creates a configuration for an unauthenticated service
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
        }
    }

    /// Attaches an API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - LODESTONE_URL (required)
    /// - LODESTONE_API_KEY (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("LODESTONE_URL")
            .map_err(|_| anyhow::anyhow!("LODESTONE_URL environment variable not set"))?;

        let api_key = std::env::var("LODESTONE_API_KEY").ok();

        Ok(Self { url, api_key })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("url cannot be empty");
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("url must start with http:// or https://");
        }

        if let Some(key) = &self.api_key {
            if key.is_empty() {
                anyhow::bail!("api_key cannot be empty when set");
            }
        }

        Ok(())
    }
}
