//! Prescripto backend client

pub mod error;
pub mod login;

use error::ClientError;
use prescripto_core::AppConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Client for the public admin API
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    config: AppConfig,
}

impl AdminClient {
    /// Create a new client with default configuration
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    /// Create a new client builder
    pub fn builder() -> AdminClientBuilder {
        AdminClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.backend_url
    }

    /// Configuration the client was built with
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Create a request builder for `path` under the backend URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let text = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, text))
        }
    }
}

/// Builder for AdminClient
#[derive(Default)]
pub struct AdminClientBuilder {
    config: Option<AppConfig>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AdminClientBuilder {
    /// Set the application configuration
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AdminClient, ClientError> {
        let mut config = self
            .config
            .ok_or_else(|| ClientError::Configuration("config is required".into()))?;

        // Ensure base_url ends without a trailing slash
        config.backend_url = config.backend_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| concat!("prescripto-admin/", env!("CARGO_PKG_VERSION")).into()),
        );

        let client = client_builder.build()?;

        Ok(AdminClient { client, config })
    }
}
