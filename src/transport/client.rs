use super::Transport;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport. Without a timeout a request may block indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::new_with_client(builder.build()?))
    }

    pub fn new_with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String> {
        // The query carries the service key, so only the path is logged.
        tracing::debug!("Sending GET request to {}", url.path());

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", url.path(), e);
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "Tour API returned status {} for {}; passing body through",
                status,
                url.path()
            );
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url.path(), e);
            e
        })?;

        Ok(body)
    }
}
