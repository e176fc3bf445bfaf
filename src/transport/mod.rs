//! HTTP transport for tourism API calls
//!
//! Executes a single GET against a fully-formed URL and hands back the raw
//! body text. The real implementation talks to the network; the mock serves
//! canned bodies for tests.

pub mod client;
pub mod mock;

pub use client::HttpTransport;
pub use mock::MockTransport;

use crate::Result;
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String>;
}
