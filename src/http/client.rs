//! HTTP client that fetches a listing exactly once and decodes it strictly.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::{FetchError, ResolveError};
use crate::listing::FetchListing;

/// HTTP client for single-shot listing requests. Failures are never retried.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and returns the full response body.
    /// Any non-2xx status is an error.
    #[tracing::instrument(skip(self))]
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}...", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", url, status);
            return Err(FetchError::from_status(url, status));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(body.to_vec())
    }

    /// Performs a GET request and decodes the body as UTF-8.
    /// Invalid UTF-8 is an error rather than being replaced.
    #[tracing::instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String, ResolveError> {
        let body = self.get_bytes(url).await?;
        String::from_utf8(body).map_err(|source| ResolveError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl FetchListing for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String, ResolveError> {
        self.get_text(url).await
    }
}
