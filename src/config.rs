//! Resolver configuration and defaults.

use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::error::FetchError;
use crate::version::VersionOrder;

/// Apache Maven 3 distribution index.
pub const DEFAULT_BASE_URL: &str = "https://archive.apache.org/dist/maven/maven-3/";

const USER_AGENT: &str = concat!("mvn-latest/", env!("CARGO_PKG_VERSION"));

/// Strips trailing slashes so path segments can be appended with a single `/`.
pub fn normalize_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub base_url: String,
    pub order: VersionOrder,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ResolverConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            order: VersionOrder::default(),
            timeout: None,
        }
    }

    pub fn with_order(mut self, order: VersionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        normalize_base_url(&self.base_url)
    }

    /// Builds the HTTP client used for the listing request.
    pub fn build_client(&self) -> Result<Client, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            debug!("Using request timeout of {:?}", timeout);
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
