//! Directory listing access and version-token extraction.
//!
//! Fetching and extraction are separate traits so the scraping strategy can
//! be replaced without touching resolution or sorting.

use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::ResolveError;

// Version directories appear as anchor text right after the tag: `<a href="3.8.5/">3.8.5/</a>`
static ANCHOR_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">(\d+((\.|-)(\d|\w)+)+)").expect("Invalid regex"));

/// Retrieves a directory listing as text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchListing: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ResolveError>;
}

/// Pulls version tokens out of a listing document.
#[cfg_attr(test, mockall::automock)]
pub trait VersionExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Regex extractor for Apache-style `mod_autoindex` pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorTextExtractor;

impl VersionExtractor for AnchorTextExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        extract_version_tokens(html)
    }
}

/// Returns every version token that directly follows a `>`, in document order.
pub fn extract_version_tokens(html: &str) -> Vec<String> {
    ANCHOR_VERSION_PATTERN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
