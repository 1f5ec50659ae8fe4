//! Latest-release resolution against a Maven distribution index.
//!
//! The flow is linear: fetch the listing once, extract version tokens, sort
//! them newest first and build the binary archive URLs for the winner.

use log::{debug, info};
use serde::Serialize;

use crate::config::{ResolverConfig, normalize_base_url};
use crate::error::ResolveError;
use crate::http::HttpClient;
use crate::listing::{AnchorTextExtractor, FetchListing, VersionExtractor};
use crate::version::{VersionOrder, select_latest};

/// Download URLs of the binary archives for one release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MavenBinaries {
    pub version: String,
    pub tar_gz: String,
    pub zip: String,
}

impl MavenBinaries {
    /// The archive URLs, tar.gz first.
    pub fn urls(&self) -> [&str; 2] {
        [&self.tar_gz, &self.zip]
    }
}

impl From<MavenBinaries> for (String, String) {
    fn from(binaries: MavenBinaries) -> Self {
        (binaries.tar_gz, binaries.zip)
    }
}

/// Builds `{base}/{version}/binaries/apache-maven-{version}-bin.{tar.gz,zip}`.
pub fn binary_urls(base_url: &str, version: &str) -> MavenBinaries {
    let dir = format!("{}/{}/binaries", normalize_base_url(base_url), version);
    MavenBinaries {
        version: version.to_string(),
        tar_gz: format!("{dir}/apache-maven-{version}-bin.tar.gz"),
        zip: format!("{dir}/apache-maven-{version}-bin.zip"),
    }
}

/// Resolves the newest release listed under a base URL.
pub struct VersionResolver<L, X = AnchorTextExtractor> {
    listing: L,
    extractor: X,
    base_url: String,
    order: VersionOrder,
}

impl VersionResolver<HttpClient> {
    /// Creates a resolver that talks HTTP with the settings from `config`.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ResolveError> {
        let client = config.build_client()?;
        Ok(Self::new(HttpClient::new(client), config.base_url()).with_order(config.order))
    }
}

impl<L: FetchListing> VersionResolver<L> {
    pub fn new(listing: L, base_url: &str) -> Self {
        Self {
            listing,
            extractor: AnchorTextExtractor,
            base_url: normalize_base_url(base_url).to_string(),
            order: VersionOrder::default(),
        }
    }
}

impl<L: FetchListing, X: VersionExtractor> VersionResolver<L, X> {
    /// Swaps the token extraction strategy.
    pub fn with_extractor<Y: VersionExtractor>(self, extractor: Y) -> VersionResolver<L, Y> {
        VersionResolver {
            listing: self.listing,
            extractor,
            base_url: self.base_url,
            order: self.order,
        }
    }

    pub fn with_order(mut self, order: VersionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the listing and returns the binaries of the newest version.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self) -> Result<MavenBinaries, ResolveError> {
        let body = self.listing.fetch(&self.base_url).await?;

        let versions = self.extractor.extract(&body);
        debug!("Found {} version tokens in {}", versions.len(), self.base_url);

        let latest = select_latest(&versions, self.order)
            .ok_or_else(|| ResolveError::NoVersionsFound {
                url: self.base_url.clone(),
            })?;
        info!("Latest version at {} is {}", self.base_url, latest);

        Ok(binary_urls(&self.base_url, latest))
    }

    /// Same as [`resolve`](Self::resolve), returned as a `(tar.gz, zip)` pair.
    pub async fn resolve_latest_binaries(&self) -> Result<(String, String), ResolveError> {
        Ok(self.resolve().await?.into())
    }
}

/// Resolves the `(tar.gz, zip)` URLs of the newest release under `base_url`
/// using default settings.
pub async fn resolve_latest_binaries(base_url: &str) -> Result<(String, String), ResolveError> {
    VersionResolver::from_config(&ResolverConfig::new(base_url))?
        .resolve_latest_binaries()
        .await
}
