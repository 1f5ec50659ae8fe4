//! Find the newest Apache Maven release in a distribution index and build
//! the download URLs of its binary archives.

pub mod config;
pub mod error;
pub mod http;
pub mod listing;
pub mod output;
pub mod resolver;
pub mod version;

pub use config::{DEFAULT_BASE_URL, ResolverConfig};
pub use error::{FetchError, ResolveError};
pub use listing::{AnchorTextExtractor, FetchListing, VersionExtractor, extract_version_tokens};
pub use output::{OutputFormat, render};
pub use resolver::{MavenBinaries, VersionResolver, binary_urls, resolve_latest_binaries};
pub use version::VersionOrder;
