//! Error taxonomy for release resolution.

use reqwest::StatusCode;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failure to retrieve the directory listing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
    /// HTTP 404
    #[error("not found: {url}")]
    NotFound { url: String },
    /// HTTP 401 or 403
    #[error("access forbidden: {url} (HTTP {status})")]
    Forbidden { url: String, status: StatusCode },
    /// Any other 4xx status
    #[error("HTTP {status} client error from {url}")]
    ClientError { url: String, status: StatusCode },
    /// 5xx status
    #[error("HTTP {status} server error from {url}")]
    ServerError { url: String, status: StatusCode },
    /// A non-success status outside the 4xx/5xx ranges, e.g. an unfollowed redirect
    #[error("unexpected HTTP {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },
}

impl FetchError {
    /// Classifies a non-success response status.
    pub fn from_status(url: &str, status: StatusCode) -> Self {
        let url = url.to_string();
        match status {
            StatusCode::NOT_FOUND => FetchError::NotFound { url },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                FetchError::Forbidden { url, status }
            }
            s if s.is_client_error() => FetchError::ClientError { url, status },
            s if s.is_server_error() => FetchError::ServerError { url, status },
            _ => FetchError::UnexpectedStatus { url, status },
        }
    }
}

/// Errors returned while resolving the latest release.
///
/// None of these are recovered from; they all surface to the caller.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to fetch directory listing")]
    Fetch(#[from] FetchError),

    #[error("directory listing at {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("no version directories found in listing at {url}")]
    NoVersionsFound { url: String },
}
