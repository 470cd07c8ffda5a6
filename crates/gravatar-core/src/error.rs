//! Error taxonomy for request configuration and image download.
//!
//! "No gravatar registered" is not an error; see [`crate::fetch::FetchOutcome`].

use thiserror::Error;

/// Errors raised by the library.
#[derive(Debug, Error)]
pub enum GravatarError {
    /// A preference was rejected at the moment it was set.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The image could not be requested at all.
    #[error("failed to fetch {url}")]
    TransportFailure {
        url: String,
        #[source]
        source: TransportError,
    },
}

/// Underlying cause of a [`GravatarError::TransportFailure`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URL did not parse.
    #[error("malformed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// libcurl reported an error (DNS, connect, reset, protocol).
    #[error(transparent)]
    Curl(#[from] curl::Error),

    /// Server answered with a status that is neither success nor "not found".
    #[error("HTTP {0}")]
    Http(u32),
}

impl GravatarError {
    pub(crate) fn transport(url: &str, source: impl Into<TransportError>) -> Self {
        GravatarError::TransportFailure {
            url: url.to_string(),
            source: source.into(),
        }
    }
}
