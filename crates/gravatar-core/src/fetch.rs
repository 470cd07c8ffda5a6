//! Blocking avatar download over HTTP(S).
//!
//! Uses the curl crate (libcurl). Each call owns one `Easy` handle for its
//! duration; the handle is dropped on every return path. There is no retry
//! or timeout policy here; callers that need one wrap [`ImageFetcher::fetch`].

use crate::error::{GravatarError, TransportError};
use crate::request::ImageRequestConfig;

/// Result of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response body of a successful request.
    Image(Vec<u8>),
    /// The service has no image for this digest (HTTP 404 or 410).
    Absent,
}

impl FetchOutcome {
    pub fn into_image(self) -> Option<Vec<u8>> {
        match self {
            FetchOutcome::Image(bytes) => Some(bytes),
            FetchOutcome::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FetchOutcome::Absent)
    }
}

/// Downloads avatar images.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFetcher;

impl ImageFetcher {
    pub fn new() -> Self {
        Self
    }

    /// GETs `url` and returns the body, or [`FetchOutcome::Absent`] when the
    /// server reports the resource missing.
    ///
    /// Follows redirects. Runs in the current thread; call from
    /// `spawn_blocking` if used from async code.
    pub fn fetch(&self, url: &str) -> Result<FetchOutcome, GravatarError> {
        url::Url::parse(url).map_err(|e| GravatarError::transport(url, e))?;

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        let code = match perform_get(&mut easy, url, &mut body) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!("GET {} failed: {}", url, e);
                return Err(GravatarError::transport(url, e));
            }
        };

        match code {
            200..=299 => {
                tracing::debug!("GET {} returned {} bytes", url, body.len());
                Ok(FetchOutcome::Image(body))
            }
            404 | 410 => {
                tracing::debug!("GET {} returned HTTP {}: no gravatar", url, code);
                Ok(FetchOutcome::Absent)
            }
            _ => {
                tracing::warn!("GET {} returned HTTP {}", url, code);
                Err(GravatarError::transport(url, TransportError::Http(code)))
            }
        }
    }

    /// Builds the URL for `identifier` with `config` and fetches it.
    pub fn download(
        &self,
        config: &ImageRequestConfig,
        identifier: &str,
    ) -> Result<FetchOutcome, GravatarError> {
        self.fetch(&config.build_url(identifier))
    }
}

/// Runs the transfer, appending the response body to `body`, and returns the
/// final HTTP status.
fn perform_get(
    easy: &mut curl::easy::Easy,
    url: &str,
    body: &mut Vec<u8>,
) -> Result<u32, curl::Error> {
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    easy.response_code()
}
