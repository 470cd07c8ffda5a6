//! Request preferences and URL construction.
//!
//! An [`ImageRequestConfig`] is an immutable value: every `with_*` method
//! returns a new instance and leaves the receiver untouched, so configs can
//! be shared freely between threads.
//!
//! Produced URLs look like
//! `http://www.gravatar.com/avatar/<digest>.jpg[?s=..][&r=..][&d=..]`,
//! with parameters always in size, rating, fallback order and each one
//! present only when it differs from the value the service assumes.

use crate::error::GravatarError;
use crate::hash;
use crate::options::{FallbackImage, Rating};

const GRAVATAR_URL: &str = "http://www.gravatar.com/avatar/";
const GRAVATAR_HTTPS_URL: &str = "https://www.gravatar.com/avatar/";

pub const MIN_SIZE: u32 = 1;
pub const MAX_SIZE: u32 = 2048;

/// Image size in pixels when none is requested.
pub const DEFAULT_SIZE: u32 = 80;
pub const DEFAULT_RATING: Rating = Rating::GeneralAudiences;
/// Fallback used by a fresh config. Not the same as the value that omits
/// `d=` from the URL, which is [`FallbackImage::SERVICE_ICON`].
pub const DEFAULT_FALLBACK: FallbackImage = FallbackImage::HTTP_404;

/// Display preferences for one avatar request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRequestConfig {
    size: u32,
    rating: Rating,
    fallback: FallbackImage,
    secure: bool,
}

impl Default for ImageRequestConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            rating: DEFAULT_RATING,
            fallback: DEFAULT_FALLBACK,
            secure: false,
        }
    }
}

impl ImageRequestConfig {
    /// Builds a config from all four fields, validating `size`.
    pub fn new(
        size: u32,
        rating: Rating,
        fallback: impl Into<FallbackImage>,
        secure: bool,
    ) -> Result<Self, GravatarError> {
        check_size(size)?;
        Ok(Self {
            size,
            rating,
            fallback: fallback.into(),
            secure,
        })
    }

    /// Defaults, but requesting over HTTPS.
    pub fn secure() -> Self {
        Self {
            secure: true,
            ..Self::default()
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn fallback(&self) -> &FallbackImage {
        &self.fallback
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Returns a copy with the given size. Sizes outside 1..=2048 are
    /// rejected here rather than when the URL is built.
    pub fn with_size(&self, size: u32) -> Result<Self, GravatarError> {
        check_size(size)?;
        Ok(Self {
            size,
            ..self.clone()
        })
    }

    pub fn with_rating(&self, rating: Rating) -> Self {
        Self {
            rating,
            ..self.clone()
        }
    }

    pub fn with_fallback(&self, fallback: impl Into<FallbackImage>) -> Self {
        Self {
            fallback: fallback.into(),
            ..self.clone()
        }
    }

    pub fn with_secure(&self, secure: bool) -> Self {
        Self {
            secure,
            ..self.clone()
        }
    }

    /// Returns the avatar URL for `identifier` (an email address).
    pub fn build_url(&self, identifier: &str) -> String {
        let base = if self.secure {
            GRAVATAR_HTTPS_URL
        } else {
            GRAVATAR_URL
        };
        let url = format!(
            "{}{}.jpg{}",
            base,
            hash::digest(identifier),
            self.format_url_parameters()
        );
        tracing::debug!("built avatar url {}", url);
        url
    }

    fn format_url_parameters(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if self.size != DEFAULT_SIZE {
            params.push(format!("s={}", self.size));
        }
        if self.rating != DEFAULT_RATING {
            params.push(format!("r={}", self.rating.code()));
        }
        if self.fallback != FallbackImage::SERVICE_ICON {
            params.push(format!("d={}", self.fallback.code()));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

fn check_size(size: u32) -> Result<(), GravatarError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GravatarError::InvalidConfiguration(format!(
            "size must be between {MIN_SIZE} and {MAX_SIZE} pixels, got {size}"
        )))
    }
}
