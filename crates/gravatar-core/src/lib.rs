//! Gravatar client: derives avatar URLs from email addresses and downloads
//! the images.
//!
//! ```no_run
//! use gravatar_core::{FallbackKind, ImageFetcher, ImageRequestConfig, Rating};
//!
//! let cfg = ImageRequestConfig::default()
//!     .with_size(50)?
//!     .with_rating(Rating::GeneralAudiences)
//!     .with_fallback(FallbackKind::Identicon);
//! let url = cfg.build_url("iHaveAn@email.com");
//! let image = ImageFetcher::new().fetch(&url)?;
//! # Ok::<(), gravatar_core::GravatarError>(())
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod hash;
pub mod logging;
pub mod options;
pub mod request;

pub use error::{GravatarError, TransportError};
pub use fetch::{FetchOutcome, ImageFetcher};
pub use hash::digest;
pub use options::{FallbackImage, FallbackKind, Rating};
pub use request::ImageRequestConfig;
