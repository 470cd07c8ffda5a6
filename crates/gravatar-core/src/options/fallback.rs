//! Image served when no gravatar is registered (`d=` parameter).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback images the service documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackKind {
    /// The service's own logo. Requests for it carry no `d=` parameter.
    ServiceIcon,
    /// Respond with HTTP 404 instead of an image.
    Http404,
    /// Generic silhouette ("mystery man").
    MysteryMan,
    Identicon,
    MonsterId,
    Wavatar,
    Retro,
    /// Transparent PNG.
    Blank,
}

impl FallbackKind {
    pub const ALL: [FallbackKind; 8] = [
        FallbackKind::ServiceIcon,
        FallbackKind::Http404,
        FallbackKind::MysteryMan,
        FallbackKind::Identicon,
        FallbackKind::MonsterId,
        FallbackKind::Wavatar,
        FallbackKind::Retro,
        FallbackKind::Blank,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FallbackKind::ServiceIcon => "",
            FallbackKind::Http404 => "404",
            FallbackKind::MysteryMan => "mm",
            FallbackKind::Identicon => "identicon",
            FallbackKind::MonsterId => "monsterid",
            FallbackKind::Wavatar => "wavatar",
            FallbackKind::Retro => "retro",
            FallbackKind::Blank => "blank",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FallbackKind::ServiceIcon => "service-icon",
            FallbackKind::Http404 => "http-404",
            FallbackKind::MysteryMan => "mystery-silhouette",
            FallbackKind::Identicon => "identicon",
            FallbackKind::MonsterId => "monster-id",
            FallbackKind::Wavatar => "wavatar",
            FallbackKind::Retro => "retro",
            FallbackKind::Blank => "blank",
        }
    }

    fn lookup(s: &str) -> Option<FallbackKind> {
        FallbackKind::ALL
            .into_iter()
            .find(|k| k.code().eq_ignore_ascii_case(s) || k.name().eq_ignore_ascii_case(s))
    }
}

/// A documented fallback kind, or a raw token passed through verbatim.
///
/// `Custom` covers values the service accepts that are not listed above,
/// including an already URL-encoded image URL. It is never encoded here.
///
/// Text is stored and read back by its wire code, so a `Custom` token equal
/// to a known code or name (`"404"`, `"service-icon"`) comes back from the
/// config file as the `Known` kind. Build tokens with [`FallbackImage::custom`]
/// to get the canonical value up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FallbackImage {
    Known(FallbackKind),
    Custom(String),
}

impl FallbackImage {
    pub const SERVICE_ICON: FallbackImage = FallbackImage::Known(FallbackKind::ServiceIcon);
    pub const HTTP_404: FallbackImage = FallbackImage::Known(FallbackKind::Http404);

    /// Canonical value for `token`: a known code or name becomes `Known`,
    /// anything else becomes a trimmed `Custom` token.
    pub fn custom(token: impl Into<String>) -> Self {
        FallbackImage::from(token.into())
    }

    /// Value sent as the `d` parameter.
    pub fn code(&self) -> &str {
        match self {
            FallbackImage::Known(kind) => kind.code(),
            FallbackImage::Custom(token) => token,
        }
    }
}

impl Default for FallbackImage {
    fn default() -> Self {
        FallbackImage::HTTP_404
    }
}

impl From<FallbackKind> for FallbackImage {
    fn from(kind: FallbackKind) -> Self {
        FallbackImage::Known(kind)
    }
}

/// Known codes and names map to `Known`; anything else (including the empty
/// string) is kept as a trimmed `Custom` token.
impl From<String> for FallbackImage {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            if let Some(kind) = FallbackKind::lookup(trimmed) {
                return FallbackImage::Known(kind);
            }
        }
        if trimmed.len() == s.len() {
            FallbackImage::Custom(s)
        } else {
            FallbackImage::Custom(trimmed.to_string())
        }
    }
}

impl From<&str> for FallbackImage {
    fn from(s: &str) -> Self {
        FallbackImage::from(s.to_string())
    }
}

impl From<FallbackImage> for String {
    fn from(f: FallbackImage) -> Self {
        match f {
            FallbackImage::Known(FallbackKind::ServiceIcon) => {
                FallbackKind::ServiceIcon.name().to_string()
            }
            other => other.code().to_string(),
        }
    }
}

impl FromStr for FallbackImage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FallbackImage::from(s))
    }
}

impl fmt::Display for FallbackImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
