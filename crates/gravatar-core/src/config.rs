use crate::options::{FallbackImage, Rating};
use crate::request::ImageRequestConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Stored request preferences, loaded from `~/.config/gravatar/config.toml`.
///
/// Every field is optional; missing fields fall back to the request defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Image size in pixels (1..=2048).
    #[serde(default)]
    pub size: Option<u32>,
    /// Rating wire code or name, e.g. "pg" or "parental-guidance".
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Fallback image code, name, or custom token.
    #[serde(default)]
    pub fallback: Option<FallbackImage>,
    /// Request over HTTPS.
    #[serde(default)]
    pub secure: Option<bool>,
}

impl Preferences {
    /// Applies the stored values on top of the default request config.
    pub fn to_request(&self) -> Result<ImageRequestConfig> {
        let mut cfg = ImageRequestConfig::default();
        if let Some(size) = self.size {
            cfg = cfg.with_size(size)?;
        }
        if let Some(rating) = self.rating {
            cfg = cfg.with_rating(rating);
        }
        if let Some(fallback) = &self.fallback {
            cfg = cfg.with_fallback(fallback.clone());
        }
        if let Some(secure) = self.secure {
            cfg = cfg.with_secure(secure);
        }
        Ok(cfg)
    }

    /// Values set in `other` win over values set in `self`.
    pub fn merge(&self, other: &Preferences) -> Preferences {
        Preferences {
            size: other.size.or(self.size),
            rating: other.rating.or(self.rating),
            fallback: other.fallback.clone().or_else(|| self.fallback.clone()),
            secure: other.secure.or(self.secure),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gravatar")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load preferences from the default location, creating an empty file if none exists.
pub fn load_or_init() -> Result<Preferences> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        let default_prefs = Preferences::default();
        let toml = toml::to_string_pretty(&default_prefs)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_prefs);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let prefs: Preferences =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(prefs)
}
