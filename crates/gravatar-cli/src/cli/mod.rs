//! CLI for Gravatar URLs and downloads.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gravatar_core::config::{self, Preferences};
use gravatar_core::{FallbackImage, Rating};
use std::path::PathBuf;

use commands::{run_download, run_hash, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gravatar")]
#[command(about = "Build Gravatar URLs and download avatar images", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Request preferences; each flag overrides the value from config.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Image size in pixels (1-2048).
    #[arg(long, short = 's', value_name = "PX")]
    pub size: Option<u32>,

    /// Highest rating to allow: g, pg, r or x.
    #[arg(long, short = 'r')]
    pub rating: Option<Rating>,

    /// Fallback image: 404, mm, identicon, monsterid, wavatar, retro, blank,
    /// service-icon, or any other token the service accepts.
    #[arg(long, short = 'd')]
    pub fallback: Option<FallbackImage>,

    /// Use https.
    #[arg(long, conflicts_with = "insecure")]
    pub secure: bool,

    /// Use plain http, even if config.toml sets `secure = true`.
    #[arg(long)]
    pub insecure: bool,
}

impl RequestArgs {
    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            size: self.size,
            rating: self.rating,
            fallback: self.fallback.clone(),
            secure: if self.secure {
                Some(true)
            } else if self.insecure {
                Some(false)
            } else {
                None
            },
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the digest used as the avatar key for an email address.
    Hash {
        /// Email address.
        email: String,
    },

    /// Print the avatar URL for an email address.
    Url {
        /// Email address.
        email: String,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// Download the avatar image for an email address.
    Download {
        /// Email address.
        email: String,

        /// Output file (default: <digest>.jpg in the current directory).
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        request: RequestArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Hash { email } => run_hash(&email),
            CliCommand::Url { email, request } => {
                let prefs = load_preferences(&request)?;
                run_url(&prefs, &email)
            }
            CliCommand::Download {
                email,
                output,
                request,
            } => {
                let prefs = load_preferences(&request)?;
                run_download(&prefs, &email, output.as_deref())
            }
        }
    }
}

fn load_preferences(request: &RequestArgs) -> Result<Preferences> {
    let stored = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", stored);
    Ok(stored.merge(&request.to_preferences()))
}

#[cfg(test)]
mod tests;
