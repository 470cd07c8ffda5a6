//! `gravatar download` – fetch the avatar and write it to disk.

use anyhow::{Context, Result};
use gravatar_core::config::Preferences;
use gravatar_core::{hash, FetchOutcome, ImageFetcher};
use std::fs;
use std::path::{Path, PathBuf};

pub fn run_download(prefs: &Preferences, email: &str, output: Option<&Path>) -> Result<()> {
    let request = prefs.to_request()?;
    let url = request.build_url(email);
    tracing::info!("download {}", url);

    let outcome = ImageFetcher::new().fetch(&url)?;
    let download_dir = std::env::current_dir()?;
    let size = outcome_len(&outcome);
    let path = save_outcome(outcome, email, output, &download_dir)?;
    println!("{} bytes -> {}", size, path.display());
    Ok(())
}

/// Writes the image to `output`, or to `<digest>.jpg` under `download_dir`.
/// An absent image is an error so the command exits non-zero.
fn save_outcome(
    outcome: FetchOutcome,
    email: &str,
    output: Option<&Path>,
    download_dir: &Path,
) -> Result<PathBuf> {
    match outcome {
        FetchOutcome::Image(bytes) => {
            let path = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| download_dir.join(default_output(email)));
            fs::write(&path, &bytes).with_context(|| format!("write {}", path.display()))?;
            Ok(path)
        }
        FetchOutcome::Absent => anyhow::bail!("no gravatar registered for {}", email.trim()),
    }
}

fn outcome_len(outcome: &FetchOutcome) -> usize {
    match outcome {
        FetchOutcome::Image(bytes) => bytes.len(),
        FetchOutcome::Absent => 0,
    }
}

fn default_output(email: &str) -> PathBuf {
    PathBuf::from(format!("{}.jpg", hash::digest(email)))
}
