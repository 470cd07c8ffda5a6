//! `gravatar url` – print the avatar URL.

use anyhow::Result;
use gravatar_core::config::Preferences;

pub fn run_url(prefs: &Preferences, email: &str) -> Result<()> {
    let request = prefs.to_request()?;
    println!("{}", request.build_url(email));
    Ok(())
}
