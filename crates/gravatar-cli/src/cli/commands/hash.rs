//! `gravatar hash` – print the digest for an email address.

use anyhow::Result;
use gravatar_core::hash;

pub fn run_hash(email: &str) -> Result<()> {
    println!("{}", hash::digest(email));
    Ok(())
}
