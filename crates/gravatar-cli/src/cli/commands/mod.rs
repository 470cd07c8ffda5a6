//! CLI command handlers, one per file.

mod download;
mod hash;
mod url;

pub use download::run_download;
pub use hash::run_hash;
pub use url::run_url;
