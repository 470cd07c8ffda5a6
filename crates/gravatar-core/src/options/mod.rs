//! Display preferences sent to the service as URL parameters.
//!
//! Each choice maps to a short wire code (`r=pg`, `d=identicon`, ...).

mod fallback;
mod rating;

pub use fallback::{FallbackImage, FallbackKind};
pub use rating::Rating;
