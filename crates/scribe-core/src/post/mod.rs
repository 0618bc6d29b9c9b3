//! Post editor domain module.
//!
//! - `draft`: title and tag state of a post being written
//! - `toolbar`: the formatting actions offered above the body

mod draft;
mod toolbar;

pub use draft::{MAX_TAGS, PostDraft};
pub use toolbar::FormatAction;
