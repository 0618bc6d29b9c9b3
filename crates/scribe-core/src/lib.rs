pub mod config;
pub mod error;
pub mod notification;
pub mod post;
pub mod settings;

// Re-export common error type
pub use error::{Result, ScribeError};
