pub mod config;
pub mod editor;
pub mod settings;
pub mod utils;
