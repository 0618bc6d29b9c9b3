//! Path management for scribe configuration files.
//!
//! ```text
//! ~/.config/scribe/        # Config directory (platform config dir)
//! └── config.toml          # API endpoint, session token, log level
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "scribe";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for scribe_core::ScribeError {
    fn from(err: PathError) -> Self {
        scribe_core::ScribeError::config(err.to_string())
    }
}

/// Resolves where scribe keeps its files.
///
/// An explicit base directory overrides the platform default, which keeps
/// tests away from the real home directory.
#[derive(Debug, Clone, Default)]
pub struct ScribePaths {
    base_dir: Option<PathBuf>,
}

impl ScribePaths {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the scribe configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/scribe/`
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = ScribePaths::new(Some(PathBuf::from("/tmp/scribe-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/scribe-test/config.toml")
        );
    }
}
