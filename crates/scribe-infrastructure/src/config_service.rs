//! Configuration service implementation.
//!
//! Loads the client configuration from `config.toml` and layers environment
//! overrides on top.

use crate::paths::ScribePaths;
use crate::storage::AtomicTomlFile;
use scribe_core::config::ClientConfig;
use scribe_core::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

pub const ENV_API_URL: &str = "SCRIBE_API_URL";
pub const ENV_SESSION_TOKEN: &str = "SCRIBE_SESSION_TOKEN";
pub const ENV_LOG: &str = "SCRIBE_LOG";

/// Configuration service that loads and caches the client configuration.
///
/// The file is read lazily on first access and cached until
/// [`ConfigService::invalidate_cache`] is called.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: ScribePaths,
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: ScribePaths) -> Self {
        Self {
            paths,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        Ok(self.paths.config_file()?)
    }

    /// Gets the effective configuration, loading from file if not cached.
    ///
    /// A missing file yields the defaults. Environment overrides are applied
    /// on every load but never written back.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.file()?.load()?.unwrap_or_default();
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());
        tracing::debug!(
            "[ConfigService] Loaded config: base_url={}, log={}",
            loaded.api.base_url,
            loaded.log.level
        );

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Writes a default config file unless one already exists.
    ///
    /// Returns the path and whether a file was created.
    pub fn init(&self) -> Result<(PathBuf, bool)> {
        let file = self.file()?;
        if file.load()?.is_some() {
            return Ok((file.path().to_path_buf(), false));
        }
        file.save(&ClientConfig::default())?;
        tracing::info!("[ConfigService] Created {:?}", file.path());
        self.invalidate_cache();
        Ok((file.path().to_path_buf(), true))
    }

    /// Applies `f` to the stored file (not the env-overridden view) and saves it.
    pub fn update<F>(&self, f: F) -> Result<ClientConfig>
    where
        F: FnOnce(&mut ClientConfig) -> Result<()>,
    {
        let saved = self.file()?.update(ClientConfig::default(), f)?;
        self.invalidate_cache();
        Ok(saved)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    fn file(&self) -> Result<AtomicTomlFile<ClientConfig>> {
        Ok(AtomicTomlFile::new(self.config_path()?))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(ScribePaths::default())
    }
}

fn apply_env_overrides<F>(config: &mut ClientConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
        config.api.base_url = url;
    }
    if let Some(token) = lookup(ENV_SESSION_TOKEN).filter(|v| !v.is_empty()) {
        config.api.session_token = Some(token);
    }
    if let Some(level) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
        config.log.level = level;
    }
}
