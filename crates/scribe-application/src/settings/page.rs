//! Settings page use case.
//!
//! Owns the form for one visit to the settings page and wires it to the
//! snapshot cache and the submission coordinator.

use super::cache::SnapshotCache;
use super::coordinator::{SubmissionCoordinator, SubmissionReport};
use scribe_core::error::Result;
use scribe_core::notification::NotificationSink;
use scribe_core::settings::{FormState, SettingsApi, SettingsField, SettingsSnapshot};
use std::sync::Arc;
use tokio::sync::watch;

/// State of the settings page between mount and navigation away.
///
/// The form is reset from the cache only by [`SettingsPage::sync_from_cache`],
/// and only when the cache published a replacement since the last sync.
/// Background refreshes never overwrite edits on their own.
pub struct SettingsPage {
    cache: Arc<SnapshotCache>,
    coordinator: SubmissionCoordinator,
    updates: watch::Receiver<Option<Arc<SettingsSnapshot>>>,
    form: FormState,
}

impl SettingsPage {
    pub fn new(api: Arc<dyn SettingsApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        let cache = Arc::new(SnapshotCache::new(Arc::clone(&api)));
        let coordinator = SubmissionCoordinator::new(api, Arc::clone(&cache), notifier);
        let updates = cache.subscribe();
        Self {
            cache,
            coordinator,
            updates,
            form: FormState::default(),
        }
    }

    /// Fetches the settings and resets the form from them.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: a snapshot was loaded into the form
    /// - `Ok(false)`: the server returned no settings; the form keeps its defaults
    /// - `Err(_)`: the fetch failed
    pub async fn load(&mut self) -> Result<bool> {
        tracing::debug!("[SettingsPage] Loading settings");
        self.cache.refresh().await?;
        Ok(self.sync_from_cache())
    }

    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    pub fn is_saving(&self) -> bool {
        self.coordinator.is_saving()
    }

    pub fn cache(&self) -> &Arc<SnapshotCache> {
        &self.cache
    }

    pub fn coordinator(&self) -> &SubmissionCoordinator {
        &self.coordinator
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Applies one input event to the form.
    pub fn set_field(&mut self, field: SettingsField, value: &str) -> Result<()> {
        self.form.set_field(field, value)
    }

    /// Resets the form if the cache holds a snapshot the form has not seen.
    ///
    /// Returns `true` when the form was replaced.
    pub fn sync_from_cache(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        let latest = self.updates.borrow_and_update().clone();
        match latest {
            Some(snapshot) => {
                tracing::debug!("[SettingsPage] Resetting form from new snapshot");
                self.form = FormState::from_snapshot(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Submits the form against the cached baseline, then adopts whatever
    /// snapshot the post-save refreshes produced.
    pub async fn submit(&mut self) -> SubmissionReport {
        let baseline = self.cache.current();
        let report = self
            .coordinator
            .submit(&self.form, baseline.as_deref())
            .await;
        self.sync_from_cache();
        report
    }
}
