//! In-memory `SettingsApi`.
//!
//! Stores one snapshot, applies patches to it the way the server would, and
//! records every request. Individual groups can be told to fail.

use async_trait::async_trait;
use scribe_core::error::{Result, ScribeError};
use scribe_core::settings::{
    ProfileInfoPatch, SettingsApi, SettingsGroup, SettingsSnapshot, SocialLinksPatch,
    UserInfoPatch,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// One update request received by [`InMemorySettingsApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub group: SettingsGroup,
    pub body: serde_json::Value,
}

#[derive(Default)]
struct State {
    snapshot: Option<SettingsSnapshot>,
    requests: Vec<RecordedRequest>,
    failures: HashMap<SettingsGroup, String>,
    fetches: usize,
}

#[derive(Default)]
pub struct InMemorySettingsApi {
    state: Mutex<State>,
}

impl InMemorySettingsApi {
    pub fn new(snapshot: Option<SettingsSnapshot>) -> Self {
        Self {
            state: Mutex::new(State {
                snapshot,
                ..Default::default()
            }),
        }
    }

    /// Makes every update of `group` fail with `message` until cleared.
    pub fn fail_group(&self, group: SettingsGroup, message: impl Into<String>) {
        self.lock().failures.insert(group, message.into());
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    pub fn snapshot(&self) -> Option<SettingsSnapshot> {
        self.lock().snapshot.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.lock().fetches
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn apply<P, F>(&self, group: SettingsGroup, patch: &P, apply: F) -> Result<()>
    where
        P: Serialize,
        F: FnOnce(&P, &mut SettingsSnapshot),
    {
        let mut state = self.lock();
        state.requests.push(RecordedRequest {
            group,
            body: serde_json::to_value(patch)?,
        });

        if let Some(message) = state.failures.get(&group) {
            return Err(ScribeError::api(500, message.clone()));
        }

        let snapshot = state
            .snapshot
            .as_mut()
            .ok_or_else(|| ScribeError::not_found("settings", group.to_string()))?;
        apply(patch, snapshot);
        Ok(())
    }
}

#[async_trait]
impl SettingsApi for InMemorySettingsApi {
    async fn get_settings(&self) -> Result<Option<SettingsSnapshot>> {
        let mut state = self.lock();
        state.fetches += 1;
        Ok(state.snapshot.clone())
    }

    async fn update_user(&self, patch: &UserInfoPatch) -> Result<()> {
        self.apply(SettingsGroup::User, patch, |p, s| p.apply_to(&mut s.user))
    }

    async fn update_profile(&self, patch: &ProfileInfoPatch) -> Result<()> {
        self.apply(SettingsGroup::Profile, patch, |p, s| {
            p.apply_to(s.profile.get_or_insert_with(Default::default))
        })
    }

    async fn update_social(&self, patch: &SocialLinksPatch) -> Result<()> {
        self.apply(SettingsGroup::Social, patch, |p, s| {
            p.apply_to(s.social.get_or_insert_with(Default::default))
        })
    }
}
