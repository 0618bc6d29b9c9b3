//! Settings submission.
//!
//! Turns one submit action into at most three independent update requests,
//! one per changed group, and reports every outcome to the user.

use super::cache::SnapshotCache;
use super::saving::{SavingGuard, SavingIndicator};
use scribe_core::error::Result;
use scribe_core::notification::{NotificationSink, Toast};
use scribe_core::settings::{
    FormState, ProfileInfoPatch, SettingsApi, SettingsChanges, SettingsGroup, SettingsSnapshot,
    SocialLinksPatch, UserInfoPatch,
};
use std::sync::Arc;

/// The update payload of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupPatch {
    User(UserInfoPatch),
    Profile(ProfileInfoPatch),
    Social(SocialLinksPatch),
}

impl GroupPatch {
    pub fn group(&self) -> SettingsGroup {
        match self {
            GroupPatch::User(_) => SettingsGroup::User,
            GroupPatch::Profile(_) => SettingsGroup::Profile,
            GroupPatch::Social(_) => SettingsGroup::Social,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            GroupPatch::User(p) => p.is_empty(),
            GroupPatch::Profile(p) => p.is_empty(),
            GroupPatch::Social(p) => p.is_empty(),
        }
    }

    /// Rejects payloads the server would refuse anyway.
    fn validate(&self) -> Result<()> {
        match self {
            GroupPatch::User(p) => p.validate(),
            GroupPatch::Profile(_) | GroupPatch::Social(_) => Ok(()),
        }
    }

    async fn send(&self, api: &dyn SettingsApi) -> Result<()> {
        match self {
            GroupPatch::User(p) => api.update_user(p).await,
            GroupPatch::Profile(p) => api.update_profile(p).await,
            GroupPatch::Social(p) => api.update_social(p).await,
        }
    }
}

/// What happened to one group during a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    /// Nothing changed; no request was sent.
    Skipped,
    /// The update was accepted.
    Saved,
    /// Validation or the request failed with this message.
    Failed(String),
}

impl GroupOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, GroupOutcome::Failed(_))
    }
}

/// Per-group outcomes of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub user: GroupOutcome,
    pub profile: GroupOutcome,
    pub social: GroupOutcome,
}

impl SubmissionReport {
    pub fn outcome(&self, group: SettingsGroup) -> &GroupOutcome {
        match group {
            SettingsGroup::User => &self.user,
            SettingsGroup::Profile => &self.profile,
            SettingsGroup::Social => &self.social,
        }
    }

    /// Number of groups for which an update was attempted.
    pub fn requests_sent(&self) -> usize {
        [&self.user, &self.profile, &self.social]
            .into_iter()
            .filter(|o| !matches!(o, GroupOutcome::Skipped))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.user.is_failed() || self.profile.is_failed() || self.social.is_failed()
    }
}

/// Dispatches per-group updates for a submitted settings form.
///
/// Groups are independent: they are sent concurrently, may finish in any
/// order, and a failure in one never affects the others. Every successful
/// update refreshes the [`SnapshotCache`].
pub struct SubmissionCoordinator {
    api: Arc<dyn SettingsApi>,
    cache: Arc<SnapshotCache>,
    notifier: Arc<dyn NotificationSink>,
    saving: SavingIndicator,
}

impl SubmissionCoordinator {
    pub fn new(
        api: Arc<dyn SettingsApi>,
        cache: Arc<SnapshotCache>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
            saving: SavingIndicator::new(),
        }
    }

    /// The aggregate saving indicator of this coordinator.
    pub fn saving(&self) -> &SavingIndicator {
        &self.saving
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_saving()
    }

    /// Submits the form against `baseline`.
    ///
    /// Returns once every dispatched request has settled and every
    /// resulting cache refresh has finished.
    pub async fn submit(
        &self,
        form: &FormState,
        baseline: Option<&SettingsSnapshot>,
    ) -> SubmissionReport {
        let changes = SettingsChanges::compute(form, baseline);
        tracing::debug!(
            "[SubmissionCoordinator] Changed fields: user={}, profile={}, social={}",
            changes.user.len(),
            changes.profile.len(),
            changes.social.len()
        );

        let user = self.dispatch(GroupPatch::User(changes.user));
        let profile = self.dispatch(GroupPatch::Profile(changes.profile));
        let social = self.dispatch(GroupPatch::Social(changes.social));

        let (user, profile, social) = tokio::join!(
            self.run(user),
            self.run(profile),
            self.run(social)
        );

        let report = SubmissionReport {
            user,
            profile,
            social,
        };
        tracing::info!(
            "[SubmissionCoordinator] Submission settled: {} request(s), failures={}",
            report.requests_sent(),
            report.has_failures()
        );
        report
    }

    /// Registers a non-empty patch as outstanding before anything is polled,
    /// so the indicator stays on until the last group settles.
    fn dispatch(&self, patch: GroupPatch) -> Option<(GroupPatch, SavingGuard)> {
        if patch.is_empty() {
            return None;
        }
        Some((patch, self.saving.begin()))
    }

    async fn run(&self, dispatched: Option<(GroupPatch, SavingGuard)>) -> GroupOutcome {
        let Some((patch, guard)) = dispatched else {
            return GroupOutcome::Skipped;
        };
        let group = patch.group();

        let result = match patch.validate() {
            Ok(()) => {
                tracing::debug!("[SubmissionCoordinator] Sending {} update", group);
                patch.send(self.api.as_ref()).await
            }
            Err(e) => Err(e),
        };
        drop(guard);

        match result {
            Ok(()) => {
                tracing::info!("[SubmissionCoordinator] {} update succeeded", group);
                self.notifier.notify(Toast::success(group.success_message()));
                self.cache.invalidate().await;
                GroupOutcome::Saved
            }
            Err(e) => {
                tracing::warn!("[SubmissionCoordinator] {} update failed: {}", group, e);
                let message = e.message();
                self.notifier.notify(Toast::error(message.clone()));
                GroupOutcome::Failed(message)
            }
        }
    }
}
