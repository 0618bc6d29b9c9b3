//! Change detection between a form group and its last-saved baseline.
//!
//! Comparison is shallow: a field is changed when `current != baseline` for
//! that field alone. Identity keys (`id`, `user_id`) have no slot in any
//! patch type and are therefore never part of a diff.

use super::model::{FormState, ProfileInfo, SettingsSnapshot, SocialLinks, UserInfo};
use super::patch::{ProfileInfoPatch, SocialLinksPatch, UserInfoPatch};

/// A settings group that can compute its own partial update.
pub trait Diffable {
    type Patch;

    /// Returns the fields of `self` that differ from `baseline`.
    ///
    /// With no baseline (nothing loaded yet) every field is reported.
    fn diff(&self, baseline: Option<&Self>) -> Self::Patch;
}

/// `Some(current)` when the value differs from the baseline, or when there
/// is no baseline at all.
fn changed<T: PartialEq + Clone>(current: &T, baseline: Option<&T>) -> Option<T> {
    match baseline {
        Some(previous) if previous == current => None,
        _ => Some(current.clone()),
    }
}

impl Diffable for UserInfo {
    type Patch = UserInfoPatch;

    fn diff(&self, baseline: Option<&Self>) -> UserInfoPatch {
        UserInfoPatch {
            username: changed(&self.username, baseline.map(|b| &b.username)),
            email: changed(&self.email, baseline.map(|b| &b.email)),
            name: changed(&self.name, baseline.map(|b| &b.name)),
            profile_color: changed(&self.profile_color, baseline.map(|b| &b.profile_color)),
        }
    }
}

impl Diffable for ProfileInfo {
    type Patch = ProfileInfoPatch;

    fn diff(&self, baseline: Option<&Self>) -> ProfileInfoPatch {
        ProfileInfoPatch {
            bio: changed(&self.bio, baseline.map(|b| &b.bio)),
            location: changed(&self.location, baseline.map(|b| &b.location)),
            current_learning: changed(
                &self.current_learning,
                baseline.map(|b| &b.current_learning),
            ),
            available_for: changed(&self.available_for, baseline.map(|b| &b.available_for)),
            skills: changed(&self.skills, baseline.map(|b| &b.skills)),
            current_project: changed(&self.current_project, baseline.map(|b| &b.current_project)),
            pronouns: changed(&self.pronouns, baseline.map(|b| &b.pronouns)),
            work: changed(&self.work, baseline.map(|b| &b.work)),
            education: changed(&self.education, baseline.map(|b| &b.education)),
        }
    }
}

impl Diffable for SocialLinks {
    type Patch = SocialLinksPatch;

    fn diff(&self, baseline: Option<&Self>) -> SocialLinksPatch {
        SocialLinksPatch {
            website: changed(&self.website, baseline.map(|b| &b.website)),
            twitter: changed(&self.twitter, baseline.map(|b| &b.twitter)),
            github: changed(&self.github, baseline.map(|b| &b.github)),
            linkedin: changed(&self.linkedin, baseline.map(|b| &b.linkedin)),
            facebook: changed(&self.facebook, baseline.map(|b| &b.facebook)),
        }
    }
}

/// The three per-group diffs of one submit action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsChanges {
    pub user: UserInfoPatch,
    pub profile: ProfileInfoPatch,
    pub social: SocialLinksPatch,
}

impl SettingsChanges {
    /// Diffs every group of `form` against the matching group of `baseline`.
    pub fn compute(form: &FormState, baseline: Option<&SettingsSnapshot>) -> Self {
        Self {
            user: form.user.diff(baseline.map(|s| &s.user)),
            profile: form
                .profile
                .diff(baseline.and_then(|s| s.profile.as_ref())),
            social: form.social.diff(baseline.and_then(|s| s.social.as_ref())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.profile.is_empty() && self.social.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> UserInfo {
        UserInfo {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            name: "Alice".to_string(),
            profile_color: "#5877ba".to_string(),
        }
    }

    fn full_profile() -> ProfileInfo {
        ProfileInfo {
            id: Some("p1".to_string()),
            user_id: Some("u1".to_string()),
            bio: Some("Writes about compilers".to_string()),
            location: Some("Lisbon".to_string()),
            current_learning: Some("Rust".to_string()),
            available_for: Some("Mentoring".to_string()),
            skills: Some("Rust, Go".to_string()),
            current_project: Some("A blog engine".to_string()),
            pronouns: Some(false),
            work: Some("Engineer".to_string()),
            education: Some("BSc".to_string()),
        }
    }

    #[test]
    fn test_identical_groups_have_empty_diff() {
        assert!(alice().diff(Some(&alice())).is_empty());
        assert!(full_profile().diff(Some(&full_profile())).is_empty());
        let social = SocialLinks {
            website: Some("https://alice.dev".to_string()),
            ..Default::default()
        };
        assert!(social.diff(Some(&social)).is_empty());
    }

    #[test]
    fn test_default_record_against_itself_is_empty() {
        assert!(ProfileInfo::default().diff(Some(&ProfileInfo::default())).is_empty());
        assert!(SocialLinks::default().diff(Some(&SocialLinks::default())).is_empty());
    }

    #[test]
    fn test_username_change_scenario() {
        let current = UserInfo {
            username: "alice2".to_string(),
            ..alice()
        };

        let patch = current.diff(Some(&alice()));

        assert_eq!(
            patch,
            UserInfoPatch {
                username: Some("alice2".to_string()),
                ..Default::default()
            }
        );
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "username": "alice2" })
        );
    }

    #[test]
    fn test_missing_baseline_reports_every_field() {
        let patch = full_profile().diff(None);
        assert_eq!(patch.len(), 9);
        assert_eq!(patch.bio, Some(Some("Writes about compilers".to_string())));
        assert_eq!(patch.pronouns, Some(Some(false)));

        let user_patch = alice().diff(None);
        assert_eq!(user_patch.len(), 4);
        assert_eq!(user_patch.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_identity_keys_never_diffed() {
        let baseline = full_profile();
        let current = ProfileInfo {
            id: Some("other".to_string()),
            user_id: Some("someone-else".to_string()),
            ..full_profile()
        };

        assert!(current.diff(Some(&baseline)).is_empty());

        let without_baseline = serde_json::to_value(current.diff(None)).unwrap();
        let keys = without_baseline.as_object().unwrap();
        assert!(!keys.contains_key("id"));
        assert!(!keys.contains_key("userId"));
    }

    #[test]
    fn test_clearing_a_field_is_a_change_to_null() {
        let current = ProfileInfo {
            location: None,
            ..full_profile()
        };
        let patch = current.diff(Some(&full_profile()));
        assert_eq!(patch.location, Some(None));
        assert_eq!(patch.len(), 1);
    }

    #[test]
    fn test_empty_string_differs_from_null() {
        // Comparison is shallow: "" and null are distinct values.
        let baseline = SocialLinks::default();
        let current = SocialLinks {
            github: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(current.diff(Some(&baseline)).github, Some(Some(String::new())));
    }

    #[test]
    fn test_changes_use_matching_baseline_groups() {
        let snapshot = SettingsSnapshot {
            user: alice(),
            profile: None,
            social: Some(SocialLinks {
                twitter: Some(String::new()),
                ..Default::default()
            }),
        };
        let mut form = FormState::from_snapshot(&snapshot);
        form.social.twitter = Some("https://twitter.com/foo".to_string());

        let changes = SettingsChanges::compute(&form, Some(&snapshot));

        assert!(changes.user.is_empty());
        // No stored profile: the whole (empty) form group is reported.
        assert_eq!(changes.profile.len(), 9);
        assert_eq!(
            serde_json::to_value(&changes.social).unwrap(),
            json!({ "twitter": "https://twitter.com/foo" })
        );
    }
}
