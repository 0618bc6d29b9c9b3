//! Settings domain model.
//!
//! A `SettingsSnapshot` is what the server last confirmed; a `FormState` is
//! the working copy the user edits.

use serde::{Deserialize, Serialize};

/// Profile colour used when the server has none on record.
pub const DEFAULT_PROFILE_COLOR: &str = "#5877ba";

/// User identity group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub name: String,
    pub profile_color: String,
}

impl Default for UserInfo {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            name: String::new(),
            profile_color: DEFAULT_PROFILE_COLOR.to_string(),
        }
    }
}

/// Profile details group. Every field is nullable on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_learning: Option<String>,
    #[serde(default)]
    pub available_for: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub current_project: Option<String>,
    /// Whether pronouns are shown on the public profile.
    #[serde(default)]
    pub pronouns: Option<bool>,
    #[serde(default)]
    pub work: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

/// Social links group. Every field is nullable on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
}

/// The server-confirmed settings of the current user.
///
/// `profile` and `social` are `None` when the user has never saved that
/// group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub user: UserInfo,
    #[serde(default)]
    pub profile: Option<ProfileInfo>,
    #[serde(default)]
    pub social: Option<SocialLinks>,
}

/// The editable working copy of a [`SettingsSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub user: UserInfo,
    pub profile: ProfileInfo,
    pub social: SocialLinks,
}

impl FormState {
    /// Builds a fresh form from a snapshot, replacing every value.
    ///
    /// Groups the server has never stored start out with all fields empty.
    pub fn from_snapshot(snapshot: &SettingsSnapshot) -> Self {
        Self {
            user: snapshot.user.clone(),
            profile: snapshot.profile.clone().unwrap_or_default(),
            social: snapshot.social.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_default_color() {
        assert_eq!(UserInfo::default().profile_color, "#5877ba");
    }

    #[test]
    fn test_form_from_snapshot_fills_missing_groups() {
        let snapshot = SettingsSnapshot {
            user: UserInfo {
                username: "alice".to_string(),
                ..Default::default()
            },
            profile: None,
            social: Some(SocialLinks {
                github: Some("https://github.com/alice".to_string()),
                ..Default::default()
            }),
        };

        let form = FormState::from_snapshot(&snapshot);
        assert_eq!(form.user.username, "alice");
        assert_eq!(form.profile, ProfileInfo::default());
        assert_eq!(form.social.github.as_deref(), Some("https://github.com/alice"));
    }

    #[test]
    fn test_profile_wire_names_are_camel_case() {
        let profile: ProfileInfo = serde_json::from_str(
            r#"{"id":"p1","userId":"u1","currentLearning":"Rust","pronouns":true}"#,
        )
        .unwrap();
        assert_eq!(profile.user_id.as_deref(), Some("u1"));
        assert_eq!(profile.current_learning.as_deref(), Some("Rust"));
        assert_eq!(profile.pronouns, Some(true));
        assert_eq!(profile.bio, None);
    }
}
