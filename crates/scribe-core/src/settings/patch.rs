//! Partial update payloads, one per settings group.
//!
//! A field set to `Some(_)` is part of the update; `None` means "unchanged".
//! Nullable fields use `Option<Option<_>>` so an update can clear a value by
//! sending an explicit `null`. None of the patches carry identity keys.

use super::model::{ProfileInfo, SocialLinks, UserInfo};
use crate::error::{Result, ScribeError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PROFILE_COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("profile color pattern is valid")
});

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_color: Option<String>,
}

impl UserInfoPatch {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of fields carried by this patch.
    pub fn len(&self) -> usize {
        [
            self.username.is_some(),
            self.email.is_some(),
            self.name.is_some(),
            self.profile_color.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Checks the fields this patch would send.
    ///
    /// Only present fields are validated, so an untouched invalid value on
    /// the server never blocks an unrelated change.
    pub fn validate(&self) -> Result<()> {
        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err(ScribeError::validation("username", "must not be empty"));
            }
        }
        if let Some(email) = &self.email {
            if !EMAIL_PATTERN.is_match(email) {
                return Err(ScribeError::validation(
                    "email",
                    format!("'{}' is not an email address", email),
                ));
            }
        }
        if let Some(color) = &self.profile_color {
            if !PROFILE_COLOR_PATTERN.is_match(color) {
                return Err(ScribeError::validation(
                    "profileColor",
                    format!("'{}' is not a hex colour like #5877ba", color),
                ));
            }
        }
        Ok(())
    }

    /// Writes the patch onto a stored record.
    pub fn apply_to(&self, target: &mut UserInfo) {
        if let Some(v) = &self.username {
            target.username = v.clone();
        }
        if let Some(v) = &self.email {
            target.email = v.clone();
        }
        if let Some(v) = &self.name {
            target.name = v.clone();
        }
        if let Some(v) = &self.profile_color {
            target.profile_color = v.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_learning: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_project: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Option<String>>,
}

impl ProfileInfoPatch {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        [
            self.bio.is_some(),
            self.location.is_some(),
            self.current_learning.is_some(),
            self.available_for.is_some(),
            self.skills.is_some(),
            self.current_project.is_some(),
            self.pronouns.is_some(),
            self.work.is_some(),
            self.education.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn apply_to(&self, target: &mut ProfileInfo) {
        assign(&mut target.bio, &self.bio);
        assign(&mut target.location, &self.location);
        assign(&mut target.current_learning, &self.current_learning);
        assign(&mut target.available_for, &self.available_for);
        assign(&mut target.skills, &self.skills);
        assign(&mut target.current_project, &self.current_project);
        assign(&mut target.pronouns, &self.pronouns);
        assign(&mut target.work, &self.work);
        assign(&mut target.education, &self.education);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<Option<String>>,
}

impl SocialLinksPatch {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        [
            self.website.is_some(),
            self.twitter.is_some(),
            self.github.is_some(),
            self.linkedin.is_some(),
            self.facebook.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn apply_to(&self, target: &mut SocialLinks) {
        assign(&mut target.website, &self.website);
        assign(&mut target.twitter, &self.twitter);
        assign(&mut target.github, &self.github);
        assign(&mut target.linkedin, &self.linkedin);
        assign(&mut target.facebook, &self.facebook);
    }
}

fn assign<T: Clone>(target: &mut Option<T>, update: &Option<Option<T>>) {
    if let Some(value) = update {
        *target = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_patch_serializes_only_present_fields() {
        let patch = UserInfoPatch {
            profile_color: Some("#fff".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "profileColor": "#fff" })
        );
        assert_eq!(patch.len(), 1);
    }

    #[test]
    fn test_profile_patch_sends_explicit_null() {
        let patch = ProfileInfoPatch {
            bio: Some(None),
            pronouns: Some(Some(true)),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "bio": null, "pronouns": true })
        );
    }

    #[test]
    fn test_user_patch_validation() {
        let ok = UserInfoPatch {
            username: Some("alice2".to_string()),
            email: Some("a@x.com".to_string()),
            profile_color: Some("#5877BA".to_string()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let blank = UserInfoPatch {
            username: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.validate().unwrap_err().is_validation());

        let bad_color = UserInfoPatch {
            profile_color: Some("blue".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad_color.validate(),
            Err(ScribeError::Validation { field: "profileColor", .. })
        ));

        let bad_email = UserInfoPatch {
            email: Some("alice.example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad_email.validate(),
            Err(ScribeError::Validation { field: "email", .. })
        ));
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let mut social = SocialLinks {
            id: Some("s1".to_string()),
            github: Some("https://github.com/alice".to_string()),
            twitter: Some("https://twitter.com/old".to_string()),
            ..Default::default()
        };
        let patch = SocialLinksPatch {
            twitter: Some(None),
            ..Default::default()
        };

        patch.apply_to(&mut social);

        assert_eq!(social.id.as_deref(), Some("s1"));
        assert_eq!(social.github.as_deref(), Some("https://github.com/alice"));
        assert_eq!(social.twitter, None);
    }
}
