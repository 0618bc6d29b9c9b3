//! Wire shape of the settings endpoint.
//!
//! The server returns the user columns flat, with the profile and social
//! rows nested and possibly absent. Missing user columns map to empty
//! strings, a missing colour to the default.

use scribe_core::settings::{
    DEFAULT_PROFILE_COLOR, ProfileInfo, SettingsSnapshot, SocialLinks, UserInfo,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponseDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_color: Option<String>,
    #[serde(default)]
    pub profile: Option<ProfileInfo>,
    #[serde(default)]
    pub social: Option<SocialLinks>,
}

impl From<SettingsResponseDto> for SettingsSnapshot {
    fn from(dto: SettingsResponseDto) -> Self {
        SettingsSnapshot {
            user: UserInfo {
                username: dto.username.unwrap_or_default(),
                email: dto.email.unwrap_or_default(),
                name: dto.name.unwrap_or_default(),
                profile_color: dto
                    .profile_color
                    .unwrap_or_else(|| DEFAULT_PROFILE_COLOR.to_string()),
            },
            profile: dto.profile,
            social: dto.social,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_response_maps_to_defaults() {
        let dto: SettingsResponseDto = serde_json::from_str(
            r#"{
                "username": "alice",
                "email": null,
                "name": null,
                "profile": {"id": "p1", "userId": "u1", "bio": "Hi"},
                "social": null
            }"#,
        )
        .unwrap();

        let snapshot = SettingsSnapshot::from(dto);
        assert_eq!(snapshot.user.username, "alice");
        assert_eq!(snapshot.user.email, "");
        assert_eq!(snapshot.user.profile_color, "#5877ba");
        assert_eq!(snapshot.profile.unwrap().bio.as_deref(), Some("Hi"));
        assert!(snapshot.social.is_none());
    }
}
