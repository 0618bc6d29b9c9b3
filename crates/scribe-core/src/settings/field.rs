//! Addressable form fields and input handling for [`FormState`].

use super::group::SettingsGroup;
use super::model::FormState;
use crate::error::{Result, ScribeError};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every editable field of the settings form, named `<group>.<field>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum SettingsField {
    #[strum(serialize = "user.username")]
    Username,
    #[strum(serialize = "user.email")]
    Email,
    #[strum(serialize = "user.name")]
    Name,
    #[strum(serialize = "user.profileColor")]
    ProfileColor,
    #[strum(serialize = "profile.bio")]
    Bio,
    #[strum(serialize = "profile.location")]
    Location,
    #[strum(serialize = "profile.currentLearning")]
    CurrentLearning,
    #[strum(serialize = "profile.availableFor")]
    AvailableFor,
    #[strum(serialize = "profile.skills")]
    Skills,
    #[strum(serialize = "profile.currentProject")]
    CurrentProject,
    #[strum(serialize = "profile.pronouns")]
    Pronouns,
    #[strum(serialize = "profile.work")]
    Work,
    #[strum(serialize = "profile.education")]
    Education,
    #[strum(serialize = "social.website")]
    Website,
    #[strum(serialize = "social.twitter")]
    Twitter,
    #[strum(serialize = "social.github")]
    Github,
    #[strum(serialize = "social.linkedin")]
    Linkedin,
    #[strum(serialize = "social.facebook")]
    Facebook,
}

impl SettingsField {
    pub fn group(self) -> SettingsGroup {
        use SettingsField::*;
        match self {
            Username | Email | Name | ProfileColor => SettingsGroup::User,
            Bio | Location | CurrentLearning | AvailableFor | Skills | CurrentProject
            | Pronouns | Work | Education => SettingsGroup::Profile,
            Website | Twitter | Github | Linkedin | Facebook => SettingsGroup::Social,
        }
    }
}

impl FormState {
    /// Applies one input event to the form.
    ///
    /// Text inputs store what was typed, including the empty string.
    /// `profile.pronouns` accepts `true`/`false`, anything else is rejected.
    pub fn set_field(&mut self, field: SettingsField, raw: &str) -> Result<()> {
        use SettingsField::*;
        let text = || Some(raw.to_string());
        match field {
            Username => self.user.username = raw.to_string(),
            Email => self.user.email = raw.to_string(),
            Name => self.user.name = raw.to_string(),
            ProfileColor => self.user.profile_color = raw.to_string(),
            Bio => self.profile.bio = text(),
            Location => self.profile.location = text(),
            CurrentLearning => self.profile.current_learning = text(),
            AvailableFor => self.profile.available_for = text(),
            Skills => self.profile.skills = text(),
            CurrentProject => self.profile.current_project = text(),
            Pronouns => {
                let shown = raw.trim().parse::<bool>().map_err(|_| {
                    ScribeError::validation(
                        "pronouns",
                        format!("expected true or false, got '{}'", raw),
                    )
                })?;
                self.profile.pronouns = Some(shown);
            }
            Work => self.profile.work = text(),
            Education => self.profile.education = text(),
            Website => self.social.website = text(),
            Twitter => self.social.twitter = text(),
            Github => self.social.github = text(),
            Linkedin => self.social.linkedin = text(),
            Facebook => self.social.facebook = text(),
        }
        Ok(())
    }
}
