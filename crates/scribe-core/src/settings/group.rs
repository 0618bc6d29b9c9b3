use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the three independently submitted settings sections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum SettingsGroup {
    #[strum(serialize = "user")]
    User,
    #[strum(serialize = "profile")]
    Profile,
    #[strum(serialize = "social")]
    Social,
}

impl SettingsGroup {
    /// Notification text shown after this group saved successfully.
    pub fn success_message(self) -> &'static str {
        match self {
            SettingsGroup::User => "User information updated successfully",
            SettingsGroup::Profile => "Profile information updated successfully",
            SettingsGroup::Social => "Social links updated successfully",
        }
    }
}
