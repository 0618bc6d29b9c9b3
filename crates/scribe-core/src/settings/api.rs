//! Settings API trait.
//!
//! Defines the remote operations the settings page depends on.

use super::model::SettingsSnapshot;
use super::patch::{ProfileInfoPatch, SocialLinksPatch, UserInfoPatch};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the settings endpoints.
///
/// This trait decouples the page logic from the transport (HTTP, an
/// in-memory fake, ...). Each update carries only the changed fields of a
/// single group; implementations must not touch the other groups.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Fetches the current user's settings.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))`: Settings found
    /// - `Ok(None)`: The server has nothing for this user
    /// - `Err(_)`: The fetch failed
    async fn get_settings(&self) -> Result<Option<SettingsSnapshot>>;

    /// Updates user identity fields.
    async fn update_user(&self, patch: &UserInfoPatch) -> Result<()>;

    /// Updates profile detail fields.
    async fn update_profile(&self, patch: &ProfileInfoPatch) -> Result<()>;

    /// Updates social link fields.
    async fn update_social(&self, patch: &SocialLinksPatch) -> Result<()>;
}
