//! Settings domain module.
//!
//! # Module Structure
//!
//! - `model`: snapshot and form records for the three groups
//! - `patch`: partial update payloads
//! - `diff`: change detection between a form and its baseline
//! - `field`: addressable form fields
//! - `api`: remote settings operations

mod api;
mod diff;
mod field;
mod group;
mod model;
mod patch;

pub use api::SettingsApi;
pub use diff::{Diffable, SettingsChanges};
pub use field::SettingsField;
pub use group::SettingsGroup;
pub use model::{
    DEFAULT_PROFILE_COLOR, FormState, ProfileInfo, SettingsSnapshot, SocialLinks, UserInfo,
};
pub use patch::{ProfileInfoPatch, SocialLinksPatch, UserInfoPatch};
