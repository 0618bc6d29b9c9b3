use anyhow::{Context, Result};
use scribe_core::config::DEFAULT_LOG_LEVEL;
use scribe_core::settings::{
    ProfileInfo, SettingsApi, SettingsField, SettingsSnapshot, SocialLinks, UserInfo,
};
use scribe_infrastructure::{ConfigService, HttpSettingsApi, InMemorySettingsApi};
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `level` is an `EnvFilter` directive; an invalid one falls back to
/// [`DEFAULT_LOG_LEVEL`].
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Picks the settings backend for this invocation.
pub fn build_api(config_service: &ConfigService, offline: bool) -> Result<Arc<dyn SettingsApi>> {
    if offline {
        tracing::debug!("[CLI] Using in-memory settings API");
        return Ok(Arc::new(InMemorySettingsApi::new(Some(offline_snapshot()))));
    }

    let config = config_service
        .get_config()
        .context("Failed to load configuration")?;
    tracing::debug!("[CLI] Using settings API at {}", config.api.base_url);
    Ok(Arc::new(HttpSettingsApi::from_config(&config.api)))
}

/// The account served in `--offline` mode.
pub fn offline_snapshot() -> SettingsSnapshot {
    SettingsSnapshot {
        user: UserInfo {
            username: "writer".to_string(),
            email: "writer@example.com".to_string(),
            name: "Offline Writer".to_string(),
            ..Default::default()
        },
        profile: Some(ProfileInfo {
            id: Some("offline-profile".to_string()),
            user_id: Some("offline-user".to_string()),
            bio: Some("Drafting posts without a network.".to_string()),
            ..Default::default()
        }),
        social: Some(SocialLinks {
            id: Some("offline-social".to_string()),
            user_id: Some("offline-user".to_string()),
            ..Default::default()
        }),
    }
}

/// Parses `group.field=value`. The value may be empty and may contain `=`.
pub fn parse_assignment(input: &str) -> Result<(SettingsField, String)> {
    let (name, value) = input
        .split_once('=')
        .with_context(|| format!("Expected FIELD=VALUE, got '{}'", input))?;
    let field = SettingsField::from_str(name.trim()).with_context(|| {
        format!(
            "Unknown field '{}'. Run `scribe settings fields` for the list.",
            name.trim()
        )
    })?;
    Ok((field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::settings::Diffable;

    #[test]
    fn test_parse_assignment() {
        let (field, value) = parse_assignment("social.twitter=https://twitter.com/foo").unwrap();
        assert_eq!(field, SettingsField::Twitter);
        assert_eq!(value, "https://twitter.com/foo");
    }

    #[test]
    fn test_parse_assignment_keeps_empty_and_embedded_equals() {
        let (field, value) = parse_assignment("profile.bio=").unwrap();
        assert_eq!(field, SettingsField::Bio);
        assert_eq!(value, "");

        let (_, value) = parse_assignment("social.website=https://x.dev/?a=b").unwrap();
        assert_eq!(value, "https://x.dev/?a=b");
    }

    #[test]
    fn test_parse_assignment_rejects_bad_input() {
        assert!(parse_assignment("user.username").is_err());
        assert!(parse_assignment("user.nickname=bob").is_err());
    }

    #[test]
    fn test_offline_snapshot_passes_validation() {
        let patch = offline_snapshot().user.diff(None);
        assert!(patch.validate().is_ok());
    }
}
