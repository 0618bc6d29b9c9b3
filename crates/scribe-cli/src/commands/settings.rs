use anyhow::{Context, Result};
use scribe_application::settings::{GroupOutcome, SettingsPage, SnapshotCache};
use scribe_core::settings::{SettingsApi, SettingsField, SettingsGroup};
use scribe_infrastructure::TracingNotificationSink;
use std::sync::Arc;
use strum::IntoEnumIterator;

use super::utils::parse_assignment;

pub async fn show(api: Arc<dyn SettingsApi>) -> Result<()> {
    let cache = SnapshotCache::new(api);
    cache.refresh().await.context("Failed to fetch settings")?;

    match cache.current() {
        Some(snapshot) => println!("{}", serde_json::to_string_pretty(&*snapshot)?),
        None => println!("No settings found for this account."),
    }
    Ok(())
}

pub async fn update(api: Arc<dyn SettingsApi>, assignments: &[String]) -> Result<()> {
    let edits = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>>>()?;

    let mut page = SettingsPage::new(api, Arc::new(TracingNotificationSink));
    page.load().await.context("Failed to fetch settings")?;
    if page.cache().current().is_none() {
        anyhow::bail!("No settings found for this account");
    }

    for (field, value) in &edits {
        page.set_field(*field, value)
            .with_context(|| format!("Invalid value for {}", field))?;
    }

    let report = page.submit().await;
    for group in SettingsGroup::iter() {
        let status = match report.outcome(group) {
            GroupOutcome::Skipped => "unchanged".to_string(),
            GroupOutcome::Saved => "saved".to_string(),
            GroupOutcome::Failed(message) => format!("failed: {}", message),
        };
        println!("{:<8} {}", group, status);
    }

    if report.has_failures() {
        anyhow::bail!("Some settings could not be saved");
    }
    Ok(())
}

pub fn fields() {
    for field in SettingsField::iter() {
        println!("{}", field);
    }
}
