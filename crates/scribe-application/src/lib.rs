//! Application layer for Scribe.
//!
//! This crate provides the use cases that coordinate the domain types of
//! `scribe-core` with whatever `SettingsApi` and `NotificationSink` the host
//! supplies.

pub mod settings;

pub use settings::{SettingsPage, SnapshotCache, SubmissionCoordinator};
