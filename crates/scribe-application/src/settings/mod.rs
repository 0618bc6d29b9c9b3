//! Settings application services.
//!
//! This module contains the settings page use case and the pieces it is
//! built from: the snapshot cache, the aggregate saving indicator, and the
//! submission coordinator.

mod cache;
mod coordinator;
mod page;
mod saving;

pub use cache::SnapshotCache;
pub use coordinator::{GroupOutcome, GroupPatch, SubmissionCoordinator, SubmissionReport};
pub use page::SettingsPage;
pub use saving::{SavingGuard, SavingIndicator};
