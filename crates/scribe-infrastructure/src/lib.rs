pub mod config_service;
pub mod dto;
pub mod http_settings_api;
pub mod memory_settings_api;
pub mod notification;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http_settings_api::HttpSettingsApi;
pub use crate::memory_settings_api::{InMemorySettingsApi, RecordedRequest};
pub use crate::notification::{ChannelNotificationSink, TracingNotificationSink};
pub use crate::paths::ScribePaths;
