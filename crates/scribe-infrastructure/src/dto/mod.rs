mod settings;

pub use settings::SettingsResponseDto;
