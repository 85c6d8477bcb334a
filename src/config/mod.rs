//! TOML-backed application settings with environment overrides.

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{CONFIG_FILE_NAME, config_path, load_or_default, load_settings_from, save, save_to_path};
pub use types::{
    AnalysisSettings, AppSettings, Environment, ModelSettings, OutputSettings, SpeechSettings,
};
