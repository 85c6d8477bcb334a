use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::SummarizeOptions;

use super::ConfigError;
use super::defaults::*;

/// Deployment flavour; production refuses to run without a speech API key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Invalid {
                reason: format!("unknown environment '{other}'"),
            }),
        }
    }
}

/// Application settings persisted as TOML.
///
/// Config keys: `environment`, `log_level`, `analysis`, `model`, `speech`, `output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub speech: SpeechSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            analysis: AnalysisSettings::default(),
            model: ModelSettings::default(),
            speech: SpeechSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

/// Feature summarization knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_max_duration_seconds")]
    pub max_duration_seconds: f32,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_duration_seconds: default_max_duration_seconds(),
            sample_rate: default_sample_rate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// JSON model file; a missing file means heuristic-only classification.
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

/// Text-to-speech client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_voice_style")]
    pub style: String,
    #[serde(default = "default_speech_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Extra attempts after the first request.
    #[serde(default = "default_speech_retries")]
    pub retries: u32,
    #[serde(default = "default_speech_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_speech_format")]
    pub format: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_speech_endpoint(),
            voice_id: default_voice_id(),
            style: default_voice_style(),
            timeout_seconds: default_speech_timeout_seconds(),
            retries: default_speech_retries(),
            sample_rate: default_speech_sample_rate(),
            format: default_speech_format(),
        }
    }
}

impl SpeechSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Where synthesized audio is written.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl AppSettings {
    /// Clamp values into usable ranges.
    pub fn normalized(mut self) -> Self {
        self.analysis.max_duration_seconds =
            clamp_duration_seconds(self.analysis.max_duration_seconds);
        self.analysis.sample_rate = clamp_sample_rate(self.analysis.sample_rate);
        self.speech.retries = self.speech.retries.min(MAX_SPEECH_RETRIES);
        if self.speech.timeout_seconds == 0 {
            self.speech.timeout_seconds = default_speech_timeout_seconds();
        }
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
        self
    }

    /// Apply `ENVIRONMENT`, `LOG_LEVEL`, `MODEL_PATH` and `MURF_API_KEY` from `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ENVIRONMENT") {
            self.environment = value.parse()?;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            self.log_level = value.trim().to_ascii_lowercase();
        }
        if let Some(value) = lookup("MODEL_PATH") {
            self.model.path = PathBuf::from(value);
        }
        if let Some(value) = lookup("MURF_API_KEY") {
            self.speech.api_key = Some(value);
        }
        Ok(())
    }

    /// Check the settings are usable, returning warnings for tolerable gaps.
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        let mut warnings = Vec::new();
        if self.speech.api_key().is_none() {
            if self.environment == Environment::Production {
                return Err(ConfigError::Invalid {
                    reason: "MURF_API_KEY is required in production".to_string(),
                });
            }
            warnings.push("MURF_API_KEY not set; speech synthesis disabled".to_string());
        }
        if !self.speech.endpoint.starts_with("http://") && !self.speech.endpoint.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                reason: format!("speech endpoint '{}' is not an http(s) URL", self.speech.endpoint),
            });
        }
        Ok(warnings)
    }

    pub fn summarize_options(&self) -> SummarizeOptions {
        SummarizeOptions {
            max_duration_seconds: self.analysis.max_duration_seconds,
            sample_rate: self.analysis.sample_rate,
        }
    }
}
