use std::path::PathBuf;

use crate::analysis::{
    DEFAULT_MAX_DURATION_SECONDS, DEFAULT_SAMPLE_RATE, MAX_DURATION_SECONDS, MAX_SAMPLE_RATE,
    MIN_SAMPLE_RATE,
};

pub(super) const MAX_SPEECH_RETRIES: u32 = 10;

pub(super) fn clamp_duration_seconds(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value.min(MAX_DURATION_SECONDS)
    } else {
        default_max_duration_seconds()
    }
}

pub(super) fn clamp_sample_rate(value: u32) -> u32 {
    value.clamp(MIN_SAMPLE_RATE, MAX_SAMPLE_RATE)
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_max_duration_seconds() -> f32 {
    DEFAULT_MAX_DURATION_SECONDS
}

pub(super) fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

pub(super) fn default_model_path() -> PathBuf {
    PathBuf::from("models/emotion_classifier.json")
}

pub(super) fn default_speech_endpoint() -> String {
    "https://api.murf.ai/v1/speech/generate".to_string()
}

pub(super) fn default_voice_id() -> String {
    "en-US-1".to_string()
}

pub(super) fn default_voice_style() -> String {
    "General".to_string()
}

pub(super) fn default_speech_timeout_seconds() -> u64 {
    30
}

pub(super) fn default_speech_retries() -> u32 {
    2
}

pub(super) fn default_speech_sample_rate() -> u32 {
    48_000
}

pub(super) fn default_speech_format() -> String {
    "MP3".to_string()
}

pub(super) fn default_output_directory() -> PathBuf {
    PathBuf::from("temp_uploads")
}
