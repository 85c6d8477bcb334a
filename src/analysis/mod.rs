//! Feature summarization: audio clip to a fixed 13-coefficient cepstral vector.
//!
//! Decoding, silence trimming and the cepstral transform run first. Anything
//! that goes wrong after the input has been located degrades to a
//! deterministic stand-in vector, so downstream classification always has
//! something to work with.

pub(crate) mod audio;
pub(crate) mod audio_decode;
pub(crate) mod fft;
pub(crate) mod frequency_domain;
pub(crate) mod surrogate;

use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Number of coefficients in every summary vector.
pub const FEATURE_LEN: usize = 13;
/// Default amount of audio considered, in seconds.
pub const DEFAULT_MAX_DURATION_SECONDS: f32 = 3.0;
/// Default analysis sample rate.
pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;
pub const MIN_SAMPLE_RATE: u32 = 8_000;
pub const MAX_SAMPLE_RATE: u32 = 192_000;
pub const MAX_DURATION_SECONDS: f32 = 60.0;

/// Cepstral-style summary of one clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f32; FEATURE_LEN]);

impl Deref for FeatureVector {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

/// Which path produced a feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSource {
    /// Decoded audio run through the cepstral transform.
    Decoded,
    /// Deterministic stand-in derived from the input's identity.
    Surrogate,
}

/// A feature vector plus the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub features: FeatureVector,
    pub source: FeatureSource,
}

/// Tuning knobs for summarization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummarizeOptions {
    /// Seconds of audio read from the start of the clip; shorter clips are zero-padded.
    pub max_duration_seconds: f32,
    /// Analysis sample rate in Hz.
    pub sample_rate: u32,
}

impl SummarizeOptions {
    /// Clamp the sample rate into `[MIN_SAMPLE_RATE, MAX_SAMPLE_RATE]` and the
    /// duration into `(0, MAX_DURATION_SECONDS]`; non-positive or non-finite
    /// durations reset to the default.
    pub fn normalized(self) -> Self {
        let max_duration_seconds =
            if self.max_duration_seconds.is_finite() && self.max_duration_seconds > 0.0 {
                self.max_duration_seconds.min(MAX_DURATION_SECONDS)
            } else {
                DEFAULT_MAX_DURATION_SECONDS
            };
        Self {
            max_duration_seconds,
            sample_rate: self.sample_rate.clamp(MIN_SAMPLE_RATE, MAX_SAMPLE_RATE),
        }
    }
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            max_duration_seconds: DEFAULT_MAX_DURATION_SECONDS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// The one failure summarization reports.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Audio input not found: {path}")]
    InputNotFound { path: PathBuf },
}

/// Summarize a clip with default options.
pub fn summarize(path: &Path) -> Result<FeatureVector, SummarizeError> {
    summarize_with(path, SummarizeOptions::default()).map(|summary| summary.features)
}

/// Summarize a clip, reporting whether the decoded or surrogate path was used.
///
/// Only a missing input is an error; unreadable, corrupt or silent audio
/// falls back to the surrogate vector. Options are clamped with
/// [`SummarizeOptions::normalized`] first.
pub fn summarize_with(path: &Path, options: SummarizeOptions) -> Result<Summary, SummarizeError> {
    let options = options.normalized();
    let byte_len = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(SummarizeError::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            warn!("Cannot stat {}: {err}; using surrogate features", path.display());
            0
        }
    };

    match decoded_features(path, options) {
        Ok(features) => {
            debug!("Summarized {} from decoded audio", path.display());
            Ok(Summary {
                features: FeatureVector(features),
                source: FeatureSource::Decoded,
            })
        }
        Err(err) => {
            warn!("{err}; using surrogate features");
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(Summary {
                features: FeatureVector(surrogate::surrogate_features(&name, byte_len)),
                source: FeatureSource::Surrogate,
            })
        }
    }
}

fn decoded_features(path: &Path, options: SummarizeOptions) -> Result<[f32; FEATURE_LEN], String> {
    let clip = audio::decode_clip(path, options.sample_rate, options.max_duration_seconds)?;
    frequency_domain::cepstral_summary(&clip.mono, clip.sample_rate)
        .map_err(|err| format!("Feature extraction failed for {}: {err}", path.display()))
}
