//! Animal vocalization classification and translation.
//!
//! A clip is summarized into a 13-coefficient cepstral vector, classified into
//! an animal and an emotion, mapped to a sentence and optionally voiced.

/// Clip decoding and cepstral feature summaries.
pub mod analysis;
/// Settings and log directory resolution.
pub mod app_dirs;
/// Staged animal/emotion classification.
pub mod classifier;
/// TOML settings.
pub mod config;
pub(crate) mod http_client;
/// Closed animal and emotion label sets.
pub mod labels;
/// Tracing setup.
pub mod logging;
/// Model inference.
pub mod ml;
/// End-to-end clip processing.
pub mod pipeline;
/// Text-to-speech clients.
pub mod speech;
/// Phrase lookup.
pub mod translator;

pub use analysis::{FeatureVector, SummarizeError, SummarizeOptions, summarize, summarize_with};
pub use classifier::{ClassificationResult, EmotionClassifier};
pub use labels::{AnimalLabel, EmotionLabel};
pub use pipeline::{PipelineOutput, TranslationPipeline};
pub use translator::TextTranslator;
