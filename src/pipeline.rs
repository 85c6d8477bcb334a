//! Audio clip to classification, sentence and optional speech.

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{self, FeatureSource, SummarizeError, SummarizeOptions};
use crate::classifier::{ClassifierCatalog, EmotionClassifier};
use crate::config::AppSettings;
use crate::labels::{AnimalLabel, EmotionLabel};
use crate::speech::{MurfClient, NullSynthesizer, SpeechSynthesizer};
use crate::translator::TextTranslator;

/// Everything produced for one clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub animal: AnimalLabel,
    pub emotion: EmotionLabel,
    pub confidence: f32,
    pub translation: String,
    pub feature_source: FeatureSource,
    #[serde(skip)]
    pub audio: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub services: ServiceHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceHealth {
    pub classifier: &'static str,
    pub ml_model: &'static str,
    pub speech: &'static str,
}

pub struct TranslationPipeline {
    options: SummarizeOptions,
    classifier: EmotionClassifier,
    translator: TextTranslator,
    synthesizer: Box<dyn SpeechSynthesizer>,
}

impl TranslationPipeline {
    pub fn new(
        options: SummarizeOptions,
        classifier: EmotionClassifier,
        translator: TextTranslator,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            options,
            classifier,
            translator,
            synthesizer,
        }
    }

    /// Wire the stock catalog and phrases to configured settings.
    ///
    /// Speech is only attempted when `speak` is set.
    pub fn from_settings(settings: &AppSettings, speak: bool) -> Self {
        let classifier =
            EmotionClassifier::from_model_path(ClassifierCatalog::standard(), &settings.model.path);
        let synthesizer: Box<dyn SpeechSynthesizer> = if speak {
            Box::new(MurfClient::new(settings.speech.clone()))
        } else {
            Box::new(NullSynthesizer)
        };
        Self::new(
            settings.summarize_options(),
            classifier,
            TextTranslator::default(),
            synthesizer,
        )
    }

    /// Run one clip end to end. Fails only when `path` does not exist.
    pub fn process<R: Rng + ?Sized>(
        &self,
        path: &Path,
        rng: &mut R,
    ) -> Result<PipelineOutput, SummarizeError> {
        let summary = analysis::summarize_with(path, self.options)?;
        let result = self.classifier.predict(&summary.features, rng);
        let translation = self
            .translator
            .translate_labels(result.animal, result.emotion, rng);
        info!(
            animal = %result.animal,
            emotion = %result.emotion,
            confidence = result.confidence,
            stage = ?result.stage,
            "Classified {}",
            path.display()
        );
        let audio = self.synthesizer.synthesize(&translation);
        Ok(PipelineOutput {
            animal: result.animal,
            emotion: result.emotion,
            confidence: result.confidence,
            translation,
            feature_source: summary.source,
            audio,
        })
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy",
            services: ServiceHealth {
                classifier: "operational",
                ml_model: if self.classifier.has_model() {
                    "loaded"
                } else {
                    "using_fallback"
                },
                speech: if self.synthesizer.is_available() {
                    "operational"
                } else {
                    "degraded"
                },
            },
        }
    }
}

/// Write synthesized audio as `response_<stem>.mp3` under `dir`.
///
/// Returns `Ok(None)` when the output carries no audio.
pub fn save_audio(
    output: &PipelineOutput,
    dir: &Path,
    stem: &str,
) -> std::io::Result<Option<PathBuf>> {
    let Some(audio) = output.audio.as_deref() else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("response_{stem}.mp3"));
    if let Err(err) = std::fs::write(&path, audio) {
        warn!("Failed to write {}: {err}", path.display());
        return Err(err);
    }
    Ok(Some(path))
}
