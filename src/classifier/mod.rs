//! Animal and emotion classification from a feature vector.
//!
//! Classification is a cascade of named stages: trained-model inference (when
//! a scorer was supplied at construction), the statistical heuristic, and an
//! absolute fallback. Each stage either produces a result or hands over to the
//! next one, so [`EmotionClassifier::predict`] never fails.

mod catalog;
mod decode;
mod fallback;
mod heuristic;
mod sampling;
mod stats;

use std::path::Path;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::labels::{AnimalLabel, EmotionLabel};
use crate::ml::Scorer;
use crate::ml::mlp::MlpScorer;

pub use catalog::{ClassifierCatalog, Weights};
pub use stats::{FeatureStats, Intensity, PitchCategory};

/// Outcome of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub animal: AnimalLabel,
    pub emotion: EmotionLabel,
    /// In `[0, 1]`, rounded to two decimals.
    pub confidence: f32,
    #[serde(skip)]
    pub stage: DecisionStage,
}

/// Which stage of the cascade produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionStage {
    Model,
    Heuristic,
    Fallback,
}

enum Capability {
    HeuristicOnly,
    Model(Box<dyn Scorer>),
}

/// Classifier over an immutable catalog, optionally backed by a trained scorer.
pub struct EmotionClassifier {
    catalog: ClassifierCatalog,
    capability: Capability,
}

impl EmotionClassifier {
    pub fn heuristic_only(catalog: ClassifierCatalog) -> Self {
        Self {
            catalog,
            capability: Capability::HeuristicOnly,
        }
    }

    pub fn with_scorer(catalog: ClassifierCatalog, scorer: Box<dyn Scorer>) -> Self {
        Self {
            catalog,
            capability: Capability::Model(scorer),
        }
    }

    /// Load an MLP model from `path`, or run heuristic-only if it is absent or invalid.
    pub fn from_model_path(catalog: ClassifierCatalog, path: &Path) -> Self {
        if !path.exists() {
            warn!(
                "Model not found at {}; using heuristic classification",
                path.display()
            );
            return Self::heuristic_only(catalog);
        }
        match MlpScorer::load(path) {
            Ok(model) => {
                info!(
                    "Loaded classifier model v{} from {}",
                    model.model_version,
                    path.display()
                );
                Self::with_scorer(catalog, Box::new(model))
            }
            Err(err) => {
                warn!("{err}; using heuristic classification");
                Self::heuristic_only(catalog)
            }
        }
    }

    pub fn has_model(&self) -> bool {
        matches!(self.capability, Capability::Model(_))
    }

    /// Classify a feature vector. Never fails.
    pub fn predict<R: Rng + ?Sized>(&self, features: &[f32], rng: &mut R) -> ClassificationResult {
        if let Some(result) = self.model_stage(features) {
            return result;
        }
        if let Some(result) = heuristic::classify(&self.catalog, features, rng) {
            return result;
        }
        warn!(
            "Heuristic classification failed for {} features; using random fallback",
            features.len()
        );
        fallback::classify(&self.catalog, rng)
    }

    fn model_stage(&self, features: &[f32]) -> Option<ClassificationResult> {
        let Capability::Model(scorer) = &self.capability else {
            return None;
        };
        let decoded = scorer.score(features).and_then(|output| {
            decode::decode_output(
                &output,
                self.catalog.animals(),
                self.catalog.common_emotions(),
            )
        });
        match decoded {
            Ok(prediction) => {
                debug!(
                    animal = %prediction.animal,
                    emotion = %prediction.emotion,
                    confidence = prediction.confidence,
                    "Model prediction"
                );
                Some(ClassificationResult {
                    animal: prediction.animal,
                    emotion: prediction.emotion,
                    confidence: prediction.confidence,
                    stage: DecisionStage::Model,
                })
            }
            Err(err) => {
                warn!("Model prediction failed: {err}; using heuristic classification");
                None
            }
        }
    }
}
