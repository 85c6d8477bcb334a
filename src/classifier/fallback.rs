use rand::Rng;

use super::catalog::ClassifierCatalog;
use super::sampling::{round2, weighted_choice};
use super::{ClassificationResult, DecisionStage};

/// Last-resort classification; never fails for a valid catalog.
pub(crate) fn classify<R: Rng + ?Sized>(
    catalog: &ClassifierCatalog,
    rng: &mut R,
) -> ClassificationResult {
    let animals = catalog.animals();
    let animal = animals[rng.random_range(0..animals.len())];

    let emotion = catalog
        .emotion_preferences(animal)
        .and_then(|prefs| weighted_choice(prefs, rng))
        .unwrap_or_else(|| {
            let common = catalog.common_emotions();
            common[rng.random_range(0..common.len())]
        });

    ClassificationResult {
        animal,
        emotion,
        confidence: round2(rng.random_range(0.65..=0.85f32)),
        stage: DecisionStage::Fallback,
    }
}
