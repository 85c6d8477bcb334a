use rand::Rng;
use tracing::debug;

use crate::labels::{AnimalLabel, EmotionLabel};

use super::catalog::ClassifierCatalog;
use super::sampling::{normalize, round2, weighted_choice};
use super::stats::{FeatureStats, PitchCategory};
use super::{ClassificationResult, DecisionStage};

/// Total weight shared by animals whose pitch profile matches.
const MATCHING_ANIMAL_WEIGHT: f32 = 2.0;
/// Total weight shared by every other animal.
const OTHER_ANIMAL_WEIGHT: f32 = 0.5;
/// Weight for an emotion the intensity table does not list.
const BASE_EMOTION_FILLER: f32 = 0.05;
/// Weight for an emotion the animal has no preference for.
const ANIMAL_EMOTION_FILLER: f32 = 0.1;
const MAX_HEURISTIC_CONFIDENCE: f32 = 0.98;

/// Statistical weighted-sampling classification. `None` hands over to the next stage.
pub(crate) fn classify<R: Rng + ?Sized>(
    catalog: &ClassifierCatalog,
    features: &[f32],
    rng: &mut R,
) -> Option<ClassificationResult> {
    let stats = FeatureStats::compute(features)?;
    let pitch = stats.pitch();
    let intensity = stats.intensity();
    debug!(
        mean = stats.mean,
        std_dev = stats.std_dev,
        energy = stats.energy,
        zero_crossings = stats.zero_crossings,
        ?pitch,
        ?intensity,
        "Heuristic feature stats"
    );

    let animal_weights = animal_distribution(catalog, pitch)?;
    let animal = weighted_choice(&animal_weights, rng)?;

    let emotion_weights = emotion_distribution(
        catalog.intensity_emotions(intensity),
        catalog.emotion_preferences(animal).unwrap_or(&[]),
    )?;
    let emotion = weighted_choice(&emotion_weights, rng)?;

    let jitter = rng.random_range(0.0..=0.05f32);
    let confidence = (0.70
        + (stats.std_dev / 40.0).min(0.15)
        + (stats.energy / 200.0).min(0.10)
        + jitter)
        .min(MAX_HEURISTIC_CONFIDENCE);

    Some(ClassificationResult {
        animal,
        emotion,
        confidence: round2(confidence),
        stage: DecisionStage::Heuristic,
    })
}

/// Pitch-biased animal distribution, normalized.
pub(crate) fn animal_distribution(
    catalog: &ClassifierCatalog,
    pitch: PitchCategory,
) -> Option<Vec<(AnimalLabel, f32)>> {
    let animals = catalog.animals();
    let profile = catalog.pitch_profile(pitch);
    let matching = animals.iter().filter(|a| profile.contains(a)).count();
    let others = animals.len() - matching;

    let weights: Vec<(AnimalLabel, f32)> = animals
        .iter()
        .map(|&animal| {
            let weight = if profile.contains(&animal) {
                MATCHING_ANIMAL_WEIGHT / matching as f32
            } else {
                OTHER_ANIMAL_WEIGHT / others as f32
            };
            (animal, weight)
        })
        .collect();
    normalize(&weights)
}

/// Even blend of the intensity table and the animal's own preferences, normalized.
///
/// Emotions are ordered base table first, then animal-only entries.
pub(crate) fn emotion_distribution(
    base: &[(EmotionLabel, f32)],
    preferences: &[(EmotionLabel, f32)],
) -> Option<Vec<(EmotionLabel, f32)>> {
    let lookup = |table: &[(EmotionLabel, f32)], emotion: EmotionLabel| {
        table.iter().find(|(e, _)| *e == emotion).map(|(_, w)| *w)
    };

    let mut emotions: Vec<EmotionLabel> = base.iter().map(|(e, _)| *e).collect();
    for (emotion, _) in preferences {
        if !emotions.contains(emotion) {
            emotions.push(*emotion);
        }
    }

    let blended: Vec<(EmotionLabel, f32)> = emotions
        .into_iter()
        .map(|emotion| {
            let base_weight = lookup(base, emotion).unwrap_or(BASE_EMOTION_FILLER);
            let animal_weight = lookup(preferences, emotion).unwrap_or(ANIMAL_EMOTION_FILLER);
            (emotion, (base_weight + animal_weight) / 2.0)
        })
        .collect();
    normalize(&blended)
}
