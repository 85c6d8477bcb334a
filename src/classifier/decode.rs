use crate::labels::{AnimalLabel, EmotionLabel};
use crate::ml::{ModelOutput, ScoreError, argmax};

use super::sampling::round2;

/// Upper bound on model-reported confidence.
pub(crate) const MAX_MODEL_CONFIDENCE: f32 = 0.99;

/// A model prediction mapped onto label sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DecodedPrediction {
    pub animal: AnimalLabel,
    pub emotion: EmotionLabel,
    pub confidence: f32,
}

/// Map raw model scores onto `animals` and `emotions`.
///
/// Separate heads are arg-maxed independently and scored by the mean of both
/// maxima; a head wider than its label set wraps modulo the label count. A
/// concatenated array long enough for both label sets is cut into an animal
/// segment and the emotion segment right after it, and any trailing values are
/// ignored. Anything shorter is arg-maxed once and the index reduced modulo each
/// label count. Both concatenated forms report the array maximum.
pub(crate) fn decode_output(
    output: &ModelOutput,
    animals: &[AnimalLabel],
    emotions: &[EmotionLabel],
) -> Result<DecodedPrediction, ScoreError> {
    let (animal_idx, emotion_idx, confidence) = match output {
        ModelOutput::Heads { animal, emotion } => {
            ensure_finite(animal)?;
            ensure_finite(emotion)?;
            let (a_idx, a_max) = argmax(animal).ok_or(ScoreError::EmptyOutput)?;
            let (e_idx, e_max) = argmax(emotion).ok_or(ScoreError::EmptyOutput)?;
            (
                a_idx % animals.len().max(1),
                e_idx % emotions.len().max(1),
                (a_max + e_max) / 2.0,
            )
        }
        ModelOutput::Flat(values) => {
            ensure_finite(values)?;
            let (top_idx, top) = argmax(values).ok_or(ScoreError::EmptyOutput)?;
            if values.len() >= animals.len() + emotions.len() {
                let (animal_scores, rest) = values.split_at(animals.len());
                let emotion_scores = &rest[..emotions.len()];
                let (a_idx, _) = argmax(animal_scores).ok_or(ScoreError::EmptyOutput)?;
                let (e_idx, _) = argmax(emotion_scores).ok_or(ScoreError::EmptyOutput)?;
                (a_idx, e_idx, top)
            } else {
                (
                    top_idx % animals.len().max(1),
                    top_idx % emotions.len().max(1),
                    top,
                )
            }
        }
    };

    Ok(DecodedPrediction {
        animal: label_at(animals, animal_idx)?,
        emotion: label_at(emotions, emotion_idx)?,
        confidence: round2(confidence.clamp(0.0, MAX_MODEL_CONFIDENCE)),
    })
}

fn ensure_finite(values: &[f32]) -> Result<(), ScoreError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ScoreError::NonFiniteOutput)
    }
}

fn label_at<T: Copy>(labels: &[T], index: usize) -> Result<T, ScoreError> {
    labels
        .get(index)
        .copied()
        .ok_or(ScoreError::ClassOutOfRange {
            index,
            classes: labels.len(),
        })
}
