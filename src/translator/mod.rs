//! Animal and emotion pairs to a human sentence.

mod phrases;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::labels::{AnimalLabel, EmotionLabel};

pub use phrases::{DEFAULT_PHRASES, PhraseTable};

/// Best-effort phrase lookup; every input yields a sentence.
#[derive(Debug, Clone, Default)]
pub struct TextTranslator {
    phrases: PhraseTable,
}

impl TextTranslator {
    pub fn new(phrases: PhraseTable) -> Self {
        Self { phrases }
    }

    /// Translate free-form names. Names outside the label sets resolve to the default phrases.
    pub fn translate<R: Rng + ?Sized>(&self, animal: &str, emotion: &str, rng: &mut R) -> String {
        match (animal.parse::<AnimalLabel>(), emotion.parse::<EmotionLabel>()) {
            (Ok(animal), Ok(emotion)) => self.translate_labels(animal, emotion, rng),
            _ => pick(self.phrases.defaults(), rng),
        }
    }

    pub fn translate_labels<R: Rng + ?Sized>(
        &self,
        animal: AnimalLabel,
        emotion: EmotionLabel,
        rng: &mut R,
    ) -> String {
        pick(self.phrases.candidates(animal, emotion), rng)
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }
}

fn pick<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> String {
    candidates
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| DEFAULT_PHRASES[0].to_string())
}
