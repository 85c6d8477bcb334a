//! Static weight tables the classifier samples from.

use std::collections::BTreeMap;

use crate::labels::{ANIMALS, AnimalLabel, COMMON_EMOTIONS, EmotionLabel};

use super::stats::{Intensity, PitchCategory};

/// Unnormalized weights over a subset of labels. Order is significant for sampling.
pub type Weights<T> = Vec<(T, f32)>;

/// Immutable classification configuration, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct ClassifierCatalog {
    animals: Vec<AnimalLabel>,
    common_emotions: Vec<EmotionLabel>,
    emotion_preferences: BTreeMap<AnimalLabel, Weights<EmotionLabel>>,
    pitch_profiles: BTreeMap<PitchCategory, Vec<AnimalLabel>>,
    intensity_emotions: BTreeMap<Intensity, Weights<EmotionLabel>>,
}

impl Default for ClassifierCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ClassifierCatalog {
    /// The stock tables covering every supported animal.
    pub fn standard() -> Self {
        use AnimalLabel::*;
        use EmotionLabel::*;

        let emotion_preferences = BTreeMap::from([
            (
                Dog,
                vec![
                    (Happy, 0.25),
                    (Excited, 0.2),
                    (Playful, 0.15),
                    (Hungry, 0.1),
                    (Sad, 0.1),
                    (Scared, 0.1),
                    (Curious, 0.05),
                    (Angry, 0.05),
                ],
            ),
            (
                Cat,
                vec![
                    (Happy, 0.15),
                    (Demanding, 0.2),
                    (Angry, 0.15),
                    (Curious, 0.15),
                    (Hungry, 0.1),
                    (Scared, 0.1),
                    (Sad, 0.1),
                    (Excited, 0.05),
                ],
            ),
            (
                Cow,
                vec![
                    (Calm, 0.25),
                    (Happy, 0.2),
                    (Hungry, 0.2),
                    (Sad, 0.15),
                    (Angry, 0.1),
                    (Pain, 0.1),
                ],
            ),
            (
                Lion,
                vec![
                    (Proud, 0.25),
                    (Angry, 0.2),
                    (Hungry, 0.2),
                    (Happy, 0.15),
                    (Sad, 0.1),
                    (Pain, 0.1),
                ],
            ),
            (
                Bird,
                vec![
                    (Happy, 0.2),
                    (Singing, 0.2),
                    (Alert, 0.15),
                    (Hungry, 0.15),
                    (Scared, 0.1),
                    (Curious, 0.1),
                    (Angry, 0.05),
                    (Sad, 0.05),
                ],
            ),
            (
                Horse,
                vec![
                    (Happy, 0.2),
                    (Calm, 0.2),
                    (Excited, 0.15),
                    (Hungry, 0.15),
                    (Angry, 0.1),
                    (Scared, 0.1),
                    (Sad, 0.05),
                    (Pain, 0.05),
                ],
            ),
            (
                Elephant,
                vec![
                    (Happy, 0.2),
                    (Sad, 0.2),
                    (Hungry, 0.2),
                    (Angry, 0.15),
                    (Pain, 0.15),
                    (Calm, 0.1),
                ],
            ),
            (
                Sheep,
                vec![(Happy, 0.3), (Scared, 0.3), (Hungry, 0.2), (Calm, 0.2)],
            ),
            (
                Goat,
                vec![
                    (Mischievous, 0.3),
                    (Happy, 0.25),
                    (Angry, 0.2),
                    (Hungry, 0.15),
                    (Curious, 0.1),
                ],
            ),
            (
                Pig,
                vec![
                    (Happy, 0.3),
                    (Hungry, 0.3),
                    (Curious, 0.2),
                    (Excited, 0.1),
                    (Calm, 0.1),
                ],
            ),
            (
                Chicken,
                vec![
                    (Happy, 0.25),
                    (Scared, 0.25),
                    (Bossy, 0.2),
                    (Hungry, 0.15),
                    (Alert, 0.15),
                ],
            ),
            (
                Duck,
                vec![(Happy, 0.4), (Demanding, 0.3), (Curious, 0.15), (Scared, 0.15)],
            ),
            (
                Monkey,
                vec![
                    (Mischievous, 0.3),
                    (Happy, 0.25),
                    (Angry, 0.2),
                    (Excited, 0.15),
                    (Curious, 0.1),
                ],
            ),
            (
                Parrot,
                vec![
                    (Chatty, 0.3),
                    (Happy, 0.25),
                    (Angry, 0.2),
                    (Excited, 0.15),
                    (Demanding, 0.1),
                ],
            ),
            (
                Wolf,
                vec![
                    (Aggressive, 0.25),
                    (Happy, 0.2),
                    (Lonely, 0.2),
                    (Hungry, 0.2),
                    (Alert, 0.15),
                ],
            ),
        ]);

        let pitch_profiles = BTreeMap::from([
            (PitchCategory::Low, vec![Cow, Elephant, Lion, Horse]),
            (PitchCategory::Medium, vec![Dog, Wolf, Pig, Sheep, Goat]),
            (
                PitchCategory::High,
                vec![Cat, Bird, Chicken, Duck, Monkey, Parrot],
            ),
        ]);

        let intensity_emotions = BTreeMap::from([
            (
                Intensity::High,
                vec![
                    (Angry, 0.2),
                    (Excited, 0.2),
                    (Scared, 0.15),
                    (Pain, 0.1),
                    (Happy, 0.1),
                    (Demanding, 0.1),
                    (Alert, 0.1),
                    (Aggressive, 0.05),
                ],
            ),
            (
                Intensity::Medium,
                vec![
                    (Happy, 0.2),
                    (Hungry, 0.2),
                    (Curious, 0.15),
                    (Playful, 0.15),
                    (Excited, 0.1),
                    (Demanding, 0.1),
                    (Mischievous, 0.05),
                    (Chatty, 0.05),
                ],
            ),
            (
                Intensity::Low,
                vec![
                    (Calm, 0.25),
                    (Sad, 0.2),
                    (Happy, 0.2),
                    (Hungry, 0.15),
                    (Curious, 0.1),
                    (Lonely, 0.05),
                    (Pain, 0.05),
                ],
            ),
        ]);

        Self {
            animals: ANIMALS.to_vec(),
            common_emotions: COMMON_EMOTIONS.to_vec(),
            emotion_preferences,
            pitch_profiles,
            intensity_emotions,
        }
    }

    /// Build a catalog from custom tables. Empty animal or common-emotion lists are rejected.
    pub fn from_parts(
        animals: Vec<AnimalLabel>,
        common_emotions: Vec<EmotionLabel>,
        emotion_preferences: BTreeMap<AnimalLabel, Weights<EmotionLabel>>,
        pitch_profiles: BTreeMap<PitchCategory, Vec<AnimalLabel>>,
        intensity_emotions: BTreeMap<Intensity, Weights<EmotionLabel>>,
    ) -> Result<Self, String> {
        if animals.is_empty() {
            return Err("catalog needs at least one animal".to_string());
        }
        if common_emotions.is_empty() {
            return Err("catalog needs at least one common emotion".to_string());
        }
        Ok(Self {
            animals,
            common_emotions,
            emotion_preferences,
            pitch_profiles,
            intensity_emotions,
        })
    }

    pub fn animals(&self) -> &[AnimalLabel] {
        &self.animals
    }

    pub fn common_emotions(&self) -> &[EmotionLabel] {
        &self.common_emotions
    }

    /// Registered emotion preferences for `animal`, if any.
    pub fn emotion_preferences(&self, animal: AnimalLabel) -> Option<&[(EmotionLabel, f32)]> {
        self.emotion_preferences.get(&animal).map(Vec::as_slice)
    }

    /// Animals registered under a pitch bucket; empty when the bucket is unregistered.
    pub fn pitch_profile(&self, pitch: PitchCategory) -> &[AnimalLabel] {
        self.pitch_profiles
            .get(&pitch)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Base emotion distribution for an intensity, falling back to the medium table.
    pub fn intensity_emotions(&self, intensity: Intensity) -> &[(EmotionLabel, f32)] {
        self.intensity_emotions
            .get(&intensity)
            .or_else(|| self.intensity_emotions.get(&Intensity::Medium))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_animal_has_preferences_summing_to_one() {
        let catalog = ClassifierCatalog::standard();
        for &animal in catalog.animals() {
            let prefs = catalog.emotion_preferences(animal).unwrap();
            let total: f32 = prefs.iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-4, "{animal} sums to {total}");
        }
    }

    #[test]
    fn pitch_profiles_partition_the_animals() {
        let catalog = ClassifierCatalog::standard();
        let mut seen: Vec<AnimalLabel> = [PitchCategory::Low, PitchCategory::Medium, PitchCategory::High]
            .into_iter()
            .flat_map(|pitch| catalog.pitch_profile(pitch).to_vec())
            .collect();
        seen.sort();
        let mut all = catalog.animals().to_vec();
        all.sort();
        assert_eq!(seen, all);
    }

    #[test]
    fn missing_intensity_uses_medium_table() {
        let catalog = ClassifierCatalog::from_parts(
            vec![AnimalLabel::Dog],
            vec![EmotionLabel::Happy],
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::from([(Intensity::Medium, vec![(EmotionLabel::Curious, 1.0)])]),
        )
        .unwrap();
        assert_eq!(
            catalog.intensity_emotions(Intensity::High),
            &[(EmotionLabel::Curious, 1.0)]
        );
    }

    #[test]
    fn empty_animal_list_is_rejected() {
        assert!(
            ClassifierCatalog::from_parts(
                Vec::new(),
                vec![EmotionLabel::Happy],
                BTreeMap::new(),
                BTreeMap::new(),
                BTreeMap::new(),
            )
            .is_err()
        );
    }
}
