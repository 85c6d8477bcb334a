//! Closed label sets for species and emotional states.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Species the classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnimalLabel {
    Dog,
    Cat,
    Cow,
    Lion,
    Bird,
    Horse,
    Elephant,
    Sheep,
    Goat,
    Pig,
    Chicken,
    Duck,
    Monkey,
    Parrot,
    Wolf,
}

/// Emotional states the classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmotionLabel {
    Happy,
    Angry,
    Sad,
    Hungry,
    Pain,
    Excited,
    Scared,
    Curious,
    Playful,
    Calm,
    Demanding,
    Alert,
    Mischievous,
    Proud,
    Bossy,
    Singing,
    Chatty,
    Aggressive,
    Lonely,
}

/// Every animal, in canonical order. Model output indices follow this order.
pub const ANIMALS: [AnimalLabel; 15] = [
    AnimalLabel::Dog,
    AnimalLabel::Cat,
    AnimalLabel::Cow,
    AnimalLabel::Lion,
    AnimalLabel::Bird,
    AnimalLabel::Horse,
    AnimalLabel::Elephant,
    AnimalLabel::Sheep,
    AnimalLabel::Goat,
    AnimalLabel::Pig,
    AnimalLabel::Chicken,
    AnimalLabel::Duck,
    AnimalLabel::Monkey,
    AnimalLabel::Parrot,
    AnimalLabel::Wolf,
];

/// Every emotion, in canonical order.
pub const EMOTIONS: [EmotionLabel; 19] = [
    EmotionLabel::Happy,
    EmotionLabel::Angry,
    EmotionLabel::Sad,
    EmotionLabel::Hungry,
    EmotionLabel::Pain,
    EmotionLabel::Excited,
    EmotionLabel::Scared,
    EmotionLabel::Curious,
    EmotionLabel::Playful,
    EmotionLabel::Calm,
    EmotionLabel::Demanding,
    EmotionLabel::Alert,
    EmotionLabel::Mischievous,
    EmotionLabel::Proud,
    EmotionLabel::Bossy,
    EmotionLabel::Singing,
    EmotionLabel::Chatty,
    EmotionLabel::Aggressive,
    EmotionLabel::Lonely,
];

/// Emotions that apply to most animals. Model emotion heads index into this list.
pub const COMMON_EMOTIONS: [EmotionLabel; 8] = [
    EmotionLabel::Happy,
    EmotionLabel::Angry,
    EmotionLabel::Sad,
    EmotionLabel::Hungry,
    EmotionLabel::Pain,
    EmotionLabel::Excited,
    EmotionLabel::Scared,
    EmotionLabel::Curious,
];

/// Return all supported animals.
pub fn supported_animals() -> Vec<AnimalLabel> {
    ANIMALS.to_vec()
}

/// Return all supported emotions.
pub fn supported_emotions() -> Vec<EmotionLabel> {
    EMOTIONS.to_vec()
}

/// Return the emotions shared by most animals.
pub fn common_emotions() -> Vec<EmotionLabel> {
    COMMON_EMOTIONS.to_vec()
}

/// Error returned when a label name is not part of its closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} label: {value}")]
pub struct UnknownLabel {
    kind: &'static str,
    value: String,
}

impl AnimalLabel {
    /// Canonical display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Cow => "Cow",
            Self::Lion => "Lion",
            Self::Bird => "Bird",
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Sheep => "Sheep",
            Self::Goat => "Goat",
            Self::Pig => "Pig",
            Self::Chicken => "Chicken",
            Self::Duck => "Duck",
            Self::Monkey => "Monkey",
            Self::Parrot => "Parrot",
            Self::Wolf => "Wolf",
        }
    }
}

impl EmotionLabel {
    /// Canonical display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Angry => "Angry",
            Self::Sad => "Sad",
            Self::Hungry => "Hungry",
            Self::Pain => "Pain",
            Self::Excited => "Excited",
            Self::Scared => "Scared",
            Self::Curious => "Curious",
            Self::Playful => "Playful",
            Self::Calm => "Calm",
            Self::Demanding => "Demanding",
            Self::Alert => "Alert",
            Self::Mischievous => "Mischievous",
            Self::Proud => "Proud",
            Self::Bossy => "Bossy",
            Self::Singing => "Singing",
            Self::Chatty => "Chatty",
            Self::Aggressive => "Aggressive",
            Self::Lonely => "Lonely",
        }
    }
}

impl fmt::Display for AnimalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalLabel {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ANIMALS
            .iter()
            .copied()
            .find(|animal| animal.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLabel {
                kind: "animal",
                value: value.to_string(),
            })
    }
}

impl FromStr for EmotionLabel {
    type Err = UnknownLabel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        EMOTIONS
            .iter()
            .copied()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLabel {
                kind: "emotion",
                value: value.to_string(),
            })
    }
}
