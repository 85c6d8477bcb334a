use std::collections::BTreeMap;

use crate::labels::{AnimalLabel, EmotionLabel};

/// Used whenever a pair has no curated phrases.
pub const DEFAULT_PHRASES: [&str; 3] = ["I don't know what to say.", "Hello there.", "What was that?"];

/// Curated sentences per (animal, emotion) pair.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    entries: BTreeMap<(AnimalLabel, EmotionLabel), Vec<String>>,
    defaults: Vec<String>,
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PhraseTable {
    pub fn standard() -> Self {
        use AnimalLabel::*;
        use EmotionLabel::*;

        let rows: &[(AnimalLabel, EmotionLabel, &[&str])] = &[
            (Dog, Happy, &["I love you, human!", "Play with me!", "This is the best day ever!"]),
            (Dog, Angry, &["Back off!", "I'm warning you!", "Grrr, go away!"]),
            (Dog, Sad, &["I miss you.", "Where did you go?", "I'm lonely."]),
            (Dog, Hungry, &["Feed me!", "Is that bacon?", "I'm starving here!"]),
            (Dog, Pain, &["Ouch, that hurts.", "Help me, please.", "I'm not feeling well."]),
            (Dog, Excited, &["Walk? Did you say walk?", "You're home! You're home!", "Ball! Throw the ball!"]),
            (Dog, Playful, &["Chase me!", "Tug of war, now!", "Bet you can't catch me!"]),
            (Cat, Happy, &["Purr... perfect.", "You may pet me now.", "I tolerate you."]),
            (Cat, Angry, &["Hiss! Don't touch me!", "I will scratch you.", "Leave me be."]),
            (Cat, Sad, &["My bowl is empty.", "Why is the door closed?", "Sigh."]),
            (Cat, Hungry, &["Feed me now, servant.", "Meow! Food!", "I can see the bottom of my bowl."]),
            (Cat, Pain, &["Hiss... stay away.", "It hurts.", "Don't touch."]),
            (Cat, Demanding, &["Open this door. Now.", "The sunny spot is mine.", "Attention. Me. Immediately."]),
            (Cow, Calm, &["Just chewing my cud.", "Nice grass today.", "Moo. All is well."]),
            (Cow, Hungry, &["Where's the hay?", "More grass, please.", "Is it feeding time yet?"]),
            (Cow, Sad, &["Where is my calf?", "The field feels empty.", "Moo..."]),
            (Lion, Proud, &["This is my kingdom.", "Bow before me.", "Hear me roar!"]),
            (Lion, Angry, &["Leave my territory!", "You dare approach?", "ROAR!"]),
            (Lion, Hungry, &["The hunt begins.", "I smell dinner.", "Who's on the menu?"]),
            (Bird, Happy, &["What a lovely morning!", "Tweet tweet, life is good!", "Sunshine!"]),
            (Bird, Singing, &["La la la!", "Listen to my song!", "Tweet-tweet-tweedle!"]),
            (Bird, Alert, &["Danger! Danger!", "Cat nearby!", "Everyone, take cover!"]),
            (Horse, Excited, &["Let's gallop!", "Open the gate!", "Race you to the fence!"]),
            (Horse, Calm, &["The pasture is peaceful.", "Easy now.", "Brush my mane, please."]),
            (Elephant, Happy, &["Splash time!", "I remember you, friend.", "Trumpets for everyone!"]),
            (Elephant, Sad, &["I miss my herd.", "I never forget.", "The waterhole is dry."]),
            (Sheep, Scared, &["Is that a wolf?", "Stay close to the flock!", "Baaa! Run!"]),
            (Goat, Mischievous, &["I'm eating your shirt.", "Guess who climbed the roof?", "Oops, was that yours?"]),
            (Pig, Hungry, &["Slop, please!", "Is that an apple?", "Oink! Dinner!"]),
            (Pig, Happy, &["Mud bath time!", "Life is good in the mud.", "Oink oink!"]),
            (Chicken, Bossy, &["Everyone in line!", "This is my coop.", "Stop pecking my corn!"]),
            (Chicken, Scared, &["The sky is falling!", "Fox! Fox!", "Bawk! Hide!"]),
            (Duck, Demanding, &["Bread. Now.", "Quack! Hand it over!", "This pond needs snacks."]),
            (Monkey, Mischievous, &["Catch me if you can!", "I took your banana.", "Ooh ooh, trouble time!"]),
            (Parrot, Chatty, &["Hello! Hello! Hello!", "Pretty bird! Pretty bird!", "Who's a good bird?"]),
            (Parrot, Demanding, &["Cracker! Now!", "Let me out!", "Scratch my head!"]),
            (Wolf, Lonely, &["Where is my pack?", "Awooo...", "I howl at the moon alone."]),
            (Wolf, Aggressive, &["Stay away from my pack.", "This is our forest.", "Grrrowl!"]),
        ];

        let entries = rows
            .iter()
            .map(|(animal, emotion, phrases)| {
                (
                    (*animal, *emotion),
                    phrases.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect();

        Self {
            entries,
            defaults: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Candidates for a pair; the default list when the pair has no entry.
    pub fn candidates(&self, animal: AnimalLabel, emotion: EmotionLabel) -> &[String] {
        self.entries
            .get(&(animal, emotion))
            .filter(|phrases| !phrases.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(&self.defaults)
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    pub fn contains(&self, animal: AnimalLabel, emotion: EmotionLabel) -> bool {
        self.entries.contains_key(&(animal, emotion))
    }
}
