/// Coarse pitch bucket derived from the feature mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchCategory {
    Low,
    Medium,
    High,
}

impl PitchCategory {
    pub fn from_mean(mean: f32) -> Self {
        if mean < -10.0 {
            Self::Low
        } else if mean < 0.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Coarse loudness/variability bucket derived from spread and energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn from_spread(std_dev: f32, energy: f32) -> Self {
        if std_dev > 12.0 || energy > 100.0 {
            Self::High
        } else if std_dev > 6.0 || energy > 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Summary statistics of a feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStats {
    pub mean: f32,
    /// Population standard deviation.
    pub std_dev: f32,
    pub max: f32,
    pub min: f32,
    pub range: f32,
    /// Sum of squares.
    pub energy: f32,
    /// Sign changes between consecutive elements.
    pub zero_crossings: usize,
}

impl FeatureStats {
    /// `None` for empty or non-finite input.
    pub fn compute(values: &[f32]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return None;
        }
        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let energy = values.iter().map(|v| v * v).sum::<f32>();
        let zero_crossings = values
            .windows(2)
            .filter(|pair| sign(pair[0]) != sign(pair[1]))
            .count();
        let stats = Self {
            mean,
            std_dev: variance.sqrt(),
            max,
            min,
            range: max - min,
            energy,
            zero_crossings,
        };
        stats.is_finite().then_some(stats)
    }

    pub fn pitch(&self) -> PitchCategory {
        PitchCategory::from_mean(self.mean)
    }

    pub fn intensity(&self) -> Intensity {
        Intensity::from_spread(self.std_dev, self.energy)
    }

    fn is_finite(&self) -> bool {
        self.mean.is_finite()
            && self.std_dev.is_finite()
            && self.range.is_finite()
            && self.energy.is_finite()
    }
}

/// Three-way sign: zero is its own class, unlike `f32::signum`.
fn sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
