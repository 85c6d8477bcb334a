//! Trained-model inference behind the [`Scorer`] seam.
//!
//! The classifier only needs per-class scores; how they are produced is up to
//! the scorer. The bundled implementation is a small JSON-serialized MLP.

pub mod mlp;

use thiserror::Error;

/// Raw per-class scores emitted by a model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// Separate animal and emotion score arrays.
    Heads { animal: Vec<f32>, emotion: Vec<f32> },
    /// One array holding animal scores followed by emotion scores.
    Flat(Vec<f32>),
}

/// Failure while running or decoding a model.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoreError {
    #[error("Model expects {expected} features, got {actual}")]
    InputLength { expected: usize, actual: usize },
    #[error("Model input contains non-finite values")]
    NonFiniteInput,
    #[error("Model produced an empty output")]
    EmptyOutput,
    #[error("Model produced non-finite scores")]
    NonFiniteOutput,
    #[error("Model class index {index} is outside the {classes} known labels")]
    ClassOutOfRange { index: usize, classes: usize },
}

/// Anything that can turn a feature vector into class scores.
pub trait Scorer: Send + Sync {
    fn score(&self, features: &[f32]) -> Result<ModelOutput, ScoreError>;
}

/// Compute a numerically-stable softmax for a set of logits.
pub fn softmax(raw: &[f32]) -> Vec<f32> {
    if raw.is_empty() {
        return Vec::new();
    }
    let max = raw.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut exps: Vec<f32> = raw.iter().map(|&v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![1.0 / raw.len() as f32; raw.len()];
    }
    for v in &mut exps {
        *v /= sum;
    }
    exps
}

/// Index and value of the largest score; `None` for an empty slice.
pub fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &v) in values.iter().enumerate() {
        if best.is_none_or(|(_, best_val)| v > best_val) {
            best = Some((idx, v));
        }
    }
    best
}
