use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::FEATURE_LEN;
use crate::ml::{ModelOutput, ScoreError, Scorer, softmax};

/// How the output layer is laid out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MlpHead {
    /// One sigmoid-activated array; the classifier splits it.
    Concatenated,
    /// Two softmax heads; the first `animal_outputs` rows score animals.
    Split { animal_outputs: usize },
}

/// Errors raised while loading a model file.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Model at {path} failed validation: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Dense ReLU network over standardized feature vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlpScorer {
    pub model_version: i64,
    pub feature_len: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub head: MlpHead,
    pub weights1: Vec<f32>,
    pub bias1: Vec<f32>,
    pub weights2: Vec<f32>,
    pub bias2: Vec<f32>,
    pub feature_mean: Vec<f32>,
    pub feature_std: Vec<f32>,
}

impl MlpScorer {
    /// Read and validate a model from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate().map_err(|reason| ModelLoadError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.feature_len != FEATURE_LEN {
            return Err(format!(
                "Unsupported feature_len {} (expected {})",
                self.feature_len, FEATURE_LEN
            ));
        }
        let input = self.feature_len;
        let hidden = self.hidden_size;
        let outputs = self.output_size;
        if hidden == 0 || outputs == 0 {
            return Err("hidden_size and output_size must be > 0".to_string());
        }
        if self.weights1.len() != input * hidden {
            return Err("weights1 length mismatch".to_string());
        }
        if self.bias1.len() != hidden {
            return Err("bias1 length mismatch".to_string());
        }
        if self.weights2.len() != outputs * hidden {
            return Err("weights2 length mismatch".to_string());
        }
        if self.bias2.len() != outputs {
            return Err("bias2 length mismatch".to_string());
        }
        if self.feature_mean.len() != input {
            return Err("feature_mean length mismatch".to_string());
        }
        if self.feature_std.len() != input {
            return Err("feature_std length mismatch".to_string());
        }
        if let MlpHead::Split { animal_outputs } = self.head {
            if animal_outputs == 0 || animal_outputs >= outputs {
                return Err(format!(
                    "animal_outputs {animal_outputs} must split {outputs} outputs into two heads"
                ));
            }
        }
        Ok(())
    }

    fn logits(&self, features: &[f32]) -> Vec<f32> {
        let input = self.feature_len;
        let hidden = self.hidden_size;

        let normalized: Vec<f32> = features
            .iter()
            .zip(self.feature_mean.iter().zip(&self.feature_std))
            .map(|(&x, (&mean, &std))| (x - mean) / std.max(1e-6))
            .collect();

        let mut hidden_act = vec![0.0f32; hidden];
        for (h, act) in hidden_act.iter_mut().enumerate() {
            let row = &self.weights1[h * input..(h + 1) * input];
            let sum: f32 = row.iter().zip(&normalized).map(|(w, x)| w * x).sum();
            *act = (sum + self.bias1[h]).max(0.0);
        }

        (0..self.output_size)
            .map(|c| {
                let row = &self.weights2[c * hidden..(c + 1) * hidden];
                let sum: f32 = row.iter().zip(&hidden_act).map(|(w, a)| w * a).sum();
                sum + self.bias2[c]
            })
            .collect()
    }
}

impl Scorer for MlpScorer {
    fn score(&self, features: &[f32]) -> Result<ModelOutput, ScoreError> {
        if features.len() != self.feature_len {
            return Err(ScoreError::InputLength {
                expected: self.feature_len,
                actual: features.len(),
            });
        }
        if features.iter().any(|v| !v.is_finite()) {
            return Err(ScoreError::NonFiniteInput);
        }
        let logits = self.logits(features);
        if logits.iter().any(|v| !v.is_finite()) {
            return Err(ScoreError::NonFiniteOutput);
        }
        Ok(match self.head {
            MlpHead::Concatenated => {
                ModelOutput::Flat(logits.iter().map(|&v| 1.0 / (1.0 + (-v).exp())).collect())
            }
            MlpHead::Split { animal_outputs } => {
                let (animal, emotion) = logits.split_at(animal_outputs);
                ModelOutput::Heads {
                    animal: softmax(animal),
                    emotion: softmax(emotion),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn zero_model(head: MlpHead, outputs: usize) -> MlpScorer {
        MlpScorer {
            model_version: 1,
            feature_len: FEATURE_LEN,
            hidden_size: 4,
            output_size: outputs,
            head,
            weights1: vec![0.0; FEATURE_LEN * 4],
            bias1: vec![0.0; 4],
            weights2: vec![0.0; outputs * 4],
            bias2: vec![0.0; outputs],
            feature_mean: vec![0.0; FEATURE_LEN],
            feature_std: vec![1.0; FEATURE_LEN],
        }
    }

    #[test]
    fn split_heads_are_each_normalized() {
        let model = zero_model(MlpHead::Split { animal_outputs: 15 }, 23);
        model.validate().unwrap();
        let ModelOutput::Heads { animal, emotion } = model.score(&[0.0; FEATURE_LEN]).unwrap()
        else {
            panic!("expected split heads");
        };
        assert_eq!(animal.len(), 15);
        assert_eq!(emotion.len(), 8);
        assert!((animal.iter().sum::<f32>() - 1.0).abs() < 1e-5);
        assert!((emotion.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn concatenated_head_uses_sigmoid() {
        let mut model = zero_model(MlpHead::Concatenated, 23);
        model.bias2[3] = 4.0;
        let ModelOutput::Flat(values) = model.score(&[1.0; FEATURE_LEN]).unwrap() else {
            panic!("expected flat output");
        };
        assert_eq!(values.len(), 23);
        assert!((values[0] - 0.5).abs() < 1e-6);
        assert!(values[3] > 0.98);
    }

    #[test]
    fn wrong_input_length_is_an_error() {
        let model = zero_model(MlpHead::Concatenated, 23);
        assert_eq!(
            model.score(&[0.0; 4]),
            Err(ScoreError::InputLength {
                expected: FEATURE_LEN,
                actual: 4
            })
        );
    }

    #[test]
    fn load_rejects_mismatched_weights() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut model = zero_model(MlpHead::Concatenated, 23);
        model.bias2.pop();
        std::fs::write(&path, serde_json::to_vec(&model).unwrap()).unwrap();
        let err = MlpScorer::load(&path).unwrap_err();
        assert!(matches!(err, ModelLoadError::Invalid { .. }));
    }

    #[test]
    fn load_round_trips_a_valid_model() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = zero_model(MlpHead::Split { animal_outputs: 15 }, 23);
        std::fs::write(&path, serde_json::to_vec_pretty(&model).unwrap()).unwrap();
        let loaded = MlpScorer::load(&path).unwrap();
        assert_eq!(loaded.head, MlpHead::Split { animal_outputs: 15 });
    }
}
