//! Two-layer perceptron scorer loaded from JSON.

mod model;

pub use model::{MlpHead, MlpScorer, ModelLoadError};
