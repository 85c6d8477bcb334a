//! Text-to-speech behind the [`SpeechSynthesizer`] seam.
//!
//! Synthesis is optional: every failure surfaces as `None`, never as an error.

mod murf;

pub use murf::{MurfClient, SpeechError};

/// Anything that can voice a sentence.
pub trait SpeechSynthesizer: Send + Sync {
    /// Audio bytes for `text`, or `None` when synthesis is unavailable or failed.
    fn synthesize(&self, text: &str) -> Option<Vec<u8>>;

    /// Whether the synthesizer is configured well enough to try.
    fn is_available(&self) -> bool;
}

/// Synthesizer that never produces audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn synthesize(&self, _text: &str) -> Option<Vec<u8>> {
        None
    }

    fn is_available(&self) -> bool {
        false
    }
}
