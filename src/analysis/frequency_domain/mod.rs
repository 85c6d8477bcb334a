//! Cepstral summary: STFT, log-mel energies, DCT, averaged over frames.

mod mel;
mod stft;

use mel::{MelBank, dct_ortho};

use super::FEATURE_LEN;
use crate::analysis::fft::FftPlan;

pub(crate) const STFT_FRAME_SIZE: usize = 2048;
pub(crate) const STFT_HOP_SIZE: usize = 512;
pub(crate) const MEL_BANDS: usize = 40;
/// Dynamic range kept below the loudest mel cell, in dB.
pub(crate) const TOP_DB: f32 = 80.0;

/// Average the first `FEATURE_LEN` cepstral coefficients across all frames.
pub(crate) fn cepstral_summary(samples: &[f32], sample_rate: u32) -> Result<[f32; FEATURE_LEN], String> {
    let plan = FftPlan::new(STFT_FRAME_SIZE)?;
    let mel = MelBank::new(
        sample_rate,
        STFT_FRAME_SIZE,
        MEL_BANDS,
        0.0,
        sample_rate as f32 * 0.5,
    );
    let mut frames = stft::log_mel_frames(samples, &plan, STFT_HOP_SIZE, &mel)?;
    clamp_dynamic_range(&mut frames, TOP_DB);

    let mut sums = [0.0_f64; FEATURE_LEN];
    for frame in &frames {
        for (sum, coeff) in sums.iter_mut().zip(dct_ortho(frame, FEATURE_LEN)) {
            *sum += coeff as f64;
        }
    }
    let count = frames.len().max(1) as f64;
    let mut out = [0.0_f32; FEATURE_LEN];
    for (slot, sum) in out.iter_mut().zip(sums) {
        *slot = (sum / count) as f32;
    }
    if out.iter().any(|v| !v.is_finite()) {
        return Err("cepstral summary produced non-finite values".to_string());
    }
    Ok(out)
}

fn clamp_dynamic_range(frames: &mut [Vec<f32>], top_db: f32) {
    let max = frames
        .iter()
        .flatten()
        .copied()
        .fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return;
    }
    let floor = max - top_db;
    for value in frames.iter_mut().flatten() {
        *value = value.max(floor);
    }
}
