use super::mel::MelBank;
use crate::analysis::fft::{Complex32, FftPlan, hann_window};

/// Log-mel frames (dB) for every hop across `samples`; always at least one frame.
pub(super) fn log_mel_frames(
    samples: &[f32],
    plan: &FftPlan,
    hop_size: usize,
    mel: &MelBank,
) -> Result<Vec<Vec<f32>>, String> {
    let frame_size = plan.len();
    let hop_size = hop_size.max(1);
    let window = hann_window(frame_size);
    let mut complex = vec![Complex32::default(); frame_size];
    let mut frames = Vec::new();
    let mut start = 0usize;
    loop {
        fill_windowed(&mut complex, samples, start, &window);
        plan.process(&mut complex)?;
        let power = power_spectrum(&complex);
        frames.push(mel.log_mel_db(&power));
        start = start.saturating_add(hop_size);
        if start + frame_size > samples.len() {
            break;
        }
    }
    Ok(frames)
}

fn fill_windowed(target: &mut [Complex32], samples: &[f32], start: usize, window: &[f32]) {
    for (i, cell) in target.iter_mut().enumerate() {
        let src = samples.get(start + i).copied().unwrap_or(0.0);
        let win = window.get(i).copied().unwrap_or(1.0);
        *cell = Complex32::new(sanitize(src) * win, 0.0);
    }
}

fn sanitize(sample: f32) -> f32 {
    if sample.is_finite() {
        sample.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

fn power_spectrum(fft: &[Complex32]) -> Vec<f32> {
    let bins = fft.len() / 2 + 1;
    fft[..bins].iter().map(|c| c.norm_sqr().max(0.0)).collect()
}
