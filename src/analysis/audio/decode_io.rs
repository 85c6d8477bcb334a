use std::cell::RefCell;
use std::path::Path;

use super::normalize::{db_to_linear, peak};
use super::prep::{downmix_to_mono_into, fit_to_length, target_length};
use super::resample::resample_linear_into;
use super::silence::trim_silence_with_hysteresis;
use super::{ClipAudio, SILENT_PEAK_DB};

/// Decode the head of a clip, resample to `sample_rate`, trim silence and fit to length.
///
/// Errors cover undecodable input as well as clips with no audible content.
pub(crate) fn decode_clip(
    path: &Path,
    sample_rate: u32,
    max_duration_seconds: f32,
) -> Result<ClipAudio, String> {
    let sample_rate = sample_rate.max(1);
    let target_len = target_length(sample_rate, max_duration_seconds);
    if target_len == 0 {
        return Err(format!(
            "Invalid clip length for {}: {max_duration_seconds}s at {sample_rate} Hz",
            path.display()
        ));
    }
    let decoded =
        crate::analysis::audio_decode::decode_audio(path, Some(max_duration_seconds))?;
    DECODE_SCRATCH.with(|scratch| {
        let mut guard = scratch.borrow_mut();
        let scratch = &mut *guard;
        downmix_to_mono_into(&mut scratch.mono, &decoded.samples, decoded.channels);
        resample_linear_into(
            &mut scratch.resampled,
            &scratch.mono,
            decoded.sample_rate,
            sample_rate,
        );
        let mut mono = trim_silence_with_hysteresis(&scratch.resampled, sample_rate);
        if mono.is_empty() || peak(&mono) < db_to_linear(SILENT_PEAK_DB) {
            return Err(format!("Clip {} is silent", path.display()));
        }
        fit_to_length(&mut mono, target_len);
        Ok(ClipAudio { mono, sample_rate })
    })
}

#[derive(Default)]
struct DecodeScratch {
    mono: Vec<f32>,
    resampled: Vec<f32>,
}

thread_local! {
    static DECODE_SCRATCH: RefCell<DecodeScratch> = RefCell::new(DecodeScratch::default());
}
