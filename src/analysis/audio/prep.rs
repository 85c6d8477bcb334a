use super::normalize::sanitize_sample;

pub(crate) fn downmix_to_mono_into(out: &mut Vec<f32>, samples: &[f32], channels: u16) {
    let channels = channels.max(1) as usize;
    out.clear();
    if channels == 1 {
        out.extend(samples.iter().copied().map(sanitize_sample));
        return;
    }
    let frames = samples.len() / channels;
    out.reserve(frames);
    for frame in samples.chunks_exact(channels) {
        let sum: f32 = frame.iter().copied().map(sanitize_sample).sum();
        out.push(sum / channels as f32);
    }
}

/// Truncate or zero-pad so the clip is exactly `target_len` samples long.
pub(crate) fn fit_to_length(samples: &mut Vec<f32>, target_len: usize) {
    if samples.len() > target_len {
        samples.truncate(target_len);
    } else {
        samples.resize(target_len, 0.0);
    }
}

pub(crate) fn target_length(sample_rate: u32, max_duration_seconds: f32) -> usize {
    if !max_duration_seconds.is_finite() || max_duration_seconds <= 0.0 {
        return 0;
    }
    (sample_rate as f64 * max_duration_seconds as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downmix_averages_channels() {
        let mut mono = Vec::new();
        downmix_to_mono_into(&mut mono, &[1.0, -1.0, 0.5, 0.25], 2);
        assert_eq!(mono.len(), 2);
        assert!((mono[0] - 0.0).abs() < 1e-6);
        assert!((mono[1] - 0.375).abs() < 1e-6);
    }

    #[test]
    fn downmix_drops_trailing_partial_frame() {
        let mut mono = Vec::new();
        downmix_to_mono_into(&mut mono, &[0.2, 0.4, 0.9], 2);
        assert_eq!(mono.len(), 1);
    }

    #[test]
    fn fit_to_length_pads_and_truncates() {
        let mut short = vec![0.5; 3];
        fit_to_length(&mut short, 5);
        assert_eq!(short, vec![0.5, 0.5, 0.5, 0.0, 0.0]);

        let mut long = vec![0.5; 10];
        fit_to_length(&mut long, 4);
        assert_eq!(long.len(), 4);
    }

    #[test]
    fn target_length_uses_rate_and_duration() {
        assert_eq!(target_length(22_050, 3.0), 66_150);
        assert_eq!(target_length(22_050, f32::NAN), 0);
    }
}
