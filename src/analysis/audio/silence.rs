use super::normalize::{db_to_linear, rms};
use super::{
    SILENCE_POST_ROLL_SECONDS, SILENCE_PRE_ROLL_SECONDS, SILENCE_THRESHOLD_OFF_DB,
    SILENCE_THRESHOLD_ON_DB,
};

/// Trim leading and trailing near-silence using an on/off hysteresis gate.
///
/// Returns the input unchanged when no window ever crosses the "on" threshold,
/// so a quiet clip is never trimmed to nothing here; callers decide whether the
/// remainder counts as silent.
pub(super) fn trim_silence_with_hysteresis(samples: &[f32], sample_rate: u32) -> Vec<f32> {
    if samples.is_empty() || sample_rate == 0 {
        return samples.to_vec();
    }
    let window_size = (sample_rate as f32 * 0.02).round().max(1.0) as usize; // 20ms
    let hop = window_size;
    if samples.len() <= window_size {
        return samples.to_vec();
    }

    let threshold_on = db_to_linear(SILENCE_THRESHOLD_ON_DB);
    let threshold_off = db_to_linear(SILENCE_THRESHOLD_OFF_DB);
    let pre_roll = (sample_rate as f32 * SILENCE_PRE_ROLL_SECONDS)
        .round()
        .max(0.0) as usize;
    let post_roll = (sample_rate as f32 * SILENCE_POST_ROLL_SECONDS)
        .round()
        .max(0.0) as usize;

    let mut active_start: Option<usize> = None;
    let mut active_end: Option<usize> = None;

    let mut active = false;
    let mut window_start = 0usize;
    while window_start < samples.len() {
        let window_end = (window_start + window_size).min(samples.len());
        let rms_value = rms(&samples[window_start..window_end]);
        if !active {
            if rms_value >= threshold_on {
                active = true;
                active_start.get_or_insert(window_start);
                active_end = Some(window_end);
            }
        } else if rms_value >= threshold_off {
            active_end = Some(window_end);
        } else {
            active = false;
        }
        window_start = window_start.saturating_add(hop);
    }

    let (Some(active_start), Some(active_end)) = (active_start, active_end) else {
        return samples.to_vec();
    };

    let trimmed_start = active_start.saturating_sub(pre_roll).min(samples.len());
    let trimmed_end = (active_end + post_roll)
        .max(trimmed_start.saturating_add(1))
        .min(samples.len());
    samples[trimmed_start..trimmed_end].to_vec()
}
