mod decode_io;
mod normalize;
mod prep;
mod resample;
mod silence;

pub(crate) const SILENCE_THRESHOLD_ON_DB: f32 = -45.0;
pub(crate) const SILENCE_THRESHOLD_OFF_DB: f32 = -55.0;
pub(crate) const SILENCE_PRE_ROLL_SECONDS: f32 = 0.01;
pub(crate) const SILENCE_POST_ROLL_SECONDS: f32 = 0.005;
/// Clips whose peak stays under this level are treated as silent.
pub(crate) const SILENT_PEAK_DB: f32 = -80.0;

pub(crate) use decode_io::decode_clip;

/// Mono clip decoded, trimmed and fitted to the summary length.
#[derive(Debug)]
pub(crate) struct ClipAudio {
    pub(crate) mono: Vec<f32>,
    pub(crate) sample_rate: u32,
}
