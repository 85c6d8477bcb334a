/// Triangular mel filterbank over one FFT frame's power spectrum.
pub(super) struct MelBank {
    filters: Vec<Vec<(usize, f32)>>,
}

/// Power floor before the dB conversion.
const POWER_FLOOR: f32 = 1e-10;

impl MelBank {
    pub(super) fn new(
        sample_rate: u32,
        fft_len: usize,
        mel_bands: usize,
        f_min: f32,
        f_max: f32,
    ) -> Self {
        let bins = mel_bins(sample_rate, fft_len, mel_bands, f_min, f_max);
        Self {
            filters: build_filters(&bins, mel_bands),
        }
    }

    #[cfg(test)]
    pub(super) fn bands(&self) -> usize {
        self.filters.len()
    }

    /// Mel band energies of one frame, in decibels relative to unit power.
    pub(super) fn log_mel_db(&self, power: &[f32]) -> Vec<f32> {
        apply_filters(&self.filters, power)
            .into_iter()
            .map(|e| 10.0 * e.max(POWER_FLOOR).log10())
            .collect()
    }
}

fn mel_bins(
    sample_rate: u32,
    fft_len: usize,
    mel_bands: usize,
    f_min: f32,
    f_max: f32,
) -> Vec<usize> {
    let sr = sample_rate.max(1) as f32;
    let nyquist = sr * 0.5;
    let f_max = f_max.min(nyquist).max(f_min);
    let mel_min = hz_to_mel(f_min);
    let mel_max = hz_to_mel(f_max);
    (0..(mel_bands + 2))
        .map(|i| {
            let t = i as f32 / (mel_bands + 1) as f32;
            freq_to_bin(mel_to_hz(mel_min + (mel_max - mel_min) * t), sample_rate, fft_len)
        })
        .collect()
}

fn build_filters(bins: &[usize], mel_bands: usize) -> Vec<Vec<(usize, f32)>> {
    (0..mel_bands)
        .map(|m| {
            let left = bins[m];
            let center = bins[m + 1].max(left + 1);
            let right = bins[m + 2].max(center + 1);
            build_tri_filter(left, center, right)
        })
        .collect()
}

fn apply_filters(filters: &[Vec<(usize, f32)>], power: &[f32]) -> Vec<f32> {
    filters
        .iter()
        .map(|filter| {
            let sum: f64 = filter
                .iter()
                .map(|&(bin, weight)| {
                    let p = power.get(bin).copied().unwrap_or(0.0).max(0.0) as f64;
                    p * weight as f64
                })
                .sum();
            sum as f32
        })
        .collect()
}

fn build_tri_filter(left: usize, center: usize, right: usize) -> Vec<(usize, f32)> {
    let mut weights = Vec::new();
    for bin in left..=right {
        let w = if bin < center {
            (bin as f32 - left as f32) / (center as f32 - left as f32)
        } else {
            (right as f32 - bin as f32) / (right as f32 - center as f32)
        };
        if w > 0.0 {
            weights.push((bin, w));
        }
    }
    weights
}

fn freq_to_bin(freq_hz: f32, sample_rate: u32, fft_len: usize) -> usize {
    let nyquist = sample_rate.max(1) as f32 * 0.5;
    let freq = freq_hz.clamp(0.0, nyquist);
    (((freq * fft_len as f32) / sample_rate.max(1) as f32).floor() as usize).min(fft_len / 2)
}

fn hz_to_mel(hz: f32) -> f32 {
    2595.0_f32 * (1.0 + hz / 700.0).log10()
}

fn mel_to_hz(mel: f32) -> f32 {
    700.0_f32 * (10.0_f32.powf(mel / 2595.0) - 1.0)
}

/// Orthonormal DCT-II, keeping the first `count` coefficients.
pub(super) fn dct_ortho(values: &[f32], count: usize) -> Vec<f32> {
    let n = values.len().max(1) as f64;
    (0..count)
        .map(|k| {
            let sum: f64 = values
                .iter()
                .enumerate()
                .map(|(m, &v)| {
                    let angle = std::f64::consts::PI * k as f64 * (m as f64 + 0.5) / n;
                    v as f64 * angle.cos()
                })
                .sum();
            let scale = if k == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
            (sum * scale) as f32
        })
        .collect()
}
