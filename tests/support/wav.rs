use std::path::Path;

fn writer(path: &Path, sample_rate: u32) -> hound::WavWriter<std::io::BufWriter<std::fs::File>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create wav parent dirs");
    }
    hound::WavWriter::create(path, spec).expect("create wav writer")
}

pub fn write_test_wav(path: &Path, sample_rate: u32, samples: &[f32]) {
    let mut writer = writer(path, sample_rate);
    for &sample in samples {
        writer.write_sample(sample).expect("write wav sample");
    }
    writer.finalize().expect("finalize wav");
}

/// The canonical 44-byte 16-bit PCM header with zero data bytes.
pub fn write_empty_wav(path: &Path) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22_050,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create wav parent dirs");
    }
    hound::WavWriter::create(path, spec)
        .expect("create wav writer")
        .finalize()
        .expect("finalize wav");
}

pub fn write_tone(path: &Path, sample_rate: u32, seconds: f32, freq: f32) {
    let frames = (sample_rate as f32 * seconds) as usize;
    let samples: Vec<f32> = (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * std::f32::consts::PI * freq * t).sin() * 0.5
        })
        .collect();
    write_test_wav(path, sample_rate, &samples);
}
