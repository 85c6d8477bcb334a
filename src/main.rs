//! Command-line front end: translate one animal clip and print the result as JSON.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zoolingo::config::{self, AppSettings};
use zoolingo::logging;
use zoolingo::pipeline::{TranslationPipeline, save_audio};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Default)]
struct CliOptions {
    input: Option<PathBuf>,
    max_seconds: Option<f32>,
    sample_rate: Option<u32>,
    model: Option<PathBuf>,
    speak: bool,
    out_dir: Option<PathBuf>,
    seed: Option<u64>,
    health: bool,
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    let settings = build_settings(&options)?;

    if let Err(err) = logging::init(&settings.log_level) {
        eprintln!("Logging disabled: {err}");
    }
    for warning in settings.validate().map_err(|err| err.to_string())? {
        tracing::warn!("{warning}");
    }

    let pipeline = TranslationPipeline::from_settings(&settings, options.speak);
    if options.health {
        return print_json(&pipeline.health());
    }

    let input = options
        .input
        .ok_or_else(|| format!("An audio file is required\n\n{}", help_text()))?;
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let output = pipeline
        .process(&input, &mut rng)
        .map_err(|err| err.to_string())?;

    let audio_file = if output.audio.is_some() {
        let stem = format!("{:016x}", rng.random::<u64>());
        save_audio(&output, &settings.output.directory, &stem)
            .map_err(|err| format!("Failed to save audio: {err}"))?
    } else {
        None
    };

    let mut value = serde_json::to_value(&output).map_err(|err| err.to_string())?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "audio_file".to_string(),
            audio_file
                .map(|path| serde_json::Value::String(path.display().to_string()))
                .unwrap_or(serde_json::Value::Null),
        );
    }
    print_json(&value)
}

fn build_settings(options: &CliOptions) -> Result<AppSettings, String> {
    let mut settings = config::load_or_default().map_err(|err| err.to_string())?;
    if let Some(seconds) = options.max_seconds {
        settings.analysis.max_duration_seconds = seconds;
    }
    if let Some(rate) = options.sample_rate {
        settings.analysis.sample_rate = rate;
    }
    if let Some(model) = &options.model {
        settings.model.path = model.clone();
    }
    if let Some(dir) = &options.out_dir {
        settings.output.directory = dir.clone();
    }
    Ok(settings.normalized())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--max-seconds" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--max-seconds requires a value".to_string())?;
                options.max_seconds = Some(
                    value
                        .parse::<f32>()
                        .map_err(|_| format!("Invalid --max-seconds value: {value}"))?,
                );
            }
            "--sample-rate" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--sample-rate requires a value".to_string())?;
                options.sample_rate = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid --sample-rate value: {value}"))?,
                );
            }
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                options.model = Some(PathBuf::from(value));
            }
            "--out" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--out requires a value".to_string())?;
                options.out_dir = Some(PathBuf::from(value));
            }
            "--seed" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--seed requires a value".to_string())?;
                options.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid --seed value: {value}"))?,
                );
            }
            "--speak" => options.speak = true,
            "--health" => options.health = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown argument: {flag}\n\n{}", help_text()));
            }
            path => {
                if options.input.is_some() {
                    return Err(format!("Unexpected extra input: {path}"));
                }
                options.input = Some(PathBuf::from(path));
            }
        }
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "zoolingo",
        "",
        "Usage:",
        "  zoolingo <audio> [options]",
        "  zoolingo --health",
        "",
        "Options:",
        "  --max-seconds <s>   Seconds of audio analysed (default: 3).",
        "  --sample-rate <hz>  Analysis sample rate (default: 22050).",
        "  --model <path>      Classifier model JSON.",
        "  --speak             Synthesize the translation as speech.",
        "  --out <dir>         Directory for synthesized audio.",
        "  --seed <n>          Seed the random source for reproducible output.",
        "  --health            Print service health and exit.",
    ]
    .join("\n")
}
