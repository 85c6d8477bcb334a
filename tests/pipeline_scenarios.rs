mod support;

use rand::SeedableRng;
use rand::rngs::StdRng;
use support::wav::{write_empty_wav, write_tone};
use tempfile::tempdir;
use zoolingo::analysis::{FeatureSource, SummarizeOptions, summarize, summarize_with};
use zoolingo::classifier::{ClassifierCatalog, DecisionStage, EmotionClassifier};
use zoolingo::labels::{ANIMALS, EMOTIONS};
use zoolingo::ml::mlp::{MlpHead, MlpScorer};
use zoolingo::speech::NullSynthesizer;
use zoolingo::translator::{DEFAULT_PHRASES, TextTranslator};
use zoolingo::{SummarizeError, TranslationPipeline};

fn heuristic_pipeline() -> TranslationPipeline {
    TranslationPipeline::new(
        SummarizeOptions::default(),
        EmotionClassifier::heuristic_only(ClassifierCatalog::standard()),
        TextTranslator::default(),
        Box::new(NullSynthesizer),
    )
}

#[test]
fn empty_wav_runs_end_to_end_on_surrogate_features() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("silence.wav");
    write_empty_wav(&path);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 44);

    let mut rng = StdRng::seed_from_u64(2024);
    let output = heuristic_pipeline().process(&path, &mut rng).unwrap();
    assert_eq!(output.feature_source, FeatureSource::Surrogate);
    assert!(ANIMALS.contains(&output.animal));
    assert!(EMOTIONS.contains(&output.emotion));
    assert!((0.0..=1.0).contains(&output.confidence));
    assert!(!output.translation.is_empty());
    assert!(output.audio.is_none());
}

#[test]
fn tone_runs_end_to_end_on_decoded_features() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("howl.wav");
    write_tone(&path, 44_100, 1.5, 440.0);

    let mut rng = StdRng::seed_from_u64(5);
    let output = heuristic_pipeline().process(&path, &mut rng).unwrap();
    assert_eq!(output.feature_source, FeatureSource::Decoded);
    assert!((0.70..=0.98).contains(&output.confidence));
}

#[test]
fn nonexistent_input_is_reported() {
    let dir = tempdir().unwrap();
    let err = summarize(&dir.path().join("missing.wav")).unwrap_err();
    assert!(matches!(err, SummarizeError::InputNotFound { .. }));
}

#[test]
fn corrupt_input_yields_a_full_vector() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.ogg");
    std::fs::write(&path, vec![0xABu8; 4096]).unwrap();
    let features = summarize(&path).unwrap();
    assert_eq!(features.len(), 13);
    assert!(features.iter().all(|v| v.is_finite()));
}

#[test]
fn surrogate_features_depend_only_on_name_and_size() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let a = first.path().join("clip.mp3");
    let b = second.path().join("clip.mp3");
    std::fs::write(&a, [1u8; 300]).unwrap();
    std::fs::write(&b, [9u8; 300]).unwrap();

    let options = SummarizeOptions::default();
    let from_a = summarize_with(&a, options).unwrap();
    let from_a_again = summarize_with(&a, options).unwrap();
    let from_b = summarize_with(&b, options).unwrap();
    assert_eq!(from_a.source, FeatureSource::Surrogate);
    assert_eq!(from_a.features, from_a_again.features);
    assert_eq!(from_a.features, from_b.features);

    let c = second.path().join("other.mp3");
    std::fs::write(&c, [1u8; 300]).unwrap();
    assert_ne!(summarize_with(&c, options).unwrap().features, from_a.features);
}

#[test]
fn predict_stays_in_label_sets_for_varied_vectors() {
    let classifier = EmotionClassifier::heuristic_only(ClassifierCatalog::standard());
    let mut rng = StdRng::seed_from_u64(77);
    let high_variance: Vec<f32> = (0..13)
        .map(|i| if i % 2 == 0 { 180.0 } else { -220.0 })
        .collect();
    let vectors: Vec<Vec<f32>> = vec![
        vec![0.0; 13],
        vec![4.2; 13],
        vec![-35.0; 13],
        high_variance,
        vec![1e6; 13],
    ];
    for features in &vectors {
        for _ in 0..50 {
            let result = classifier.predict(features, &mut rng);
            assert!(ANIMALS.contains(&result.animal));
            assert!(EMOTIONS.contains(&result.emotion));
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}

#[test]
fn degenerate_vectors_use_absolute_fallback() {
    let classifier = EmotionClassifier::heuristic_only(ClassifierCatalog::standard());
    let mut rng = StdRng::seed_from_u64(3);
    for features in [Vec::new(), vec![f32::NAN; 13], vec![f32::INFINITY; 13]] {
        let result = classifier.predict(&features, &mut rng);
        assert_eq!(result.stage, DecisionStage::Fallback);
        assert!((0.65..=0.85).contains(&result.confidence));
    }
}

#[test]
fn every_label_pair_and_unknown_names_translate() {
    let translator = TextTranslator::default();
    let mut rng = StdRng::seed_from_u64(1);
    for animal in ANIMALS {
        for emotion in EMOTIONS {
            let sentence = translator.translate(animal.as_str(), emotion.as_str(), &mut rng);
            assert!(!sentence.is_empty());
        }
    }
    for _ in 0..50 {
        let sentence = translator.translate("Zorse", "Ecstatic", &mut rng);
        assert!(DEFAULT_PHRASES.contains(&sentence.as_str()));
    }
}

#[test]
fn dog_happy_is_always_curated() {
    let translator = TextTranslator::default();
    let curated = [
        "I love you, human!",
        "Play with me!",
        "This is the best day ever!",
    ];
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let sentence = translator.translate("Dog", "Happy", &mut rng);
        assert!(curated.contains(&sentence.as_str()), "{sentence}");
        assert!(!DEFAULT_PHRASES.contains(&sentence.as_str()));
    }
}

#[test]
fn trained_model_file_drives_classification() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("emotion_classifier.json");
    let outputs = 23;
    let mut bias2 = vec![0.0f32; outputs];
    bias2[2] = 5.0;
    bias2[15 + 3] = 5.0;
    let model = MlpScorer {
        model_version: 1,
        feature_len: 13,
        hidden_size: 2,
        output_size: outputs,
        head: MlpHead::Concatenated,
        weights1: vec![0.0; 26],
        bias1: vec![0.0; 2],
        weights2: vec![0.0; outputs * 2],
        bias2,
        feature_mean: vec![0.0; 13],
        feature_std: vec![1.0; 13],
    };
    std::fs::write(&model_path, serde_json::to_vec(&model).unwrap()).unwrap();

    let classifier = EmotionClassifier::from_model_path(ClassifierCatalog::standard(), &model_path);
    assert!(classifier.has_model());
    let mut rng = StdRng::seed_from_u64(0);
    let result = classifier.predict(&[0.5; 13], &mut rng);
    assert_eq!(result.stage, DecisionStage::Model);
    assert_eq!(result.animal.as_str(), "Cow");
    assert_eq!(result.emotion.as_str(), "Hungry");
    assert_eq!(result.confidence, 0.99);

    // Wrong input length falls through to the heuristic.
    let result = classifier.predict(&[0.5; 4], &mut rng);
    assert_eq!(result.stage, DecisionStage::Heuristic);
}

#[test]
fn invalid_model_file_means_heuristic_only() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("broken.json");
    std::fs::write(&model_path, b"{\"model_version\": 1}").unwrap();
    let classifier = EmotionClassifier::from_model_path(ClassifierCatalog::standard(), &model_path);
    assert!(!classifier.has_model());
}
