use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zoolingo::classifier::{ClassifierCatalog, EmotionClassifier};
use zoolingo::translator::TextTranslator;

const VECTOR_COUNT: usize = 1_000;

fn feature_vectors() -> Vec<[f32; 13]> {
    let mut rng = StdRng::seed_from_u64(99);
    (0..VECTOR_COUNT)
        .map(|_| std::array::from_fn(|_| rng.random_range(-40.0..40.0)))
        .collect()
}

fn bench_heuristic_predict(c: &mut Criterion) {
    let classifier = EmotionClassifier::heuristic_only(ClassifierCatalog::standard());
    let translator = TextTranslator::default();
    let vectors = feature_vectors();
    c.bench_with_input(
        BenchmarkId::new("heuristic_predict_translate", VECTOR_COUNT),
        &vectors,
        |b, vectors| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| {
                for features in vectors {
                    let result = classifier.predict(black_box(features), &mut rng);
                    black_box(translator.translate_labels(result.animal, result.emotion, &mut rng));
                }
            });
        },
    );
}

criterion_group!(benches, bench_heuristic_predict);
criterion_main!(benches);
