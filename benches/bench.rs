//! Criterion benchmarks for the Wordforge core:
//! - the positional similarity metric
//! - the structural validator's pairwise scan
//! - the streaming conflict resolver

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use wordforge::corpus::{Lemma, LexicalRecord, PartOfSpeech};
use wordforge::resolver::{ConflictResolver, ResolverConfig};
use wordforge::similarity::{SimilarityParams, similarity};
use wordforge::wordlist::{ValidationPolicy, validate};

/// Generate `count` distinct four-letter words over a conflict-free alphabet.
fn generate_words(count: usize) -> Vec<String> {
    let letters = ['b', 'c', 'f', 'g', 'h', 'i', 'j', 'k'];
    let mut words = Vec::with_capacity(count);
    'outer: for a in letters {
        for b in letters {
            for c in letters {
                for d in letters {
                    words.push(format!("{a}{b}{c}{d}"));
                    if words.len() == count {
                        break 'outer;
                    }
                }
            }
        }
    }
    words
}

fn bench_similarity(c: &mut Criterion) {
    let params = SimilarityParams::default();
    let pairs = [
        ("build", "built"),
        ("woman", "women"),
        ("quick", "quickly"),
        ("abandon", "admit"),
        ("able", "cable"),
    ];

    let mut group = c.benchmark_group("similarity");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("known_pairs", |b| {
        b.iter(|| {
            for (w0, w1) in pairs {
                black_box(similarity(black_box(w0), black_box(w1), &params));
            }
        })
    });
    group.finish();
}

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator");
    for size in [256, 1024, 2048] {
        let words = generate_words(size);
        let policy = ValidationPolicy {
            required_count: size,
            ..Default::default()
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("validate_{size}"), |b| {
            b.iter(|| black_box(validate(black_box(&words), &policy)))
        });
    }
    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let records: Vec<LexicalRecord> = generate_words(1024)
        .into_iter()
        .enumerate()
        .map(|(i, word)| LexicalRecord {
            lemmas: vec![Lemma::of_word(&word, PartOfSpeech::Noun)],
            word,
            pos: PartOfSpeech::Noun,
            compound: false,
            occurrences: 1000,
            relative_frequency: 100,
            line_index: i,
        })
        .collect();

    let mut group = c.benchmark_group("resolver");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("offer_1024", |b| {
        b.iter(|| {
            let mut resolver = ConflictResolver::new(ResolverConfig::default());
            for record in records.iter().cloned() {
                resolver.offer(record);
            }
            black_box(resolver.accepted().len())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_similarity, bench_validator, bench_resolver);
criterion_main!(benches);
