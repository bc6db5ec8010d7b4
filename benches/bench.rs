//! Criterion benchmarks for Tweety.
//!
//! Covers the two search strategies on their own and full categorization
//! runs over a synthetic batch of posts.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tweety::categorizer::Categorizer;
use tweety::category::CategoryId;
use tweety::config::KeywordConfiguration;
use tweety::document::Document;
use tweety::strategy::StrategyKind;

/// Generate test posts for benchmarking.
fn generate_test_documents(count: usize) -> Vec<Document> {
    let words = [
        "jalan", "rusak", "kota", "sekolah", "guru", "puskesmas", "dokter", "antrian",
        "futsal", "pemuda", "bantuan", "sosial", "banjir", "warga", "mohon", "segera",
        "diperbaiki", "pagi", "malam", "surabaya", "hari", "ini", "lagi", "sudah",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 8 + (i % 20); // Variable length posts
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(Document::new(doc_words.join(" ")));
    }

    documents
}

fn configuration() -> KeywordConfiguration {
    KeywordConfiguration::new()
        .with_keywords(CategoryId::DinasKesehatan, "puskesmas,dokter,rumah sakit")
        .with_keywords(CategoryId::DinasBinamarga, "jalan rusak,jembatan")
        .with_keywords(CategoryId::DinasPemuda, "futsal,pemuda")
        .with_keywords(CategoryId::DinasPendidikan, "sekolah,guru")
        .with_keywords(CategoryId::DinasSosial, "bantuan sosial,banjir")
}

/// Benchmark the raw search strategies.
fn bench_search_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_strategies");

    let documents = generate_test_documents(1000);
    let texts: Vec<String> = documents.iter().map(|d| d.text.to_lowercase()).collect();

    group.throughput(Throughput::Elements(texts.len() as u64));
    for kind in StrategyKind::ALL {
        let strategy = kind.build();
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                for text in &texts {
                    let found = strategy.solve(black_box(text), black_box("bantuan sosial"));
                    let _ = black_box(found);
                }
            })
        });
    }

    group.finish();
}

/// Benchmark full categorization runs.
fn bench_categorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("categorization");
    group.sample_size(20);

    let categorizer = Categorizer::new().unwrap();
    let documents = generate_test_documents(100);

    group.throughput(Throughput::Elements(documents.len() as u64));
    for kind in StrategyKind::ALL {
        let config = configuration().with_strategy(kind);
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                let response = categorizer.run(black_box(&documents), &config).unwrap();
                black_box(response.count)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search_strategies, bench_categorization);
criterion_main!(benches);
