//! Criterion benchmarks for the docsearch engine.
//!
//! Compares the three matching strategies over the same generated
//! corpus: the literal scan and regex matchers pay per document byte,
//! the indexed matcher pays per occurrence of the query's first word.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use docsearch::prelude::*;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<(String, String)> {
    let words = vec![
        "search",
        "engine",
        "full",
        "text",
        "index",
        "query",
        "document",
        "term",
        "phrase",
        "literal",
        "regex",
        "positional",
        "normalization",
        "token",
        "boundary",
        "corpus",
        "count",
        "match",
        "scan",
        "lookup",
        "the",
        "a",
        "in",
        "of",
        "and",
        "with",
        "over",
        "under",
        "warp",
        "drive",
        "towel",
        "galaxy",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 200 + (i % 100);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        documents.push((format!("doc_{i}.txt"), doc_words.join(" ")));
    }
    documents
}

fn build_engine(doc_count: usize) -> SearchEngine {
    let source: Vec<Result<(String, String)>> = generate_test_documents(doc_count)
        .into_iter()
        .map(Ok)
        .collect();
    SearchEngine::from_source(source).expect("benchmark corpus should load")
}

fn bench_engine_build(c: &mut Criterion) {
    let documents = generate_test_documents(100);

    c.bench_function("engine_build_100_docs", |b| {
        b.iter(|| {
            let source: Vec<Result<(String, String)>> =
                documents.iter().cloned().map(Ok).collect();
            SearchEngine::from_source(black_box(source)).unwrap()
        })
    });
}

fn bench_single_word_search(c: &mut Criterion) {
    let engine = build_engine(100);
    let mut group = c.benchmark_group("single_word_search");

    group.bench_function("literal", |b| {
        b.iter(|| engine.search(black_box("index"), SearchMode::Literal).unwrap())
    });
    group.bench_function("regex", |b| {
        b.iter(|| engine.search(black_box("index"), SearchMode::Regex).unwrap())
    });
    group.bench_function("indexed", |b| {
        b.iter(|| engine.search(black_box("index"), SearchMode::Indexed).unwrap())
    });

    group.finish();
}

fn bench_multi_word_search(c: &mut Criterion) {
    let engine = build_engine(100);
    let mut group = c.benchmark_group("multi_word_search");

    group.bench_function("literal", |b| {
        b.iter(|| {
            engine
                .search(black_box("full text index"), SearchMode::Literal)
                .unwrap()
        })
    });
    group.bench_function("regex", |b| {
        b.iter(|| {
            engine
                .search(black_box("full text index"), SearchMode::Regex)
                .unwrap()
        })
    });
    group.bench_function("indexed", |b| {
        b.iter(|| {
            engine
                .search(black_box("full text index"), SearchMode::Indexed)
                .unwrap()
        })
    });

    group.finish();
}

fn bench_absent_term_search(c: &mut Criterion) {
    let engine = build_engine(100);
    let mut group = c.benchmark_group("absent_term_search");

    group.bench_function("literal", |b| {
        b.iter(|| {
            engine
                .search(black_box("zzyzx"), SearchMode::Literal)
                .unwrap()
        })
    });
    group.bench_function("indexed", |b| {
        b.iter(|| {
            engine
                .search(black_box("zzyzx"), SearchMode::Indexed)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_engine_build,
    bench_single_word_search,
    bench_multi_word_search,
    bench_absent_term_search
);
criterion_main!(benches);
