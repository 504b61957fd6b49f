//! Criterion benchmarks for the suggestion engine hot paths:
//! cold corpus generation, warm cached lookups, and uncached ranking.

use criterion::{criterion_group, criterion_main, Criterion};

use vhc_core::TaxonomyConfig;
use vhc_taxonomy::ranking::rank_corpus;
use vhc_taxonomy::TaxonomyEngine;

fn bench_corpus_generation(c: &mut Criterion) {
    c.bench_function("expand_cold_section", |b| {
        b.iter_batched(
            TaxonomyEngine::new,
            |engine| engine.suggestions("underside_front_suspension"),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_cached_lookup(c: &mut Criterion) {
    let engine = TaxonomyEngine::new();
    engine.suggestions("underside_front_suspension");
    c.bench_function("suggestions_warm_cache", |b| {
        b.iter(|| engine.suggestions("underside_front_suspension"));
    });
}

fn bench_uncached_rank(c: &mut Criterion) {
    let engine = TaxonomyEngine::with_config(TaxonomyConfig::default());
    let corpus = engine.suggestions("brakes_front_pads_discs");
    c.bench_function("rank_1000_entry_corpus", |b| {
        b.iter(|| rank_corpus(&corpus, "near side front pad"));
    });
}

fn bench_cached_rank(c: &mut Criterion) {
    let engine = TaxonomyEngine::new();
    engine.rank("brakes_front_pads_discs", "nsf pad");
    c.bench_function("rank_warm_cache", |b| {
        b.iter(|| engine.rank("brakes_front_pads_discs", "nsf pad"));
    });
}

criterion_group!(
    benches,
    bench_corpus_generation,
    bench_cached_lookup,
    bench_uncached_rank,
    bench_cached_rank
);
criterion_main!(benches);
