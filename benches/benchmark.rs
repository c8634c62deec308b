// Performance benchmarks for scoring, ranking and clustering
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roomatch::{
    generate_population, CompatibilityScorer, MatchRanker, PopulationClusterer, SameGender,
    SampleConfig, WeightConfig,
};

fn benchmark_score(c: &mut Criterion) {
    let population = generate_population(&SampleConfig::new(2, 42));
    let scorer = CompatibilityScorer::new(WeightConfig::default()).unwrap();

    c.bench_function("score_pair", |b| {
        b.iter(|| black_box(scorer.score(black_box(&population[0]), black_box(&population[1]))));
    });
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_matches");
    let ranker = MatchRanker::new(CompatibilityScorer::new(WeightConfig::default()).unwrap());

    for size in [100, 1000, 10000].iter() {
        let population = generate_population(&SampleConfig::new(*size, 42));
        group.bench_with_input(BenchmarkId::new("top8", size), &population, |b, population| {
            b.iter(|| {
                let results =
                    ranker.find_best_matches(black_box(&population[0]), population, 8, &SameGender);
                black_box(results);
            });
        });
    }

    group.finish();
}

fn benchmark_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster");
    let clusterer = PopulationClusterer::new();

    for size in [50, 1000, 10000].iter() {
        let population = generate_population(&SampleConfig::new(*size, 42));
        group.bench_with_input(BenchmarkId::new("k3", size), &population, |b, population| {
            b.iter(|| {
                let assignment = clusterer.cluster(black_box(population), 3).unwrap();
                black_box(assignment);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_score, benchmark_rank, benchmark_cluster);
criterion_main!(benches);
