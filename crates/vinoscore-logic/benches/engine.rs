use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vinoscore_logic::config::AnalyticsConfig;
use vinoscore_logic::report::analyze;
use vinoscore_logic::sweep::{ALCOHOL_GRID, VOLATILE_ACIDITY_GRID};
use vinoscore_logic::{score, sweep, ChemistryRecord, Feature};

fn bench_score(c: &mut Criterion) {
    let record = ChemistryRecord::default();
    c.bench_function("score_sample", |b| b.iter(|| score(black_box(&record))));
}

fn bench_sweeps(c: &mut Criterion) {
    let record = ChemistryRecord::default();
    c.bench_function("sweep_volatile_acidity", |b| {
        b.iter(|| sweep(black_box(&record), Feature::VolatileAcidity, &VOLATILE_ACIDITY_GRID))
    });
    c.bench_function("sweep_alcohol", |b| {
        b.iter(|| sweep(black_box(&record), Feature::Alcohol, &ALCOHOL_GRID))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let config = AnalyticsConfig::default();
    let record = ChemistryRecord::default();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("analyze_sample", |b| {
        b.iter(|| analyze(&config, black_box(&record), &mut rng))
    });
}

criterion_group!(benches, bench_score, bench_sweeps, bench_analyze);
criterion_main!(benches);
