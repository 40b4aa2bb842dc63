use cardio_risk::{assess, compute_vai};
use cardio_types::{ClinicalInputs, Sex};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_assess(c: &mut Criterion) {
    let inputs = ClinicalInputs::new(Sex::Female, 48, 24.5, 92.0, 1.9, 1.2)
        .unwrap()
        .with_lipoprotein_a(75.0)
        .unwrap();

    c.bench_function("compute_vai", |b| b.iter(|| compute_vai(black_box(&inputs))));
    c.bench_function("assess", |b| b.iter(|| assess(black_box(&inputs))));
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
