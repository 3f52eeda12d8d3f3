use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use redraft_engine::{compare, repetition};
mod common;

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment");
    group.sample_size(10);

    for sentences in [10, 100, 500] {
        let original = common::generate_prose(sentences);
        let rewritten = common::perturb(&original);
        group.bench_with_input(
            BenchmarkId::new("compare", sentences),
            &(original, rewritten),
            |b, (original, rewritten)| {
                b.iter(|| std::hint::black_box(compare(original, rewritten)));
            },
        );
    }

    group.finish();
}

fn bench_repetition(c: &mut Criterion) {
    let mut group = c.benchmark_group("repetition");

    let text = common::generate_prose(500);
    group.bench_function("analyze", |b| {
        b.iter(|| {
            std::hint::black_box(repetition::analyze(
                std::hint::black_box(&text),
                repetition::DEFAULT_WINDOW,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compare, bench_repetition);
criterion_main!(benches);
