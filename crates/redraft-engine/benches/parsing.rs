use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use redraft_engine::parsing::{inline, parse_document, reconstruct};
mod common;

fn bench_parse_and_reassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    let doc = parse_document(&content);
    let rewrites: HashMap<usize, String> = doc
        .extract_processable()
        .into_iter()
        .map(|(pos, text)| (pos, text.to_uppercase()))
        .collect();
    group.bench_function("reconstruct", |b| {
        b.iter(|| {
            let out = reconstruct(&doc.elements, std::hint::black_box(&rewrites));
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_preserve_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let line = "Use `cargo bench` with [criterion](https://docs.rs/criterion) and `black_box` ".repeat(20);
    group.bench_function("preserve_restore", |b| {
        b.iter(|| {
            let (safe, ledger) = inline::preserve(std::hint::black_box(&line));
            std::hint::black_box(inline::restore(&safe, &ledger));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_and_reassemble, bench_preserve_restore);
criterion_main!(benches);
