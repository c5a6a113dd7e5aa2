use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipt::{
    build_corpus, ingest_row, translate_record, PipelineConfig, RawIngredientRow, RecordConfig,
    TaggerConfig,
};

fn sample_row() -> RawIngredientRow {
    RawIngredientRow::from_pairs([
        ("input", "1 (14.5 ounce) can diced tomatoes, drained and coarsely chopped"),
        ("index", "3"),
        ("name", "diced tomatoes"),
        ("qty", "1"),
        ("range_end", ""),
        ("unit", "can"),
        ("comment", "14.5 ounce, drained and coarsely chopped"),
    ])
}

fn translate_bench(c: &mut Criterion) {
    let row = ingest_row(sample_row(), &RecordConfig::default()).expect("bench row ingests");
    let cfg = TaggerConfig::default();

    c.bench_function("translate_record_single", |b| {
        b.iter(|| {
            let translated =
                translate_record(black_box(&row.display), black_box(&row.record), &cfg)
                    .expect("bench translate");
            black_box(translated);
        });
    });
}

fn corpus_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_corpus");
    for rows in [100usize, 1_000] {
        let batch: Vec<RawIngredientRow> = (0..rows).map(|_| sample_row()).collect();
        group.throughput(Throughput::Elements(rows as u64));

        for use_parallel in [false, true] {
            let cfg = PipelineConfig {
                use_parallel,
                ..PipelineConfig::default()
            };
            let label = if use_parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, rows), &batch, |b, batch| {
                b.iter(|| {
                    let corpus = build_corpus(batch.clone(), &cfg).expect("bench corpus");
                    black_box(corpus);
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, translate_bench, corpus_bench);
criterion_main!(benches);
