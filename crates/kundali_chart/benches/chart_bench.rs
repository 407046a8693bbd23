use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{BirthInput, ChartConfig, generate_chart, pipeline};

fn pipeline_bench(c: &mut Criterion) {
    let input = BirthInput::new(1990, 5, 15, 14, 30, 0, 28.6139, 77.2090);
    let config = ChartConfig::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("generate_chart", |b| {
        b.iter(|| generate_chart(black_box(&input)))
    });
    group.bench_function("astronomical_stage", |b| {
        b.iter(|| pipeline::astronomical(black_box(&input), &config))
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
