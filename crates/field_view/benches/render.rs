mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use field_view::prelude::{render, Colormap, Normalization, RenderConfig};

fn render_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for &n in &common::SIZES {
        let field = common::synthetic_field(n);
        group.throughput(common::elements_throughput(n * n));

        let linear = RenderConfig::new().with_colormap(Colormap::Viridis);
        group.bench_with_input(BenchmarkId::new("linear", n), &field, |b, field| {
            b.iter(|| {
                let image = render(black_box(field), &linear).expect("render ok");
                black_box(image.pixels.len());
            });
        });

        let log = RenderConfig::new()
            .with_colormap(Colormap::Magma)
            .with_normalization(Normalization::Log);
        group.bench_with_input(BenchmarkId::new("log", n), &field, |b, field| {
            b.iter(|| {
                let image = render(black_box(field), &log).expect("render ok");
                black_box(image.pixels.len());
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = render_benches
}
criterion_main!(benches);
