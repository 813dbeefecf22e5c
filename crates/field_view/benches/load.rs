mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use field_view::prelude::{encode, parse, ByteOrder};

fn parse_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/parse");
    for &n in &common::SIZES {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = encode(&common::synthetic_field(n), order);
            group.throughput(common::bytes_throughput(bytes.len()));
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}").to_lowercase(), n),
                &bytes,
                |b, bytes| {
                    b.iter(|| {
                        let field = parse(black_box(bytes), order).expect("parse ok");
                        black_box(field.grid().rows());
                    });
                },
            );
        }
    }
    group.finish();
}

fn encode_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/encode");
    for &n in &common::SIZES {
        let field = common::synthetic_field(n);
        group.throughput(common::elements_throughput(n * n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &field, |b, field| {
            b.iter(|| black_box(encode(black_box(field), ByteOrder::Little)).len());
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = parse_benches, encode_benches
}
criterion_main!(benches);
