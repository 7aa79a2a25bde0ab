//! Criterion benchmarks for fan arithmetic.
//! Focus angular widths: {30, 120, 300} degrees; wider fans partition into
//! more quadrant pieces and exercise the pairwise case dispatch harder.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fanarith::prelude::*;

fn draw_pair(cfg: FanCfg, index: u64) -> (ComplexFan, ComplexFan) {
    (
        draw_fan(cfg, ReplayToken { seed: 43, index }),
        draw_fan(cfg, ReplayToken { seed: 44, index }),
    )
}

fn bench_fan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan");
    for &span in &[30.0f64, 120.0, 300.0] {
        let cfg = FanCfg {
            angle_span_max: span,
            ..FanCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("addition", span as u64), &cfg, |b, &cfg| {
            let mut index = 0u64;
            b.iter_batched(
                || {
                    index += 1;
                    draw_pair(cfg, index)
                },
                |(x, y)| {
                    let _res = x.addition(y).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("product", span as u64), &cfg, |b, &cfg| {
            let mut index = 0u64;
            b.iter_batched(
                || {
                    index += 1;
                    draw_pair(cfg, index)
                },
                |(x, y)| {
                    let _res = x.product(y);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fan);
criterion_main!(benches);
