use chart_optimize::downsample::reduce_lttb;
use chart_optimize::Point;
use criterion::{criterion_group, criterion_main, black_box, BatchSize, BenchmarkId, Criterion};

fn gen_points(n: usize) -> Vec<Point> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        v.push(Point::Pair(i as f64, y));
    }
    v
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_points(n);
        for &target in &[1_000usize, 2_000usize, 5_000usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_t{target}")),
                &target,
                |b, &t| {
                    b.iter_batched(
                        || data.clone(),
                        |d| {
                            let _ = black_box(reduce_lttb(&d, t));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lttb);
criterion_main!(benches);
