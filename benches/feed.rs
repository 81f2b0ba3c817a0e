use criterion::{black_box, BenchmarkId, Criterion};
use criterion::{criterion_group, criterion_main};

use chronicle_timeline::Timeline;

const ELEMENTS: i64 = 100_000;
const STRIDE: i64 = 1_000;

fn bench_sweep(c: &mut Criterion) {
    let line = Timeline::new(0..ELEMENTS, |v| v * STRIDE).expect("timeline");
    let span = line.duration() + 1;

    let mut group = c.benchmark_group("sweep");
    for &step in &[STRIDE / 10, STRIDE, STRIDE * 100] {
        group.bench_with_input(BenchmarkId::new("play", step), &step, |b, &step| {
            b.iter(|| {
                let mut feed = line.feed_from(line.begin());
                let mut passed = 0_u64;
                while !feed.at_end() {
                    feed.play_each(step, |_| passed += 1).expect("play");
                }
                black_box(passed)
            });
        });
        group.bench_with_input(BenchmarkId::new("back", step), &step, |b, &step| {
            b.iter(|| {
                let mut feed = line.feed_from(line.begin() + span);
                let mut unpassed = 0_u64;
                while !feed.at_start() {
                    feed.back_each(step, |_| unpassed += 1).expect("back");
                }
                black_box(unpassed)
            });
        });
    }
    group.finish();
}

fn bench_feed_from(c: &mut Criterion) {
    let line = Timeline::new(0..ELEMENTS, |v| v * STRIDE).expect("timeline");
    c.bench_function("feed_from", |b| {
        let mut start = 0;
        b.iter(|| {
            start = (start + 7_777) % (ELEMENTS * STRIDE);
            black_box(line.feed_from(black_box(start)).passed_count())
        });
    });
}

criterion_group!(benches, bench_sweep, bench_feed_from);
criterion_main!(benches);
