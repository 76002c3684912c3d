//! Timer overhead measurement.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use storebench::timer::time;

fn bench_timer_overhead(c: &mut Criterion) {
    c.bench_function("timer/noop", |b| {
        b.iter(|| {
            let (value, elapsed) = time(|| black_box(42));
            black_box((value, elapsed));
        })
    });

    c.bench_function("timer/small_alloc", |b| {
        b.iter(|| {
            let (value, elapsed) = time(|| vec![0u8; 64]);
            black_box((value, elapsed));
        })
    });
}

criterion_group!(benches, bench_timer_overhead);
criterion_main!(benches);
