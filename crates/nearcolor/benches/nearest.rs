use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nearcolor::{Matcher, Rgba};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut small = Matcher::new();
    small.extend_with_hex([
        "#ff0000", "#ff00ff", "#0f0", "#00ffff", "#0000ff", "#0000ff50", "#000000",
    ]);

    let mut large = Matcher::new();
    large.extend_with_colors(
        (0_u32..4096).map(|n| ((n % 256) as u8, (n / 16 % 256) as u8, (n * 7 % 256) as u8)),
    );

    let mut group = c.benchmark_group("nearest");

    group.bench_function("small-palette", |b| {
        b.iter(|| small.nearest(black_box(Rgba::new(30, 220, 40, 128))))
    });

    group.bench_function("large-palette", |b| {
        b.iter(|| large.nearest(black_box(Rgba::new(30, 220, 40, 128))))
    });

    group.bench_function("hex-query", |b| {
        b.iter(|| small.nearest_hex(black_box("#ff00aa")))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
