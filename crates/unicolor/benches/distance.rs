use criterion::{criterion_group, criterion_main, Criterion};
use unicolor::css::canonical_string;
use unicolor::Color;

pub fn run_benchmarks(c: &mut Criterion) {
    let palette: Vec<Color> = (0..=255)
        .map(|value| Color::from_rgb(value, 255 - value, value.wrapping_mul(37)))
        .collect();

    let mut group = c.benchmark_group("color");

    group.bench_function("nearest-of-256", |b| {
        b.iter(|| {
            palette
                .iter()
                .map(|color| color.rgb_distance(13, 87, 222))
                .enumerate()
                .min_by_key(|&(_, distance)| distance)
        })
    });

    group.bench_function("canonical-opaque", |b| {
        b.iter(|| canonical_string(13, 87, 222, 255))
    });

    group.bench_function("canonical-translucent", |b| {
        b.iter(|| canonical_string(13, 87, 222, 128))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
