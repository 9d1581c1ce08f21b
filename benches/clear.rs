// Run with:  cargo bench --bench clear

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use ht16k33_matrix::{Matrix, HEIGHT, WIDTH};
use std::hint::black_box;
use std::time::Duration;

// Number of iterations to target ~1-5ms per measurement
const ITERATIONS: usize = 1000;

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10)) // Longer measurement time
        .warm_up_time(Duration::from_secs(3))
        .confidence_level(0.95)
        .significance_level(0.05)
}

fn clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT * ITERATIONS) as u64));

    group.bench_function("matrix_erase", |b| {
        let mut matrix = Matrix::new();
        b.iter(|| {
            for _ in 0..ITERATIONS {
                black_box(&mut matrix).erase();
            }
        });
    });

    group.bench_function("draw_target_clear", |b| {
        let mut matrix = Matrix::new();
        b.iter(|| {
            for _ in 0..ITERATIONS {
                black_box(&mut matrix)
                    .clear(black_box(BinaryColor::On))
                    .unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(name = benches; config = configure_criterion(); targets = clear);
criterion_main!(benches);
