// Run with: cargo bench --bench fill_rect

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use ht16k33_matrix::{Matrix, HEIGHT, WIDTH};
use std::hint::black_box;
use std::time::Duration;

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200) // More samples for better accuracy
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
        .confidence_level(0.95)
        .significance_level(0.02)
}

fn get_test_rectangles() -> Vec<(&'static str, Rectangle)> {
    vec![
        (
            "full_matrix",
            Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32)),
        ),
        (
            "left_half",
            Rectangle::new(Point::zero(), Size::new((WIDTH / 2) as u32, HEIGHT as u32)),
        ),
        // crosses the byte boundary between ROW7 and ROW8
        (
            "span_boundary",
            Rectangle::new(Point::new(4, 2), Size::new(8, 4)),
        ),
        ("single_row", Rectangle::new(Point::new(0, 3), Size::new(16, 1))),
        ("tall_column", Rectangle::new(Point::new(9, 0), Size::new(1, 8))),
    ]
}

// Pixel by pixel through draw_iter
fn draw_rect_baseline(matrix: &mut Matrix, rect: &Rectangle, color: BinaryColor) {
    let pixels: Vec<_> = rect
        .points()
        .map(|point| embedded_graphics::Pixel(point, color))
        .collect();

    matrix.draw_iter(pixels.into_iter()).unwrap();
}

// Through the styled primitive
fn draw_rect_styled(matrix: &mut Matrix, rect: &Rectangle, color: BinaryColor) {
    rect.into_styled(PrimitiveStyle::with_fill(color))
        .draw(matrix)
        .unwrap();
}

fn fill_rect_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_rect");

    for (rect_name, rect) in get_test_rectangles().iter() {
        let pixel_count = u64::from(rect.size.width * rect.size.height);
        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("baseline", rect_name),
            rect,
            |b, rect| {
                let mut matrix = Matrix::new();
                b.iter(|| {
                    matrix.erase();
                    draw_rect_baseline(black_box(&mut matrix), black_box(rect), BinaryColor::On);
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("styled", rect_name), rect, |b, rect| {
            let mut matrix = Matrix::new();
            b.iter(|| {
                matrix.erase();
                draw_rect_styled(black_box(&mut matrix), black_box(rect), BinaryColor::On);
            });
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = configure_criterion(); targets = fill_rect_benchmark);
criterion_main!(benches);
