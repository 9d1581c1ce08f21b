// Run with: cargo bench --bench render_text

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use embedded_graphics::{
    mono_font::{ascii::FONT_4X6, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use ht16k33_matrix::Matrix;
use std::{hint::black_box, time::Duration};

// Four glyphs of FONT_4X6 fill the 16 columns
const TEST_STRINGS: &[(&str, &str)] = &[("short", "HI"), ("full", "C0DE"), ("clipped", "HELLO WORLD")];

const ITERATIONS: usize = 1000;

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
        .confidence_level(0.95)
        .significance_level(0.05)
}

fn draw_text(matrix: &mut Matrix, origin: Point, text: &str, style: MonoTextStyle<BinaryColor>) {
    Text::with_baseline(text, origin, style, Baseline::Top)
        .draw(matrix)
        .unwrap();
}

fn render_text_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_text");
    let style = MonoTextStyle::new(&FONT_4X6, BinaryColor::On);

    for (case, text) in TEST_STRINGS {
        let pixel_count = u64::from(
            text.len() as u32 * FONT_4X6.character_size.width * FONT_4X6.character_size.height,
        );
        group.throughput(Throughput::Elements(pixel_count * ITERATIONS as u64));

        group.bench_with_input(BenchmarkId::new("matrix", case), text, |b, text| {
            let origin = Point::new(0, 1);
            b.iter(|| {
                let mut matrix = Matrix::new();
                for _ in 0..ITERATIONS {
                    matrix.erase();
                    draw_text(
                        black_box(&mut matrix),
                        black_box(origin),
                        black_box(text),
                        black_box(style),
                    );
                }
                black_box(matrix.as_bytes());
            });
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = configure_criterion(); targets = render_text_benchmark);
criterion_main!(benches);
