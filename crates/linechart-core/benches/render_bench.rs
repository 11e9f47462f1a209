use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linechart_core::{render, ChartOptions, Document, Gesture, Interpolation, Series};

fn gen_power_curves(step: f64) -> Vec<Series> {
    (1..=10)
        .map(|n| {
            let mut data = Vec::new();
            let mut x = -11.0f64;
            while x <= 11.0 {
                data.push((x, x.powi(n) / 10f64.powi(n - 1)));
                x += step;
            }
            Series::with_data(data)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let data = gen_power_curves(0.1);
    for name in ["linear", "basis", "monotone"] {
        let opts = ChartOptions::new().with_interpolation(name).with_size(960, 500);
        group.bench_with_input(BenchmarkId::from_parameter(name), &opts, |b, opts| {
            b.iter_batched(
                || {
                    let mut doc = Document::new();
                    doc.create_container("chart", 0, 0);
                    (doc, data.clone())
                },
                |(mut doc, d)| { let _ = black_box(render(&mut doc, "chart", d, opts)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_zoom_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_frame");
    for &step in &[0.1f64, 0.01f64] {
        let mut doc = Document::new();
        doc.create_container("chart", 0, 0);
        let opts = ChartOptions::new().with_interpolation(Interpolation::Basis.name());
        let Ok(mut chart) = render(&mut doc, "chart", gen_power_curves(step), &opts) else { continue };
        let mut delta = 120.0;
        group.bench_function(BenchmarkId::from_parameter(format!("step{step}")), |b| {
            b.iter(|| {
                // alternate in/out so the transform stays inside the scale extent
                delta = -delta;
                black_box(chart.handle_gesture(&mut doc, Gesture::Wheel { at: (480.0, 250.0), delta }));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_zoom_frame);
criterion_main!(benches);
