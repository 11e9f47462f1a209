// File: crates/linechart-core/tests/smoke.rs
// Purpose: Raster backend smoke tests: PNG encoding and RGBA readback of a rendered chart.

use linechart_core::{render, ChartOptions, Document, Gesture, LineChart, RasterOptions, Series, Theme};

fn sample_chart(doc: &mut Document) -> LineChart {
    doc.create_container("chart", 0, 0);
    let data: Vec<Series> = (1..=3)
        .map(|n| {
            let pts = (-20..=20).map(|i| {
                let x = i as f64 * 0.5;
                (x, x.powi(n) / 10f64.powi(n - 1))
            });
            Series::with_data(pts.collect())
        })
        .collect();
    let opts = ChartOptions::new().with_size(320, 200).with_interpolation("cardinal");
    render(doc, "chart", data, &opts).expect("render")
}

#[test]
fn png_bytes_decode_to_canvas_size() {
    let mut doc = Document::new();
    let chart = sample_chart(&mut doc);
    let bytes = chart.render_to_png_bytes(&RasterOptions::default()).expect("png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (320, 200));
}

#[test]
fn rgba_readback_has_background_outside_the_plot() {
    let mut doc = Document::new();
    let chart = sample_chart(&mut doc);
    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
    let (pixels, w, h, row_bytes) = chart.render_to_rgba8(&opts).expect("rgba");
    assert_eq!((w, h, row_bytes), (320, 200, 320 * 4));
    assert_eq!(pixels.len(), (w * h * 4) as usize);
    assert_eq!(&pixels[..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_and_zoomed_view_still_render() {
    let mut doc = Document::new();
    let mut chart = sample_chart(&mut doc);
    chart.handle_gesture(&mut doc, Gesture::Wheel { at: (220.0, 95.0), delta: 250.0 });
    let opts = RasterOptions { theme: Theme::dark(), ..RasterOptions::default() };
    let (pixels, ..) = chart.render_to_rgba8(&opts).expect("rgba");
    let bg = Theme::dark().background;
    assert_eq!(&pixels[..4], &[bg.0, bg.1, bg.2, 255]);
}

#[test]
fn png_file_is_written() {
    let mut doc = Document::new();
    let chart = sample_chart(&mut doc);
    let path = std::env::temp_dir().join("linechart-core-smoke").join("chart.png");
    chart.render_to_png(&RasterOptions::default(), &path).expect("write png");
    let written = std::fs::read(&path).expect("read back");
    assert!(written.starts_with(b"\x89PNG"));
}
