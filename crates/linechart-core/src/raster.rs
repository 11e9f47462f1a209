// File: crates/linechart-core/src/raster.rs
// Summary: Headless PNG/RGBA rendering of a chart's current view using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::chart::LineChart;
use crate::curve::PathCommand;
use crate::text::{Anchor, TextShaper};
use crate::theme::{series_color, Theme};

pub struct RasterOptions {
    pub theme: Theme,
    pub draw_labels: bool,
    pub stroke_width: f32,
    pub label_size: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, stroke_width: 1.5, label_size: 10.0 }
    }
}

impl LineChart {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RasterOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RasterOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster_surface()?;
        self.draw(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster_surface()?;
        self.draw(surface.canvas(), opts);
        let (w, h) = (self.layout.canvas_width, self.layout.canvas_height);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back raster pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn raster_surface(&self) -> Result<skia::Surface> {
        let size = (self.layout.canvas_width as i32, self.layout.canvas_height as i32);
        skia::surfaces::raster_n32_premul(size).ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RasterOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background.to_skia());

        let pw = self.layout.plot_width() as f32;
        let ph = self.layout.plot_height() as f32;
        canvas.save();
        canvas.translate((self.layout.insets.left as f32, self.layout.insets.top as f32));

        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot.to_skia());
        canvas.draw_rect(skia::Rect::from_xywh(0.0, 0.0, pw, ph), &fill);

        draw_axes(self, canvas, opts, pw, ph);

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(skia::Rect::from_xywh(0.0, 0.0, pw, ph), skia::ClipOp::Intersect, true);
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.stroke_width);
        for i in 0..self.data.len() {
            let path = to_skia_path(&self.series_path(i).to_absolute());
            stroke.set_color(series_color(i).to_skia());
            canvas.draw_path(&path, &stroke);
        }
        canvas.restore();
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes(chart: &LineChart, canvas: &skia::Canvas, opts: &RasterOptions, pw: f32, ph: f32) {
    let theme = &opts.theme;
    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid.to_skia());
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);

    let x_ticks = chart.x_axis.tick_marks(&chart.x);
    let y_ticks = chart.y_axis.tick_marks(&chart.y);
    for t in &x_ticks {
        canvas.draw_line((t.offset as f32, 0.0), (t.offset as f32, ph), &grid);
    }
    for t in &y_ticks {
        canvas.draw_line((0.0, t.offset as f32), (pw, t.offset as f32), &grid);
    }

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line.to_skia());
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_line((0.0, ph), (pw, ph), &axis_paint);
    canvas.draw_line((0.0, 0.0), (0.0, ph), &axis_paint);

    if !opts.draw_labels {
        return;
    }
    let shaper = TextShaper::new();
    let color = theme.axis_label.to_skia();
    let size = opts.label_size;
    let x_label_top = ph + chart.x_axis.label_offset() as f32;
    for t in &x_ticks {
        // baseline sits .71em below the label offset, as in the SVG output
        shaper.draw(canvas, &t.label, t.offset as f32, x_label_top + size * 0.71, size, color, Anchor::Middle);
    }
    let y_label_x = chart.y_axis.label_offset() as f32;
    for t in &y_ticks {
        shaper.draw(canvas, &t.label, y_label_x, t.offset as f32 + size * 0.32, size, color, Anchor::End);
    }
}

fn to_skia_path(commands: &[PathCommand]) -> skia::Path {
    let pt = |(x, y): (f64, f64)| (x as f32, y as f32);
    let mut path = skia::Path::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to(pt(p)); }
            PathCommand::LineTo(p) => { path.line_to(pt(p)); }
            PathCommand::QuadTo(c, p) => { path.quad_to(pt(c), pt(p)); }
            PathCommand::CubicTo(a, b, p) => { path.cubic_to(pt(a), pt(b), pt(p)); }
            PathCommand::Close => { path.close(); }
            // to_absolute() never emits the shorthand commands
            PathCommand::HorizontalTo(_) | PathCommand::VerticalTo(_) | PathCommand::SmoothCubicTo(..) => {}
        }
    }
    path
}
