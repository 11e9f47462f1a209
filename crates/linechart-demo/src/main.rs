// File: crates/linechart-demo/src/main.rs
// Summary: Demo renders the ten power curves (or a CSV dataset) as an SVG line chart,
//          optionally applies a scripted zoom/pan, and can also write a PNG.

mod power;

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::Logger;
use linechart_core::{render, theme, ChartOptions, Dataset, Document, Gesture, RasterOptions, Series};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Interpolation the sample page asks for; unknown to the curve generator, so it draws straight segments.
const DEMO_INTERPOLATION: &str = "none";

#[derive(Parser, Debug)]
#[command(name = "power-curves", about = "Render power curves as an interactive-style SVG line chart")]
struct Args {
    /// Load `series,x,y` rows instead of generating the power curves.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// TOML file with chart options (interpolation, xmin/xmax/ymin/ymax, width/height).
    #[arg(long)]
    options: Option<PathBuf>,
    #[arg(long)]
    interpolation: Option<String>,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
    /// Measured size of the host container, e.g. 800x400.
    #[arg(long, value_parser = parse_size)]
    container_size: Option<(u32, u32)>,
    #[arg(long, default_value = "chart")]
    container: String,
    /// Zoom factor applied about the plot center after rendering (clamped to 1..10).
    #[arg(long)]
    zoom: Option<f64>,
    /// Drag the view by DX,DY canvas pixels after rendering.
    #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
    pan: Option<(f64, f64)>,
    #[arg(long, default_value = "target/out/power_curves.svg")]
    out: PathBuf,
    #[arg(long)]
    png: Option<PathBuf>,
    /// Raster color preset for --png (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let args = Args::parse();

    let data = match &args.csv {
        Some(path) => load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => power::power_curves(),
    };
    info!("{} series, {} points", data.len(), data.iter().map(Series::len).sum::<usize>());

    let options = chart_options(&args)?;
    let (cw, ch) = args.container_size.unwrap_or((0, 0));
    let mut doc = Document::new();
    doc.create_container(&args.container, cw, ch);

    let mut chart = render(&mut doc, &args.container, data, &options)?;

    let layout = *chart.layout();
    let center = (
        layout.insets.left as f64 + layout.plot_width() as f64 / 2.0,
        layout.insets.top as f64 + layout.plot_height() as f64 / 2.0,
    );
    if let Some(factor) = args.zoom {
        if factor > 0.0 {
            // 500 wheel units per doubling
            chart.handle_gesture(&mut doc, Gesture::Wheel { at: center, delta: factor.log2() * 500.0 });
        } else {
            warn!("ignoring non-positive zoom factor {factor}");
        }
    }
    if let Some((dx, dy)) = args.pan {
        chart.handle_gesture(&mut doc, Gesture::DragStart { at: center });
        chart.handle_gesture(&mut doc, Gesture::DragMove { at: (center.0 + dx, center.1 + dy) });
        chart.handle_gesture(&mut doc, Gesture::DragEnd);
    }
    info!(
        "view x={:?} y={:?} transform={:?}",
        chart.x_scale().domain(),
        chart.y_scale().domain(),
        chart.transform()
    );

    write_file(&args.out, chart.to_svg(&doc).as_bytes())?;
    info!("Wrote {}", args.out.display());

    if let Some(png) = &args.png {
        let raster = RasterOptions { theme: theme::find(&args.theme), ..RasterOptions::default() };
        chart.render_to_png(&raster, png)?;
        info!("Wrote {}", png.display());
    }
    Ok(())
}

/// Options file first, then command-line overrides.
fn chart_options(args: &Args) -> Result<ChartOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<ChartOptions>(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartOptions::new().with_interpolation(DEMO_INTERPOLATION),
    };
    if let Some(name) = &args.interpolation {
        options.interpolation = Some(name.clone());
    }
    if args.width.is_some() {
        options.width = args.width;
    }
    if args.height.is_some() {
        options.height = args.height;
    }
    Ok(options)
}

/// Load `series,x,y` rows; rows are grouped by series label in first-seen order.
fn load_series_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (Some(i_series), Some(i_x), Some(i_y)) = (idx("series"), idx("x"), idx("y")) else {
        anyhow::bail!("expected columns series,x,y; found {:?}", headers);
    };

    let mut labels: Vec<String> = Vec::new();
    let mut series: Vec<Vec<(f64, f64)>> = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");
        let parse = |i: usize| -> Result<f64> {
            field(i)
                .parse::<f64>()
                .with_context(|| format!("row {}: '{}' is not a number", line + 2, field(i)))
        };
        let label = field(i_series).to_string();
        let slot = match labels.iter().position(|l| *l == label) {
            Some(p) => p,
            None => {
                labels.push(label);
                series.push(Vec::new());
                series.len() - 1
            }
        };
        series[slot].push((parse(i_x)?, parse(i_y)?));
    }
    if series.is_empty() {
        anyhow::bail!("no rows in {}", path.display());
    }
    Ok(series.into_iter().map(Series::with_data).collect())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let num = |v: &str| v.trim().parse::<u32>().map_err(|e| format!("'{v}': {e}"));
    Ok((num(w)?, num(h)?))
}

fn parse_pan(s: &str) -> std::result::Result<(f64, f64), String> {
    let (dx, dy) = s.split_once(',').ok_or_else(|| format!("expected DX,DY, got '{s}'"))?;
    let num = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}"));
    Ok((num(dx)?, num(dy)?))
}
