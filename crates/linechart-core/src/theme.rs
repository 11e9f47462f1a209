// File: crates/linechart-core/src/theme.rs
// Summary: Categorical series palette and light/dark colors for the raster backend.

use skia_safe as skia;
use std::fmt;

/// Opaque RGB color, printable as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(v: u32) -> Self {
        Self((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(255, self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The 20-color categorical palette (pairs of dark/light hues).
pub const CATEGORY20: [Rgb; 20] = [
    Rgb::from_hex(0x1f77b4), Rgb::from_hex(0xaec7e8),
    Rgb::from_hex(0xff7f0e), Rgb::from_hex(0xffbb78),
    Rgb::from_hex(0x2ca02c), Rgb::from_hex(0x98df8a),
    Rgb::from_hex(0xd62728), Rgb::from_hex(0xff9896),
    Rgb::from_hex(0x9467bd), Rgb::from_hex(0xc5b0d5),
    Rgb::from_hex(0x8c564b), Rgb::from_hex(0xc49c94),
    Rgb::from_hex(0xe377c2), Rgb::from_hex(0xf7b6d2),
    Rgb::from_hex(0x7f7f7f), Rgb::from_hex(0xc7c7c7),
    Rgb::from_hex(0xbcbd22), Rgb::from_hex(0xdbdb8d),
    Rgb::from_hex(0x17becf), Rgb::from_hex(0x9edae5),
];

/// Stroke color of the `index`-th series; wraps after 20.
#[inline]
pub fn series_color(index: usize) -> Rgb {
    CATEGORY20[index % CATEGORY20.len()]
}

/// Non-series colors used when rasterizing a chart.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub plot: Rgb,
    pub grid: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
}

impl Theme {
    /// Close to the stylesheet the chart's SVG is usually shown with.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb(255, 255, 255),
            plot: Rgb(0xee, 0xee, 0xee),
            grid: Rgb(0xff, 0xff, 0xff),
            axis_line: Rgb(0x99, 0x99, 0x99),
            axis_label: Rgb(0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb(18, 18, 20),
            plot: Rgb(28, 28, 32),
            grid: Rgb(40, 40, 45),
            axis_line: Rgb(180, 180, 190),
            axis_label: Rgb(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
