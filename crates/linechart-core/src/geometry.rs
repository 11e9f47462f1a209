// File: crates/linechart-core/src/geometry.rs
// Summary: Canvas/plot-area layout math.

use crate::error::{ChartError, Result};
use crate::types::Insets;

/// Canvas size and the plot area left inside the margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub insets: Insets,
}

impl Layout {
    /// Build a layout; fails when the margins swallow the whole canvas.
    pub fn new(canvas_width: u32, canvas_height: u32, insets: Insets) -> Result<Self> {
        if canvas_width <= insets.hsum() || canvas_height <= insets.vsum() {
            return Err(ChartError::CanvasTooSmall { width: canvas_width, height: canvas_height });
        }
        Ok(Self { canvas_width, canvas_height, insets })
    }

    pub const fn plot_width(&self) -> u32 { self.canvas_width - self.insets.hsum() }
    pub const fn plot_height(&self) -> u32 { self.canvas_height - self.insets.vsum() }

    /// Convert a canvas-space point into plot-area coordinates.
    #[inline]
    pub fn to_plot(&self, px: f64, py: f64) -> (f64, f64) {
        (px - self.insets.left as f64, py - self.insets.top as f64)
    }
}
