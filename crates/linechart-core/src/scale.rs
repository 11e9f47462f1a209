// File: crates/linechart-core/src/scale.rs
// Summary: Linear scale mapping a numeric data domain onto a pixel range, with tick helpers.

use crate::grid;

/// Number of ticks axes ask for by default.
pub const DEFAULT_TICKS: usize = 10;

/// Affine map from `domain` to `range`. Either side may be reversed
/// (the y scale maps `[ymin, ymax]` onto `[plot_height, 0]`).
/// Values outside the domain are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    pub fn set_domain(&mut self, d0: f64, d1: f64) {
        self.d0 = d0;
        self.d1 = d1;
    }

    pub fn set_range(&mut self, r0: f64, r1: f64) {
        self.r0 = r0;
        self.r1 = r1;
    }

    /// Data value -> pixel.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        let t = if span != 0.0 { (v - self.d0) / span } else { 0.0 };
        self.r0 + (self.r1 - self.r0) * t
    }

    /// Pixel -> data value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        let t = if span != 0.0 { (px - self.r0) / span } else { 0.0 };
        self.d0 + (self.d1 - self.d0) * t
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        grid::ticks(self.d0, self.d1, count)
    }

    /// Ticks paired with labels formatted to the precision of the tick step.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        grid::labelled_ticks(self.d0, self.d1, count)
    }

    /// Lower and upper pixel extent regardless of orientation.
    pub fn range_extent(&self) -> (f64, f64) {
        (self.r0.min(self.r1), self.r0.max(self.r1))
    }
}
