// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (fallback canvas size, margins, point aliases).

/// Fallback canvas width when neither options nor the container provide one.
pub const WIDTH: u32 = 960;
/// Fallback canvas height when neither options nor the container provide one.
pub const HEIGHT: u32 = 500;

/// A data point `(x, y)`.
pub type Point = (f64, f64);

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Fixed chart margins. These are not derived from tick label widths, so
    /// wide labels such as "1,000,000" can run past the left edge.
    fn default() -> Self {
        Self::new(60, 20, 20, 30)
    }
}
