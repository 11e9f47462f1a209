// File: crates/linechart-core/src/options.rs
// Summary: User-facing chart options; every field is optional and deserializable from TOML/JSON.

use serde::Deserialize;

/// Interpolation used when none is configured.
pub const DEFAULT_INTERPOLATION: &str = "basis";

/// Display options for [`crate::render`].
///
/// Bounds left as `None` fall back to the data extent; a bound given as `0.0`
/// is still explicit. `width`/`height` of `0` count as unset and fall back to
/// the container size, then to [`crate::types::WIDTH`]x[`crate::types::HEIGHT`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOptions {
    pub interpolation: Option<String>,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymin: Option<f64>,
    pub ymax: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ChartOptions {
    pub fn new() -> Self { Self::default() }

    /// Configured interpolation name; empty or missing means "basis".
    pub fn interpolation_name(&self) -> &str {
        match self.interpolation.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_INTERPOLATION,
        }
    }

    pub fn with_interpolation(mut self, name: impl Into<String>) -> Self {
        self.interpolation = Some(name.into());
        self
    }

    pub fn with_x_bounds(mut self, min: f64, max: f64) -> Self {
        self.xmin = Some(min);
        self.xmax = Some(max);
        self
    }

    pub fn with_y_bounds(mut self, min: f64, max: f64) -> Self {
        self.ymin = Some(min);
        self.ymax = Some(max);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}
