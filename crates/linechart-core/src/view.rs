// File: crates/linechart-core/src/view.rs
// Summary: Resolved data bounds of a chart: explicit option bounds, else the dataset extent.

use log::debug;

use crate::error::{ChartError, Result};
use crate::options::ChartOptions;
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Exact min/max over every point of every series; `None` when there are no points.
    pub fn from_dataset(dataset: &[Series]) -> Option<Self> {
        dataset
            .iter()
            .filter_map(Series::extent)
            .reduce(|(a, b, c, d), (e, f, g, h)| (a.min(e), b.max(f), c.min(g), d.max(h)))
            .map(|(x_min, x_max, y_min, y_max)| Self { x_min, x_max, y_min, y_max })
    }

    /// Explicit option bounds win (a `Some(0.0)` included); the rest come from the data.
    ///
    /// A zero-width axis (a flat line, a single point) is kept as is; the
    /// scales map it onto the start of their range.
    pub fn resolve(dataset: &[Series], options: &ChartOptions) -> Result<Self> {
        let explicit = (options.xmin, options.xmax, options.ymin, options.ymax);
        let view = match explicit {
            (Some(x_min), Some(x_max), Some(y_min), Some(y_max)) => Self { x_min, x_max, y_min, y_max },
            _ => {
                let data = Self::from_dataset(dataset).ok_or(ChartError::EmptyDataset)?;
                Self {
                    x_min: options.xmin.unwrap_or(data.x_min),
                    x_max: options.xmax.unwrap_or(data.x_max),
                    y_min: options.ymin.unwrap_or(data.y_min),
                    y_max: options.ymax.unwrap_or(data.y_max),
                }
            }
        };
        view.check()?;
        debug!(
            "resolved bounds x=[{}, {}] y=[{}, {}]",
            view.x_min, view.x_max, view.y_min, view.y_max
        );
        Ok(view)
    }

    /// Both ends of both axes must be finite. Equal or reversed ends are accepted.
    fn check(&self) -> Result<()> {
        let ok = |min: f64, max: f64| min.is_finite() && max.is_finite();
        if !ok(self.x_min, self.x_max) {
            return Err(ChartError::InvalidBounds { axis: 'x', min: self.x_min, max: self.x_max });
        }
        if !ok(self.y_min, self.y_max) {
            return Err(ChartError::InvalidBounds { axis: 'y', min: self.y_min, max: self.y_max });
        }
        Ok(())
    }

    pub fn x_domain(&self) -> (f64, f64) { (self.x_min, self.x_max) }
    pub fn y_domain(&self) -> (f64, f64) { (self.y_min, self.y_max) }
}
