// File: crates/linechart-core/src/series.rs
// Summary: Series/dataset model for multi-line charts.

use crate::error::{ChartError, Result};
use crate::types::Point;

/// One drawn line. Point order is the drawing order along the curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub data_xy: Vec<Point>,
}

/// All lines of a chart; order sets color assignment and z-order.
pub type Dataset = Vec<Series>;

impl Series {
    pub fn new() -> Self {
        Self { data_xy: Vec::new() }
    }

    pub fn with_data(data: Vec<Point>) -> Self {
        Self { data_xy: data }
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// `(x_min, x_max, y_min, y_max)` over this series, `None` when empty.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter();
        let &(x0, y0) = it.next()?;
        let init = (x0, x0, y0, y0);
        Some(it.fold(init, |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

impl From<Vec<Point>> for Series {
    fn from(data: Vec<Point>) -> Self { Self::with_data(data) }
}

/// Reject datasets with no points at all or with any NaN/infinite coordinate.
pub fn validate(dataset: &[Series]) -> Result<()> {
    if dataset.iter().all(Series::is_empty) {
        return Err(ChartError::EmptyDataset);
    }
    for (series, s) in dataset.iter().enumerate() {
        if let Some((index, &(x, y))) = s
            .data_xy
            .iter()
            .enumerate()
            .find(|(_, (x, y))| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::NonFinitePoint { series, index, x, y });
        }
    }
    Ok(())
}
