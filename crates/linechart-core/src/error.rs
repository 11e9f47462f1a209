// File: crates/linechart-core/src/error.rs
// Summary: Error taxonomy for chart construction (input validation and layout failures).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("no element with id '{0}' in the document")]
    ContainerNotFound(String),

    #[error("dataset has no points to plot")]
    EmptyDataset,

    #[error("series {series} point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { series: usize, index: usize, x: f64, y: f64 },

    #[error("invalid {axis} bounds [{min}, {max}]: both ends must be finite")]
    InvalidBounds { axis: char, min: f64, max: f64 },

    #[error("canvas {width}x{height} leaves no room for a plot area inside the margins")]
    CanvasTooSmall { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
