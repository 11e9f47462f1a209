// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart renderer, its building blocks, and the raster backend.

pub mod axis;
pub mod chart;
pub mod curve;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod options;
pub mod raster;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;
pub mod zoom;

pub use axis::{Axis, Orient};
pub use chart::{render, LineChart, SCALE_EXTENT};
pub use curve::{CurveGenerator, CurvePath, Interpolation, PathCommand};
pub use dom::{Document, NodeId};
pub use error::ChartError;
pub use geometry::Layout;
pub use options::ChartOptions;
pub use raster::RasterOptions;
pub use scale::LinearScale;
pub use series::{Dataset, Series};
pub use theme::{series_color, Rgb, Theme, CATEGORY20};
pub use types::{Insets, Point};
pub use view::ViewState;
pub use zoom::{Gesture, ZoomBehavior, ZoomTransform};
