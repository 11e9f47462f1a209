// File: crates/linechart-core/src/chart.rs
// Summary: Line chart renderer: validates input, lays out scales/axes/curves as SVG in a document
//          container, and keeps the zoom state to redraw on interaction.

use log::{debug, info, warn};

use crate::axis::{Axis, Orient};
use crate::curve::{CurveGenerator, CurvePath, Interpolation};
use crate::dom::{Document, NodeId};
use crate::error::{ChartError, Result};
use crate::geometry::Layout;
use crate::options::ChartOptions;
use crate::scale::LinearScale;
use crate::series::{self, Dataset};
use crate::theme::series_color;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::zoom::{Gesture, ZoomBehavior, ZoomTransform};

/// Zoom factor limits relative to the initial view.
pub const SCALE_EXTENT: (f64, f64) = (1.0, 10.0);

/// A chart drawn into a [`Document`]. Owns its scales and zoom state; the
/// SVG nodes it created are updated in place on every interaction.
#[derive(Clone, Debug)]
pub struct LineChart {
    pub(crate) data: Dataset,
    pub(crate) layout: Layout,
    pub(crate) bounds: ViewState,
    pub(crate) x: LinearScale,
    pub(crate) y: LinearScale,
    pub(crate) x_axis: Axis,
    pub(crate) y_axis: Axis,
    pub(crate) curve: CurveGenerator,
    zoom: ZoomBehavior,
    svg: NodeId,
    x_axis_group: NodeId,
    y_axis_group: NodeId,
    paths: Vec<NodeId>,
    clip_id: String,
}

/// Draw `data` as an interactive line chart inside the element `container_id`.
pub fn render(
    doc: &mut Document,
    container_id: &str,
    data: Dataset,
    options: &ChartOptions,
) -> Result<LineChart> {
    let container = doc
        .get_element_by_id(container_id)
        .ok_or_else(|| ChartError::ContainerNotFound(container_id.to_string()))?;
    series::validate(&data)?;

    let bounds = ViewState::resolve(&data, options)?;
    let (client_w, client_h) = doc.element(container).client_size();
    let pick = |explicit: Option<u32>, measured: u32, fallback: u32| {
        explicit.filter(|&v| v > 0).or(Some(measured).filter(|&v| v > 0)).unwrap_or(fallback)
    };
    let layout = Layout::new(
        pick(options.width, client_w, WIDTH),
        pick(options.height, client_h, HEIGHT),
        Insets::default(),
    )?;
    let (plot_w, plot_h) = (layout.plot_width() as f64, layout.plot_height() as f64);
    debug!(
        "canvas {}x{}, plot area {}x{}",
        layout.canvas_width, layout.canvas_height, plot_w, plot_h
    );

    let x = LinearScale::new(bounds.x_domain(), (0.0, plot_w));
    let y = LinearScale::new(bounds.y_domain(), (plot_h, 0.0));
    let x_axis = Axis::new(Orient::Bottom).tick_size(-plot_h, 6.0);
    let y_axis = Axis::new(Orient::Left).tick_size(-plot_w, 6.0);
    let curve = CurveGenerator::new(Interpolation::from_name_or_linear(options.interpolation_name()));

    let svg = doc.append_child(container, "svg");
    doc.set_attr(svg, "width", layout.canvas_width);
    doc.set_attr(svg, "height", layout.canvas_height);
    let root = doc.append_child(svg, "g");
    doc.set_attr(
        root,
        "transform",
        format!("translate({},{})", layout.insets.left, layout.insets.top),
    );

    let background = doc.append_child(root, "rect");
    doc.set_attr(background, "width", plot_w);
    doc.set_attr(background, "height", plot_h);
    doc.set_attr(background, "class", "svg plot");

    let x_axis_group = doc.append_child(root, "g");
    doc.set_attr(x_axis_group, "class", "x axis");
    doc.set_attr(x_axis_group, "transform", format!("translate(0,{plot_h})"));
    let y_axis_group = doc.append_child(root, "g");
    doc.set_attr(y_axis_group, "class", "y axis");

    let clip_id = format!("{container_id}-clip");
    let clip = doc.append_child(root, "clipPath");
    doc.set_attr(clip, "id", &clip_id);
    let clip_rect = doc.append_child(clip, "rect");
    doc.set_attr(clip_rect, "x", 0);
    doc.set_attr(clip_rect, "y", 0);
    doc.set_attr(clip_rect, "width", plot_w);
    doc.set_attr(clip_rect, "height", plot_h);

    let paths = data
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let field = doc.append_child(root, "g");
            doc.set_attr(field, "clip-path", format!("url(#{clip_id})"));
            doc.set_attr(field, "class", "field");
            let path = doc.append_child(field, "path");
            doc.set_attr(path, "class", "line");
            doc.set_style(path, "stroke", series_color(i));
            path
        })
        .collect();

    let zoom = ZoomBehavior::new(&x, &y).with_scale_extent(SCALE_EXTENT.0, SCALE_EXTENT.1);
    let chart = LineChart {
        data,
        layout,
        bounds,
        x,
        y,
        x_axis,
        y_axis,
        curve,
        zoom,
        svg,
        x_axis_group,
        y_axis_group,
        paths,
        clip_id,
    };
    chart.redraw(doc);
    info!(
        "rendered {} series into #{} ({} interpolation)",
        chart.data.len(),
        container_id,
        chart.curve.interpolation.name()
    );
    Ok(chart)
}

impl LineChart {
    /// Feed a pointer gesture given in canvas (SVG) coordinates. Returns `true`
    /// when the view changed and the chart was redrawn.
    pub fn handle_gesture(&mut self, doc: &mut Document, gesture: Gesture) -> bool {
        let (dx, dy) = self.layout.to_plot(0.0, 0.0);
        if !self.zoom.apply(gesture.offset(dx, dy)) {
            return false;
        }
        self.zoomed(doc);
        true
    }

    /// Jump to a transform programmatically (zoom factor clamped to [`SCALE_EXTENT`]),
    /// then apply the same bounds clamping as interactive gestures. A transform
    /// with a non-finite component is ignored.
    pub fn set_transform(&mut self, doc: &mut Document, transform: ZoomTransform) {
        if !transform.is_finite() {
            warn!("ignoring non-finite zoom transform {transform:?}");
            return;
        }
        self.zoom.set_scale(transform.k);
        self.zoom.set_translate(transform.x, transform.y);
        self.zoomed(doc);
    }

    fn zoomed(&mut self, doc: &mut Document) {
        self.zoom.constrain(&self.bounds, &mut self.x, &mut self.y);
        debug!(
            "view x=[{:?}] y=[{:?}] at {:?}",
            self.x.domain(),
            self.y.domain(),
            self.zoom.transform()
        );
        self.redraw(doc);
    }

    /// Re-render both axes and every series path from the current scales.
    pub fn redraw(&self, doc: &mut Document) {
        self.x_axis.render(doc, self.x_axis_group, &self.x);
        self.y_axis.render(doc, self.y_axis_group, &self.y);
        for (i, &node) in self.paths.iter().enumerate() {
            doc.set_attr(node, "d", self.series_path(i).to_svg());
        }
    }

    /// Path of series `index` under the current scales.
    pub fn series_path(&self, index: usize) -> CurvePath {
        self.curve.path(&self.data[index].data_xy, &self.x, &self.y)
    }

    pub fn x_scale(&self) -> &LinearScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn bounds(&self) -> &ViewState { &self.bounds }
    pub fn interpolation(&self) -> Interpolation { self.curve.interpolation }
    pub fn transform(&self) -> ZoomTransform { self.zoom.transform() }
    pub fn data(&self) -> &Dataset { &self.data }

    /// The `<svg>` element appended to the container.
    pub fn svg_node(&self) -> NodeId { self.svg }
    /// One `<path class="line">` per series, in dataset order.
    pub fn path_nodes(&self) -> &[NodeId] { &self.paths }
    pub fn clip_id(&self) -> &str { &self.clip_id }

    /// Standalone SVG markup of the chart.
    pub fn to_svg(&self, doc: &Document) -> String {
        doc.to_markup(self.svg)
    }
}
