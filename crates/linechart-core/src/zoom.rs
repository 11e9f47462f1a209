// File: crates/linechart-core/src/zoom.rs
// Summary: Zoom/pan behavior over a pair of linear scales (translate + uniform scale factor).
// Notes:
// - Gesture points are in plot-area pixels (origin at the plot's top-left corner).
// - The live scales' domains are always derived from the initial copies:
//   domain = initial.invert((range - translate) / k).

use log::trace;

use crate::scale::LinearScale;
use crate::types::Point;
use crate::view::ViewState;

/// Wheel delta units per doubling of the zoom factor.
const WHEEL_UNITS_PER_DOUBLING: f64 = 500.0;

/// Pan offset (plot pixels) and zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform { x: 0.0, y: 0.0, k: 1.0 };
}

impl ZoomTransform {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.k.is_finite()
    }
}

impl Default for ZoomTransform {
    fn default() -> Self { Self::IDENTITY }
}

/// Pointer input the behavior understands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Wheel notch; positive `delta` zooms in. One notch is usually 120 units.
    Wheel { at: Point, delta: f64 },
    DragStart { at: Point },
    DragMove { at: Point },
    DragEnd,
    /// Zoom in 2x about `at`; with `shift`, zoom out 2x.
    DoubleClick { at: Point, shift: bool },
}

impl Gesture {
    /// `false` when the pointer position or wheel delta is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        let finite = |(x, y): Point| x.is_finite() && y.is_finite();
        match *self {
            Gesture::Wheel { at, delta } => finite(at) && delta.is_finite(),
            Gesture::DragStart { at } | Gesture::DragMove { at } | Gesture::DoubleClick { at, .. } => finite(at),
            Gesture::DragEnd => true,
        }
    }

    /// The same gesture with its point moved by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        let shift = |(x, y): Point| (x + dx, y + dy);
        match self {
            Gesture::Wheel { at, delta } => Gesture::Wheel { at: shift(at), delta },
            Gesture::DragStart { at } => Gesture::DragStart { at: shift(at) },
            Gesture::DragMove { at } => Gesture::DragMove { at: shift(at) },
            Gesture::DragEnd => Gesture::DragEnd,
            Gesture::DoubleClick { at, shift: s } => Gesture::DoubleClick { at: shift(at), shift: s },
        }
    }
}

#[derive(Clone, Debug)]
pub struct ZoomBehavior {
    transform: ZoomTransform,
    scale_extent: (f64, f64),
    x0: LinearScale,
    y0: LinearScale,
    drag_anchor: Option<Point>,
}

impl ZoomBehavior {
    /// Bind to the scales' current state; that state is the identity transform.
    pub fn new(x: &LinearScale, y: &LinearScale) -> Self {
        Self {
            transform: ZoomTransform::IDENTITY,
            scale_extent: (0.0, f64::INFINITY),
            x0: *x,
            y0: *y,
            drag_anchor: None,
        }
    }

    pub fn with_scale_extent(mut self, min: f64, max: f64) -> Self {
        self.scale_extent = (min, max);
        self
    }

    pub fn scale_extent(&self) -> (f64, f64) { self.scale_extent }
    pub fn transform(&self) -> ZoomTransform { self.transform }
    pub fn translate(&self) -> (f64, f64) { (self.transform.x, self.transform.y) }
    pub fn scale(&self) -> f64 { self.transform.k }

    /// Non-finite offsets are ignored.
    pub fn set_translate(&mut self, tx: f64, ty: f64) {
        if !(tx.is_finite() && ty.is_finite()) {
            return;
        }
        self.transform.x = tx;
        self.transform.y = ty;
    }

    /// Set the zoom factor, clamped to the scale extent. NaN is ignored.
    pub fn set_scale(&mut self, k: f64) {
        if k.is_nan() {
            return;
        }
        self.transform.k = k.clamp(self.scale_extent.0, self.scale_extent.1);
    }

    /// Untransformed plot position currently shown at `p`.
    fn location(&self, (px, py): Point) -> Point {
        let t = self.transform;
        ((px - t.x) / t.k, (py - t.y) / t.k)
    }

    /// Shift the translation so untransformed location `l` sits under `p`.
    fn translate_to(&mut self, p: Point, l: Point) {
        let t = self.transform;
        let (lx, ly) = (l.0 * t.k + t.x, l.1 * t.k + t.y);
        self.transform.x += p.0 - lx;
        self.transform.y += p.1 - ly;
    }

    fn zoom_about(&mut self, at: Point, k: f64) {
        let l = self.location(at);
        self.set_scale(k);
        self.translate_to(at, l);
    }

    /// Feed one gesture. Returns `true` when the transform changed and the
    /// chart should be constrained and redrawn.
    pub fn apply(&mut self, gesture: Gesture) -> bool {
        trace!("zoom gesture {gesture:?} at {:?}", self.transform);
        if !gesture.is_finite() {
            return false;
        }
        match gesture {
            Gesture::Wheel { at, delta } => {
                let k = self.transform.k * 2f64.powf(delta / WHEEL_UNITS_PER_DOUBLING);
                self.zoom_about(at, k);
                true
            }
            Gesture::DragStart { at } => {
                self.drag_anchor = Some(self.location(at));
                false
            }
            Gesture::DragMove { at } => match self.drag_anchor {
                Some(anchor) => {
                    self.translate_to(at, anchor);
                    true
                }
                None => false,
            },
            Gesture::DragEnd => {
                self.drag_anchor = None;
                false
            }
            Gesture::DoubleClick { at, shift } => {
                let level = self.transform.k.log2();
                let level = if shift { level.ceil() - 1.0 } else { level.floor() + 1.0 };
                self.zoom_about(at, 2f64.powf(level));
                true
            }
        }
    }

    /// Rewrite the live scales' domains from the initial scales and the transform.
    pub fn rescale(&self, x: &mut LinearScale, y: &mut LinearScale) {
        let t = self.transform;
        let (xr0, xr1) = self.x0.range();
        x.set_domain(self.x0.invert((xr0 - t.x) / t.k), self.x0.invert((xr1 - t.x) / t.k));
        let (yr0, yr1) = self.y0.range();
        y.set_domain(self.y0.invert((yr0 - t.y) / t.k), self.y0.invert((yr1 - t.y) / t.k));
    }

    /// Pin the visible domains inside `bounds`: when an edge has been panned
    /// past its bound, shift the translation so that edge sits exactly on it.
    /// The lower edge is checked first; the upper edge only when the lower is fine.
    pub fn constrain(&mut self, bounds: &ViewState, x: &mut LinearScale, y: &mut LinearScale) {
        self.rescale(x, y);
        let (tx, ty) = self.translate();

        let (xd0, xd1) = x.domain();
        let (xr0, xr1) = x.range();
        if xd0 < bounds.x_min {
            self.set_translate(tx - x.apply(bounds.x_min) + xr0, ty);
        } else if xd1 > bounds.x_max {
            self.set_translate(tx - x.apply(bounds.x_max) + xr1, ty);
        }
        self.rescale(x, y);

        let (tx, ty) = self.translate();
        let (yd0, yd1) = y.domain();
        let (yr0, yr1) = y.range();
        if yd0 < bounds.y_min {
            self.set_translate(tx, ty - y.apply(bounds.y_min) + yr0);
        } else if yd1 > bounds.y_max {
            self.set_translate(tx, ty - y.apply(bounds.y_max) + yr1);
        }
        self.rescale(x, y);
    }
}
