// File: crates/linechart-core/src/curve.rs
// Summary: Curve generator: projects a series through two scales and interpolates it into path commands.
// Notes:
// - Each interpolation reproduces the classic named line styles (linear, step, basis,
//   cardinal, monotone, bundle and their open/closed variants).
// - Points whose projection is not finite split the line into separate subpaths.

use log::warn;
use std::fmt::Write as _;

use crate::scale::LinearScale;
use crate::types::Point;

/// Tension shared by the cardinal family and bundle straightening.
pub const DEFAULT_TENSION: f64 = 0.7;

const MONOTONE_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    LinearClosed,
    Step,
    StepBefore,
    StepAfter,
    Basis,
    BasisOpen,
    BasisClosed,
    Bundle,
    Cardinal,
    CardinalOpen,
    CardinalClosed,
    Monotone,
}

impl Interpolation {
    pub const ALL: [Interpolation; 13] = [
        Self::Linear, Self::LinearClosed, Self::Step, Self::StepBefore, Self::StepAfter,
        Self::Basis, Self::BasisOpen, Self::BasisClosed, Self::Bundle,
        Self::Cardinal, Self::CardinalOpen, Self::CardinalClosed, Self::Monotone,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::LinearClosed => "linear-closed",
            Self::Step => "step",
            Self::StepBefore => "step-before",
            Self::StepAfter => "step-after",
            Self::Basis => "basis",
            Self::BasisOpen => "basis-open",
            Self::BasisClosed => "basis-closed",
            Self::Bundle => "bundle",
            Self::Cardinal => "cardinal",
            Self::CardinalOpen => "cardinal-open",
            Self::CardinalClosed => "cardinal-closed",
            Self::Monotone => "monotone",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }

    /// Like [`Self::from_name`], but unknown names (e.g. "none") draw straight segments.
    pub fn from_name_or_linear(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!("unknown interpolation '{name}', drawing linear segments");
            Self::Linear
        })
    }
}

/// One path segment command in absolute pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    HorizontalTo(f64),
    VerticalTo(f64),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    /// Cubic whose first control point mirrors the previous cubic's second one.
    SmoothCubicTo(Point, Point),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePath {
    pub commands: Vec<PathCommand>,
}

impl CurvePath {
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// SVG path data (`d` attribute).
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            let _ = match *cmd {
                PathCommand::MoveTo((x, y)) => write!(d, "M{x},{y}"),
                PathCommand::LineTo((x, y)) => write!(d, "L{x},{y}"),
                PathCommand::HorizontalTo(x) => write!(d, "H{x}"),
                PathCommand::VerticalTo(y) => write!(d, "V{y}"),
                PathCommand::QuadTo((cx, cy), (x, y)) => write!(d, "Q{cx},{cy},{x},{y}"),
                PathCommand::CubicTo((ax, ay), (bx, by), (x, y)) => {
                    write!(d, "C{ax},{ay},{bx},{by},{x},{y}")
                }
                PathCommand::SmoothCubicTo((bx, by), (x, y)) => write!(d, "S{bx},{by},{x},{y}"),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Same geometry using only MoveTo/LineTo/QuadTo/CubicTo/Close, for backends
    /// without relative-shorthand commands.
    pub fn to_absolute(&self) -> Vec<PathCommand> {
        let mut out = Vec::with_capacity(self.commands.len());
        let mut cur = (0.0, 0.0);
        let mut start = (0.0, 0.0);
        let mut last_ctrl: Option<Point> = None;
        for cmd in &self.commands {
            let mut ctrl = None;
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push(PathCommand::MoveTo(p));
                    cur = p;
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    out.push(PathCommand::LineTo(p));
                    cur = p;
                }
                PathCommand::HorizontalTo(x) => {
                    cur = (x, cur.1);
                    out.push(PathCommand::LineTo(cur));
                }
                PathCommand::VerticalTo(y) => {
                    cur = (cur.0, y);
                    out.push(PathCommand::LineTo(cur));
                }
                PathCommand::QuadTo(c, p) => {
                    out.push(PathCommand::QuadTo(c, p));
                    cur = p;
                }
                PathCommand::CubicTo(a, b, p) => {
                    out.push(PathCommand::CubicTo(a, b, p));
                    ctrl = Some(b);
                    cur = p;
                }
                PathCommand::SmoothCubicTo(b, p) => {
                    let a = match last_ctrl {
                        Some((lx, ly)) => (2.0 * cur.0 - lx, 2.0 * cur.1 - ly),
                        None => cur,
                    };
                    out.push(PathCommand::CubicTo(a, b, p));
                    ctrl = Some(b);
                    cur = p;
                }
                PathCommand::Close => {
                    out.push(PathCommand::Close);
                    cur = start;
                }
            }
            last_ctrl = ctrl;
        }
        out
    }
}

/// Maps a series to a drawable path given an interpolation and a pair of scales.
#[derive(Clone, Copy, Debug)]
pub struct CurveGenerator {
    pub interpolation: Interpolation,
    pub tension: f64,
}

impl CurveGenerator {
    pub fn new(interpolation: Interpolation) -> Self {
        Self { interpolation, tension: DEFAULT_TENSION }
    }

    pub fn path(&self, data: &[Point], x: &LinearScale, y: &LinearScale) -> CurvePath {
        let mut commands = Vec::new();
        let mut segment: Vec<Point> = Vec::new();
        for &(dx, dy) in data {
            let p = (x.apply(dx), y.apply(dy));
            if p.0.is_finite() && p.1.is_finite() {
                segment.push(p);
            } else if !segment.is_empty() {
                commands.extend(self.interpolate(&segment));
                segment.clear();
            }
        }
        if !segment.is_empty() {
            commands.extend(self.interpolate(&segment));
        }
        CurvePath { commands }
    }

    /// Commands for one unbroken run of projected points (non-empty).
    pub fn interpolate(&self, points: &[Point]) -> Vec<PathCommand> {
        match self.interpolation {
            Interpolation::Linear => linear(points),
            Interpolation::LinearClosed => linear_closed(points),
            Interpolation::Step => step(points),
            Interpolation::StepBefore => step_before(points),
            Interpolation::StepAfter => step_after(points),
            Interpolation::Basis => basis(points),
            Interpolation::BasisOpen => basis_open(points),
            Interpolation::BasisClosed => basis_closed(points),
            Interpolation::Bundle => bundle(points, self.tension),
            Interpolation::Cardinal => cardinal(points, self.tension),
            Interpolation::CardinalOpen => cardinal_open(points, self.tension),
            Interpolation::CardinalClosed => cardinal_closed(points, self.tension),
            Interpolation::Monotone => monotone(points),
        }
    }
}

// ---- interpolators ------------------------------------------------------------

fn linear(points: &[Point]) -> Vec<PathCommand> {
    let mut out = vec![PathCommand::MoveTo(points[0])];
    if points.len() == 1 {
        out.push(PathCommand::Close);
    } else {
        out.extend(points[1..].iter().map(|&p| PathCommand::LineTo(p)));
    }
    out
}

fn linear_closed(points: &[Point]) -> Vec<PathCommand> {
    let mut out = vec![PathCommand::MoveTo(points[0])];
    out.extend(points[1..].iter().map(|&p| PathCommand::LineTo(p)));
    out.push(PathCommand::Close);
    out
}

fn step(points: &[Point]) -> Vec<PathCommand> {
    let mut out = vec![PathCommand::MoveTo(points[0])];
    for w in points.windows(2) {
        out.push(PathCommand::HorizontalTo((w[0].0 + w[1].0) / 2.0));
        out.push(PathCommand::VerticalTo(w[1].1));
    }
    if let [_, .., last] = points {
        out.push(PathCommand::HorizontalTo(last.0));
    }
    out
}

fn step_before(points: &[Point]) -> Vec<PathCommand> {
    let mut out = vec![PathCommand::MoveTo(points[0])];
    for &(x, y) in &points[1..] {
        out.push(PathCommand::VerticalTo(y));
        out.push(PathCommand::HorizontalTo(x));
    }
    out
}

fn step_after(points: &[Point]) -> Vec<PathCommand> {
    let mut out = vec![PathCommand::MoveTo(points[0])];
    for &(x, y) in &points[1..] {
        out.push(PathCommand::HorizontalTo(x));
        out.push(PathCommand::VerticalTo(y));
    }
    out
}

const BASIS_1: [f64; 4] = [0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
const BASIS_2: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.0];
const BASIS_3: [f64; 4] = [0.0, 1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0];

#[inline]
fn dot4(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Rolling window of the last four control points of a uniform B-spline.
struct BasisWindow {
    px: [f64; 4],
    py: [f64; 4],
}

impl BasisWindow {
    fn push(&mut self, (x, y): Point) {
        self.px.rotate_left(1);
        self.py.rotate_left(1);
        self.px[3] = x;
        self.py[3] = y;
    }

    fn point(&self, w: &[f64; 4]) -> Point {
        (dot4(w, &self.px), dot4(w, &self.py))
    }

    fn segment(&self) -> PathCommand {
        PathCommand::CubicTo(self.point(&BASIS_1), self.point(&BASIS_2), self.point(&BASIS_3))
    }
}

fn basis(points: &[Point]) -> Vec<PathCommand> {
    if points.len() < 3 {
        return linear(points);
    }
    let (x0, y0) = points[0];
    let mut w = BasisWindow { px: [x0, x0, x0, points[1].0], py: [y0, y0, y0, points[1].1] };
    let mut out = vec![PathCommand::MoveTo(points[0]), PathCommand::LineTo(w.point(&BASIS_3))];
    let last = points[points.len() - 1];
    // The final point is repeated so the spline reaches it.
    for &p in points[2..].iter().chain(std::iter::once(&last)) {
        w.push(p);
        out.push(w.segment());
    }
    out.push(PathCommand::LineTo(last));
    out
}

fn basis_open(points: &[Point]) -> Vec<PathCommand> {
    if points.len() < 4 {
        return linear(points);
    }
    let mut w = BasisWindow { px: [0.0; 4], py: [0.0; 4] };
    for &p in &points[..3] {
        w.push(p);
    }
    let mut out = vec![PathCommand::MoveTo(w.point(&BASIS_3))];
    for &p in &points[3..] {
        w.push(p);
        out.push(w.segment());
    }
    out
}

fn basis_closed(points: &[Point]) -> Vec<PathCommand> {
    let n = points.len();
    let mut w = BasisWindow { px: [0.0; 4], py: [0.0; 4] };
    for i in 0..4 {
        w.push(points[i % n]);
    }
    let mut out = vec![PathCommand::MoveTo(w.point(&BASIS_3))];
    for i in 4..n + 4 {
        w.push(points[i % n]);
        out.push(w.segment());
    }
    out
}

fn bundle(points: &[Point], beta: f64) -> Vec<PathCommand> {
    let n = points.len() - 1;
    if n == 0 {
        return basis(points);
    }
    let (x0, y0) = points[0];
    let (dx, dy) = (points[n].0 - x0, points[n].1 - y0);
    let straightened: Vec<Point> = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let t = i as f64 / n as f64;
            (beta * x + (1.0 - beta) * (x0 + t * dx), beta * y + (1.0 - beta) * (y0 + t * dy))
        })
        .collect();
    basis(&straightened)
}

fn cardinal_tangents(points: &[Point], tension: f64) -> Vec<Point> {
    let a = (1.0 - tension) / 2.0;
    points
        .windows(3)
        .map(|w| (a * (w[2].0 - w[0].0), a * (w[2].1 - w[0].1)))
        .collect()
}

fn cardinal(points: &[Point], tension: f64) -> Vec<PathCommand> {
    if points.len() < 3 {
        return linear(points);
    }
    let mut out = vec![PathCommand::MoveTo(points[0])];
    out.extend(hermite(points, &cardinal_tangents(points, tension)));
    out
}

fn cardinal_open(points: &[Point], tension: f64) -> Vec<PathCommand> {
    let n = points.len();
    if n < 4 {
        return linear(points);
    }
    let mut out = vec![PathCommand::MoveTo(points[1])];
    out.extend(hermite(&points[1..n - 1], &cardinal_tangents(points, tension)));
    out
}

fn cardinal_closed(points: &[Point], tension: f64) -> Vec<PathCommand> {
    let n = points.len();
    if n < 3 {
        return linear_closed(points);
    }
    let mut ring = points.to_vec();
    ring.push(points[0]);
    let mut padded = Vec::with_capacity(n + 3);
    padded.push(points[n - 1]);
    padded.extend_from_slice(&ring);
    padded.push(points[1]);
    let mut out = vec![PathCommand::MoveTo(points[0])];
    out.extend(hermite(&ring, &cardinal_tangents(&padded, tension)));
    out
}

fn monotone_tangents(points: &[Point]) -> Vec<Point> {
    let slope = |p0: Point, p1: Point| (p1.1 - p0.1) / (p1.0 - p0.0);
    let j = points.len() - 1;

    // finite differences
    let mut m = vec![0.0; points.len()];
    let mut d = slope(points[0], points[1]);
    m[0] = d;
    for i in 1..j {
        let next = slope(points[i], points[i + 1]);
        m[i] = (d + next) / 2.0;
        d = next;
    }
    m[j] = d;

    for i in 0..j {
        let d = slope(points[i], points[i + 1]);
        if d.abs() < MONOTONE_EPSILON {
            m[i] = 0.0;
            m[i + 1] = 0.0;
        } else {
            let a = m[i] / d;
            let b = m[i + 1] / d;
            let s = a * a + b * b;
            if s > 9.0 {
                let s = d * 3.0 / s.sqrt();
                m[i] = s * a;
                m[i + 1] = s * b;
            }
        }
    }

    let or_zero = |v: f64| if v.is_nan() { 0.0 } else { v };
    (0..=j)
        .map(|i| {
            let s = (points[(i + 1).min(j)].0 - points[i.saturating_sub(1)].0) / (6.0 * (1.0 + m[i] * m[i]));
            (or_zero(s), or_zero(m[i] * s))
        })
        .collect()
}

fn monotone(points: &[Point]) -> Vec<PathCommand> {
    if points.len() < 3 {
        return linear(points);
    }
    let mut out = vec![PathCommand::MoveTo(points[0])];
    out.extend(hermite(points, &monotone_tangents(points)));
    out
}

/// Hermite spline through `points` (after the first) with per-point `tangents`.
/// When there are two more points than tangents, the ends are quadratic.
fn hermite(points: &[Point], tangents: &[Point]) -> Vec<PathCommand> {
    let np = points.len();
    let nt = tangents.len();
    if nt < 1 || (np != nt && np != nt + 2) {
        return points[1..].iter().map(|&p| PathCommand::LineTo(p)).collect();
    }
    let sub = |a: Point, b: Point, f: f64| (a.0 - b.0 * f, a.1 - b.1 * f);
    let add = |a: Point, b: Point, f: f64| (a.0 + b.0 * f, a.1 + b.1 * f);

    let quad = np != nt;
    let mut out = Vec::with_capacity(nt + 2);
    let mut p0 = points[0];
    let mut p = points[1];
    let t0 = tangents[0];
    let mut t = t0;
    let mut pi = 1;

    if quad {
        out.push(PathCommand::QuadTo(sub(p, t0, 2.0 / 3.0), p));
        p0 = points[1];
        pi = 2;
    }
    if nt > 1 {
        t = tangents[1];
        p = points[pi];
        pi += 1;
        out.push(PathCommand::CubicTo(add(p0, t0, 1.0), sub(p, t, 1.0), p));
        for &ti in &tangents[2..] {
            p = points[pi];
            t = ti;
            out.push(PathCommand::SmoothCubicTo(sub(p, t, 1.0), p));
            pi += 1;
        }
    }
    if quad {
        out.push(PathCommand::QuadTo(add(p, t, 2.0 / 3.0), points[pi]));
    }
    out
}
