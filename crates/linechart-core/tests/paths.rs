// File: crates/linechart-core/tests/paths.rs
// Purpose: Interpolation names, generated path data, and per-series stroke colors.

use linechart_core::{
    render, series_color, ChartOptions, CurveGenerator, Document, Interpolation, LinearScale, PathCommand, Series,
};

fn identity() -> (LinearScale, LinearScale) {
    (LinearScale::new((0.0, 20.0), (0.0, 20.0)), LinearScale::new((0.0, 20.0), (0.0, 20.0)))
}

fn d(interpolation: Interpolation, data: &[(f64, f64)]) -> String {
    let (x, y) = identity();
    CurveGenerator::new(interpolation).path(data, &x, &y).to_svg()
}

fn end_point(cmd: &PathCommand) -> Option<(f64, f64)> {
    match *cmd {
        PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
        PathCommand::QuadTo(_, p) | PathCommand::CubicTo(_, _, p) | PathCommand::SmoothCubicTo(_, p) => Some(p),
        _ => None,
    }
}

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[test]
fn names_round_trip_and_unknown_falls_back() {
    for i in Interpolation::ALL {
        assert_eq!(Interpolation::from_name(i.name()), Some(i));
    }
    assert_eq!(Interpolation::from_name("none"), None);
    assert_eq!(Interpolation::from_name_or_linear("none"), Interpolation::Linear);
    assert_eq!(Interpolation::from_name_or_linear("step-after"), Interpolation::StepAfter);
}

#[test]
fn default_interpolation_is_basis() {
    assert_eq!(ChartOptions::new().interpolation_name(), "basis");
    assert_eq!(ChartOptions::new().with_interpolation("").interpolation_name(), "basis");

    let mut doc = Document::new();
    doc.create_container("chart", 0, 0);
    let data = vec![Series::with_data(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)])];
    let chart = render(&mut doc, "chart", data, &ChartOptions::new()).expect("render");
    assert_eq!(chart.interpolation(), Interpolation::Basis);
}

#[test]
fn step_variants() {
    let pts = [(0.0, 0.0), (2.0, 2.0), (4.0, 0.0)];
    assert_eq!(d(Interpolation::Step, &pts), "M0,0H1V2H3V0H4");
    assert_eq!(d(Interpolation::StepBefore, &pts), "M0,0V2H2V0H4");
    assert_eq!(d(Interpolation::StepAfter, &pts), "M0,0H2V2H4V0");
}

#[test]
fn linear_variants() {
    assert_eq!(d(Interpolation::Linear, &[(3.0, 4.0)]), "M3,4Z");
    assert_eq!(d(Interpolation::Linear, &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]), "M0,0L1,1L2,0");
    assert_eq!(d(Interpolation::LinearClosed, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), "M0,0L1,0L1,1Z");
}

#[test]
fn basis_spline_control_points() {
    let (x, y) = identity();
    let path = CurveGenerator::new(Interpolation::Basis).path(&[(0.0, 0.0), (6.0, 6.0), (12.0, 0.0)], &x, &y);
    let cmds = &path.commands;
    assert_eq!(cmds.len(), 5);
    assert_eq!(cmds[0], PathCommand::MoveTo((0.0, 0.0)));
    assert!(close(end_point(&cmds[1]).unwrap_or_default(), (1.0, 1.0)));
    assert!(matches!(cmds[2], PathCommand::CubicTo(..)));
    assert!(close(end_point(&cmds[2]).unwrap_or_default(), (6.0, 4.0)));
    assert!(close(end_point(&cmds[3]).unwrap_or_default(), (11.0, 1.0)));
    assert_eq!(cmds[4], PathCommand::LineTo((12.0, 0.0)));
}

#[test]
fn short_runs_fall_back_to_straight_segments() {
    let two = [(0.0, 0.0), (4.0, 4.0)];
    for i in [Interpolation::Basis, Interpolation::Cardinal, Interpolation::Monotone, Interpolation::BasisOpen] {
        assert_eq!(d(i, &two), "M0,0L4,4", "{}", i.name());
    }
}

#[test]
fn smooth_curves_end_on_the_last_point() {
    let (x, y) = identity();
    let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0), (4.0, 16.0)];
    for i in [Interpolation::Basis, Interpolation::Bundle, Interpolation::Cardinal, Interpolation::Monotone] {
        let path = CurveGenerator::new(i).path(&pts, &x, &y);
        let first = path.commands.first().and_then(end_point);
        let last = path.commands.last().and_then(end_point);
        assert_eq!(first, Some((0.0, 0.0)), "{}", i.name());
        assert!(close(last.unwrap_or_default(), (4.0, 16.0)), "{}: {:?}", i.name(), last);
    }
}

#[test]
fn monotone_uses_cubic_segments() {
    let (x, y) = identity();
    let path = CurveGenerator::new(Interpolation::Monotone).path(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)], &x, &y);
    assert!(matches!(path.commands[1], PathCommand::CubicTo(..)));
    assert!(path.commands[2..].iter().all(|c| matches!(c, PathCommand::SmoothCubicTo(..))));

    // S commands expand to full cubics for raster backends
    let abs = path.to_absolute();
    assert_eq!(abs.len(), path.commands.len());
    assert!(abs[1..].iter().all(|c| matches!(c, PathCommand::CubicTo(..))));
}

#[test]
fn non_finite_projection_splits_the_line() {
    let pts = [(0.0, 0.0), (1.0, 1.0), (f64::NAN, 5.0), (2.0, 2.0), (3.0, 3.0)];
    assert_eq!(d(Interpolation::Linear, &pts), "M0,0L1,1M2,2L3,3");
    assert_eq!(d(Interpolation::Linear, &[(f64::INFINITY, 0.0)]), "");
}

#[test]
fn one_path_per_series_with_cycling_colors() {
    let data: Vec<Series> = (0..25)
        .map(|i| Series::with_data(vec![(0.0, i as f64), (1.0, i as f64 + 1.0)]))
        .collect();
    let mut doc = Document::new();
    doc.create_container("chart", 0, 0);
    let chart = render(&mut doc, "chart", data, &ChartOptions::new()).expect("render");

    let nodes = chart.path_nodes();
    assert_eq!(nodes.len(), 25);
    let stroke = |i: usize| doc.element(nodes[i]).style("stroke").map(str::to_string);
    assert_eq!(stroke(0).as_deref(), Some("#1f77b4"));
    assert_eq!(stroke(1).as_deref(), Some("#aec7e8"));
    assert_eq!(stroke(20), stroke(0));
    assert_eq!(stroke(21), stroke(1));
    for i in 0..25 {
        assert_eq!(stroke(i), Some(series_color(i).to_string()));
        let field = doc.element(nodes[i]).parent().expect("field group");
        assert_eq!(doc.attr(field, "clip-path"), Some("url(#chart-clip)"));
        assert!(doc.element(field).has_class("field"));
    }

    let svg = chart.svg_node();
    assert_eq!(doc.select_all(svg, Some("path"), &["line"]).len(), 25);
}
