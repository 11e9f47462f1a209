// File: crates/linechart-core/tests/bounds.rs
// Purpose: Validate bound resolution (explicit vs data extent) and input validation errors.

use linechart_core::{render, ChartError, ChartOptions, Document, Series, ViewState};

fn doc_with_chart() -> Document {
    let mut doc = Document::new();
    doc.create_container("chart", 0, 0);
    doc
}

#[test]
fn data_extent_spans_every_series() {
    let data = vec![
        Series::with_data(vec![(1.0, 5.0), (3.0, -2.0)]),
        Series::with_data(vec![(-4.0, 0.0)]),
    ];
    let view = ViewState::from_dataset(&data).expect("non-empty");
    assert_eq!(view, ViewState { x_min: -4.0, x_max: 3.0, y_min: -2.0, y_max: 5.0 });
}

#[test]
fn computed_domains_equal_true_min_max() {
    let data = vec![
        Series::with_data(vec![(-2.5, 7.0), (0.0, 1.0), (4.0, 3.0)]),
        Series::with_data(vec![(1.0, -6.0), (9.5, 2.0)]),
    ];
    let mut doc = doc_with_chart();
    let chart = render(&mut doc, "chart", data, &ChartOptions::new()).expect("render");
    assert_eq!(chart.x_scale().domain(), (-2.5, 9.5));
    assert_eq!(chart.y_scale().domain(), (-6.0, 7.0));
}

#[test]
fn explicit_bounds_win_even_when_zero() {
    let data = vec![Series::with_data(vec![(5.0, 5.0), (10.0, 8.0)])];
    let opts = ChartOptions::new().with_x_bounds(0.0, 20.0).with_y_bounds(0.0, 1.0);
    let mut doc = doc_with_chart();
    let chart = render(&mut doc, "chart", data, &opts).expect("render");
    assert_eq!(chart.x_scale().domain(), (0.0, 20.0));
    assert_eq!(chart.y_scale().domain(), (0.0, 1.0));
}

#[test]
fn partial_bounds_mix_with_data_extent() {
    let data = vec![Series::with_data(vec![(5.0, -3.0), (10.0, 8.0)])];
    let opts = ChartOptions { xmin: Some(0.0), ymax: Some(100.0), ..ChartOptions::default() };
    let view = ViewState::resolve(&data, &opts).expect("resolve");
    assert_eq!(view, ViewState { x_min: 0.0, x_max: 10.0, y_min: -3.0, y_max: 100.0 });
}

#[test]
fn zero_width_and_reversed_bounds_are_kept() {
    let data = vec![Series::with_data(vec![(2.0, 1.0), (2.0, 3.0)])];
    let view = ViewState::resolve(&data, &ChartOptions::new()).expect("zero-width x");
    assert_eq!(view.x_domain(), (2.0, 2.0));

    let opts = ChartOptions::new().with_x_bounds(0.0, 1.0).with_y_bounds(4.0, -4.0);
    let view = ViewState::resolve(&data, &opts).expect("reversed y");
    assert_eq!(view.y_domain(), (4.0, -4.0));
}

#[test]
fn non_finite_explicit_bounds_are_rejected() {
    let data = vec![Series::with_data(vec![(0.0, 0.0), (1.0, 1.0)])];
    let opts = ChartOptions { xmax: Some(f64::INFINITY), ..ChartOptions::default() };
    let err = ViewState::resolve(&data, &opts).unwrap_err();
    assert!(matches!(err, ChartError::InvalidBounds { axis: 'x', .. }), "{err}");

    let opts = ChartOptions { ymin: Some(f64::NAN), ..ChartOptions::default() };
    let err = ViewState::resolve(&data, &opts).unwrap_err();
    assert!(matches!(err, ChartError::InvalidBounds { axis: 'y', .. }), "{err}");
}

#[test]
fn flat_line_renders_on_the_bottom_edge() {
    let mut doc = doc_with_chart();
    let data = vec![Series::with_data(vec![(0.0, 0.5), (1.0, 0.5)])];
    let chart = render(&mut doc, "chart", data, &ChartOptions::new()).expect("flat line renders");
    assert_eq!(chart.y_scale().domain(), (0.5, 0.5));
    assert_eq!(doc.attr(chart.path_nodes()[0], "d"), Some("M0,450L880,450"));

    let svg = chart.svg_node();
    let y_axis = doc.select_all(svg, Some("g"), &["y", "axis"])[0];
    let labels: Vec<_> = doc
        .select_all(y_axis, Some("text"), &[])
        .into_iter()
        .filter_map(|t| doc.element(t).text().map(str::to_string))
        .collect();
    assert_eq!(labels, vec!["0.5".to_string()]);
}

#[test]
fn single_point_renders() {
    let mut doc = doc_with_chart();
    let chart = render(&mut doc, "chart", vec![Series::with_data(vec![(3.0, 4.0)])], &ChartOptions::new())
        .expect("single point renders");
    assert_eq!(chart.x_scale().domain(), (3.0, 3.0));
    assert_eq!(chart.y_scale().domain(), (4.0, 4.0));
    assert_eq!(doc.attr(chart.path_nodes()[0], "d"), Some("M0,450Z"));
}

#[test]
fn empty_dataset_is_an_error() {
    let mut doc = doc_with_chart();
    let err = render(&mut doc, "chart", vec![], &ChartOptions::new()).unwrap_err();
    assert_eq!(err, ChartError::EmptyDataset);

    let err = render(&mut doc, "chart", vec![Series::new(), Series::new()], &ChartOptions::new()).unwrap_err();
    assert_eq!(err, ChartError::EmptyDataset);
}

#[test]
fn non_finite_points_are_reported_with_position() {
    let data = vec![
        Series::with_data(vec![(0.0, 0.0)]),
        Series::with_data(vec![(0.0, 0.0), (1.0, f64::INFINITY)]),
    ];
    let mut doc = doc_with_chart();
    let err = render(&mut doc, "chart", data, &ChartOptions::new()).unwrap_err();
    assert!(matches!(err, ChartError::NonFinitePoint { series: 1, index: 1, .. }), "{err}");

    let data = vec![Series::with_data(vec![(f64::NAN, 0.0)])];
    let err = render(&mut doc, "chart", data, &ChartOptions::new()).unwrap_err();
    assert!(matches!(err, ChartError::NonFinitePoint { series: 0, index: 0, .. }), "{err}");
}

#[test]
fn missing_container_is_an_error() {
    let mut doc = doc_with_chart();
    let data = vec![Series::with_data(vec![(0.0, 0.0), (1.0, 1.0)])];
    let err = render(&mut doc, "nope", data, &ChartOptions::new()).unwrap_err();
    assert_eq!(err, ChartError::ContainerNotFound("nope".to_string()));
    assert!(err.to_string().contains("nope"));
}
