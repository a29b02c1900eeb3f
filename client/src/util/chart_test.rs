use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn range_always_includes_zero() {
    assert_eq!(value_range(&[&[1.0, 2.0], &[3.0]]), ValueRange { min: 0.0, max: 3.0 });
    assert_eq!(value_range(&[&[-5.0, 10.0]]), ValueRange { min: -5.0, max: 10.0 });
    assert_eq!(value_range(&[&[-4.0, -2.0]]), ValueRange { min: -4.0, max: 0.0 });
}

#[test]
fn flat_or_empty_range_is_widened() {
    assert_eq!(value_range(&[&[0.0, 0.0]]), ValueRange { min: 0.0, max: 1.0 });
    assert_eq!(value_range(&[]), ValueRange { min: 0.0, max: 1.0 });
    assert_eq!(value_range(&[&[f64::NAN]]), ValueRange { min: 0.0, max: 1.0 });
}

#[test]
fn projection_maps_range_to_plot_edges() {
    let range = ValueRange { min: 0.0, max: 100.0 };
    assert!(close(project_y(0.0, range), CHART_HEIGHT - CHART_PADDING));
    assert!(close(project_y(100.0, range), CHART_PADDING));
    assert!(close(project_x(0, 12), CHART_PADDING));
    assert!(close(project_x(11, 12), CHART_WIDTH - CHART_PADDING));
    assert!(close(project_x(0, 1), CHART_WIDTH / 2.0));
}

#[test]
fn polyline_and_area_points() {
    let range = ValueRange { min: 0.0, max: 10.0 };
    assert_eq!(polyline_points(&[0.0, 10.0], range), "16.0,184.0 584.0,16.0");
    assert_eq!(area_points(&[0.0, 10.0], range), "16.0,184.0 584.0,16.0 584.0,184.0 16.0,184.0");
    assert_eq!(polyline_points(&[], range), "");
    assert_eq!(area_points(&[], range), "");
}

#[test]
fn bars_grow_from_the_zero_baseline() {
    let range = ValueRange { min: -10.0, max: 10.0 };
    let bars = bar_rects(&[10.0, -10.0], range);
    assert_eq!(bars.len(), 2);

    assert!(close(bars[0].x, 72.8));
    assert!(close(bars[0].width, 170.4));
    assert!(close(bars[0].y, 16.0));
    assert!(close(bars[0].height, 84.0));
    assert!(!bars[0].negative);

    assert!(close(bars[1].y, 100.0));
    assert!(close(bars[1].height, 84.0));
    assert!(bars[1].negative);
}

#[test]
fn ticks_run_bottom_to_top() {
    let ticks = axis_ticks(ValueRange { min: 0.0, max: 100.0 }, 2);
    assert_eq!(ticks.len(), 3);
    assert!(close(ticks[0].0, 184.0) && close(ticks[0].1, 0.0));
    assert!(close(ticks[1].0, 100.0) && close(ticks[1].1, 50.0));
    assert!(close(ticks[2].0, 16.0) && close(ticks[2].1, 100.0));
    assert_eq!(axis_ticks(ValueRange { min: 0.0, max: 1.0 }, 0).len(), 2);
}
