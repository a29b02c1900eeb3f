//! SVG geometry for the dashboard trend charts.
//!
//! Charts draw into a fixed `CHART_WIDTH` x `CHART_HEIGHT` viewBox and let
//! CSS scale them. The value range always includes zero so bars and filled
//! areas share one baseline.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 200.0;
pub const CHART_PADDING: f64 = 16.0;

/// Share of each bar slot left empty on either side.
const BAR_GAP_RATIO: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Smallest range covering zero and every value in `series`.
#[must_use]
pub fn value_range(series: &[&[f64]]) -> ValueRange {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for value in series.iter().flat_map(|s| s.iter().copied()).filter(|v| v.is_finite()) {
        min = min.min(value);
        max = max.max(value);
    }
    if max - min < f64::EPSILON {
        max = min + 1.0;
    }
    ValueRange { min, max }
}

#[must_use]
pub fn project_y(value: f64, range: ValueRange) -> f64 {
    let plot = CHART_HEIGHT - 2.0 * CHART_PADDING;
    CHART_HEIGHT - CHART_PADDING - (value - range.min) / range.span() * plot
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn project_x(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return CHART_WIDTH / 2.0;
    }
    let plot = CHART_WIDTH - 2.0 * CHART_PADDING;
    CHART_PADDING + index as f64 * plot / (count - 1) as f64
}

fn point(x: f64, y: f64) -> String {
    format!("{x:.1},{y:.1}")
}

/// `points` attribute for an SVG `<polyline>`.
#[must_use]
pub fn polyline_points(values: &[f64], range: ValueRange) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| point(project_x(i, values.len()), project_y(v, range)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `points` attribute for a `<polygon>` filling the area under the line.
#[must_use]
pub fn area_points(values: &[f64], range: ValueRange) -> String {
    if values.is_empty() {
        return String::new();
    }
    let baseline = project_y(0.0, range);
    let last = project_x(values.len() - 1, values.len());
    let first = project_x(0, values.len());
    format!("{} {} {}", polyline_points(values, range), point(last, baseline), point(first, baseline))
}

/// One bar of a bar chart in viewBox coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub negative: bool,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bar_rects(values: &[f64], range: ValueRange) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = (CHART_WIDTH - 2.0 * CHART_PADDING) / values.len() as f64;
    let baseline = project_y(0.0, range);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let top = project_y(v, range);
            BarRect {
                x: CHART_PADDING + i as f64 * slot + slot * BAR_GAP_RATIO,
                y: top.min(baseline),
                width: slot * (1.0 - 2.0 * BAR_GAP_RATIO),
                height: (top - baseline).abs(),
                negative: v < 0.0,
            }
        })
        .collect()
}

/// Evenly spaced horizontal gridlines as `(y, value)`, bottom to top.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn axis_ticks(range: ValueRange, divisions: usize) -> Vec<(f64, f64)> {
    let divisions = divisions.max(1);
    (0..=divisions)
        .map(|i| {
            let value = range.min + range.span() * i as f64 / divisions as f64;
            (project_y(value, range), value)
        })
        .collect()
}
