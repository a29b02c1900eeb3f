//! Dashboard trend charts drawn as inline SVG.

use leptos::prelude::*;

use crate::state::financials::ChartPoint;
use crate::util::chart::{
    CHART_HEIGHT, CHART_WIDTH, ValueRange, area_points, axis_ticks, bar_rects, polyline_points, project_x,
    value_range,
};
use crate::util::format::format_currency;

const TICK_DIVISIONS: usize = 4;

fn view_box() -> String {
    format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
}

fn render_gridlines(range: ValueRange) -> impl IntoView {
    axis_ticks(range, TICK_DIVISIONS)
        .into_iter()
        .map(|(y, value)| {
            view! {
                <g class="trend-chart__tick">
                    <line x1="0" x2=CHART_WIDTH y1=y y2=y />
                    <text x="4" y={y - 4.0}>{format_currency(value)}</text>
                </g>
            }
        })
        .collect_view()
}

fn render_months(points: &[ChartPoint]) -> impl IntoView + use<> {
    let count = points.len();
    let labels: Vec<(f64, String)> =
        points.iter().enumerate().map(|(i, p)| (project_x(i, count), p.month.clone())).collect();
    view! {
        <div class="trend-chart__months">
            {labels
                .into_iter()
                .map(|(x, month)| {
                    let left = format!("left: {:.2}%", x / CHART_WIDTH * 100.0);
                    view! { <span class="trend-chart__month" style=left>{month}</span> }
                })
                .collect_view()}
        </div>
    }
}

/// Revenue (filled line) against expenses (dashed line), trailing twelve months.
#[component]
pub fn RevenueChart(points: Vec<ChartPoint>) -> impl IntoView {
    let revenue: Vec<f64> = points.iter().map(|p| p.revenue).collect();
    let expenses: Vec<f64> = points.iter().map(|p| p.expenses).collect();
    let range = value_range(&[&revenue, &expenses]);

    view! {
        <section class="trend-chart">
            <div class="trend-chart__header">
                <h3 class="trend-chart__title">"Revenue vs Expenses"</h3>
                <div class="trend-chart__legend">
                    <span class="trend-chart__key trend-chart__key--revenue">"Revenue"</span>
                    <span class="trend-chart__key trend-chart__key--expenses">"Expenses"</span>
                </div>
            </div>
            <svg class="trend-chart__plot" viewBox=view_box() preserveAspectRatio="none" aria-hidden="true">
                {render_gridlines(range)}
                <polygon class="trend-chart__area" points=area_points(&revenue, range) />
                <polyline class="trend-chart__line trend-chart__line--revenue" points=polyline_points(&revenue, range) />
                <polyline class="trend-chart__line trend-chart__line--expenses" points=polyline_points(&expenses, range) />
            </svg>
            {render_months(&points)}
        </section>
    }
}

/// Monthly net profit bars with the running cash position overlaid.
#[component]
pub fn CashFlowChart(points: Vec<ChartPoint>) -> impl IntoView {
    let profit: Vec<f64> = points.iter().map(|p| p.profit).collect();
    let cash: Vec<f64> = points.iter().map(|p| p.cash).collect();
    let range = value_range(&[&profit, &cash]);

    view! {
        <section class="trend-chart">
            <div class="trend-chart__header">
                <h3 class="trend-chart__title">"Cash Flow"</h3>
                <div class="trend-chart__legend">
                    <span class="trend-chart__key trend-chart__key--profit">"Net Profit"</span>
                    <span class="trend-chart__key trend-chart__key--cash">"Cash Position"</span>
                </div>
            </div>
            <svg class="trend-chart__plot" viewBox=view_box() preserveAspectRatio="none" aria-hidden="true">
                {render_gridlines(range)}
                {bar_rects(&profit, range)
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <rect
                                class="trend-chart__bar"
                                class:trend-chart__bar--negative=bar.negative
                                x=bar.x
                                y=bar.y
                                width=bar.width
                                height=bar.height
                            />
                        }
                    })
                    .collect_view()}
                <polyline class="trend-chart__line trend-chart__line--cash" points=polyline_points(&cash, range) />
            </svg>
            {render_months(&points)}
        </section>
    }
}
