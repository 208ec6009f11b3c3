//! Bar chart over the status-distribution dataset.
//!
//! Rendered as inline SVG so the panel is present in server-rendered HTML;
//! geometry comes from `util::chart_math`.

use leptos::prelude::*;

use crate::state::charts::STATUS_DATA;
use crate::util::chart_math::{bar_fraction, value_axis_max};

const VIEW_W: f64 = 360.0;
const VIEW_H: f64 = 200.0;
const MARGIN_LEFT: f64 = 30.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;
const BAR_FILL: &str = "#3B82F6";

/// "Requirements by Status" panel: one bar per status label.
#[component]
pub fn StatusChart() -> impl IntoView {
    let plot_w = VIEW_W - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;
    let values: Vec<f64> = STATUS_DATA.iter().map(|slice| slice.value).collect();
    let axis_max = value_axis_max(&values);

    #[allow(clippy::cast_precision_loss)]
    let slot_w = plot_w / STATUS_DATA.len().max(1) as f64;
    let bar_w = slot_w * 0.45;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let tick_count = axis_max as u32;
    let gridlines = (0..=tick_count)
        .map(|step| {
            let y = MARGIN_TOP + plot_h - (bar_fraction(f64::from(step), axis_max) * plot_h);
            view! {
                <line
                    x1=format!("{MARGIN_LEFT:.2}")
                    y1=format!("{y:.2}")
                    x2=format!("{:.2}", MARGIN_LEFT + plot_w)
                    y2=format!("{y:.2}")
                    class="chart__gridline"
                />
                <text
                    x=format!("{:.2}", MARGIN_LEFT - 6.0)
                    y=format!("{:.2}", y + 3.0)
                    class="chart__tick-label"
                    text-anchor="end"
                >
                    {step.to_string()}
                </text>
            }
        })
        .collect_view();

    let bars = STATUS_DATA
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            #[allow(clippy::cast_precision_loss)]
            let slot_x = MARGIN_LEFT + (index as f64 * slot_w);
            let height = bar_fraction(slice.value, axis_max) * plot_h;
            let x = slot_x + ((slot_w - bar_w) / 2.0);
            let y = MARGIN_TOP + plot_h - height;
            let label_x = slot_x + (slot_w / 2.0);
            view! {
                <rect
                    x=format!("{x:.2}")
                    y=format!("{y:.2}")
                    width=format!("{bar_w:.2}")
                    height=format!("{height:.2}")
                    class="chart__bar"
                    fill=BAR_FILL
                />
                <text
                    x=format!("{label_x:.2}")
                    y=format!("{:.2}", VIEW_H - 10.0)
                    class="chart__tick-label"
                    text-anchor="middle"
                >
                    {slice.name}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart-panel">
            <h3 class="chart-panel__title">"Requirements by Status"</h3>
            <svg
                class="chart chart--bar"
                viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
                role="img"
                aria-label="Requirements by status"
            >
                {gridlines}
                {bars}
            </svg>
        </div>
    }
}
