//! Pie chart over the department-distribution dataset.

use leptos::prelude::*;

use crate::state::charts::DEPARTMENT_DATA;
use crate::util::chart_math::{arc_path, mid_angle, percent_label, polar_point, slice_angles};
use crate::util::color::{rgba, slice_color};

const VIEW_W: f64 = 360.0;
const VIEW_H: f64 = 200.0;
const CX: f64 = 180.0;
const CY: f64 = 92.0;
const RADIUS: f64 = 64.0;
const LABEL_RADIUS: f64 = 82.0;

/// "Department Distribution" panel: pie slices with percent labels and a
/// tinted legend, palette cycled by slice index.
#[component]
pub fn DepartmentChart() -> impl IntoView {
    let values: Vec<f64> = DEPARTMENT_DATA.iter().map(|slice| slice.value).collect();
    let total: f64 = values.iter().sum();
    let angles = slice_angles(&values);

    let slices = DEPARTMENT_DATA
        .iter()
        .zip(angles)
        .enumerate()
        .map(|(index, (slice, (start, end)))| {
            let path = arc_path(CX, CY, RADIUS, start, end);
            let (label_x, label_y) = polar_point(CX, CY, LABEL_RADIUS, mid_angle(start, end));
            let label = format!("{} {}", slice.name, percent_label(slice.value, total));
            view! {
                <path d=path class="chart__slice" fill=slice_color(index)/>
                <text
                    x=format!("{label_x:.2}")
                    y=format!("{label_y:.2}")
                    class="chart__slice-label"
                    text-anchor="middle"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    let legend = DEPARTMENT_DATA
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let chip_style = format!("background: {}", rgba(slice_color(index), 0.15));
            let dot_style = format!("background: {}", slice_color(index));
            view! {
                <li class="chart-legend__item" style=chip_style>
                    <span class="chart-legend__dot" style=dot_style></span>
                    {slice.name}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="chart-panel">
            <h3 class="chart-panel__title">"Department Distribution"</h3>
            <svg
                class="chart chart--pie"
                viewBox=format!("0 0 {VIEW_W} {VIEW_H}")
                role="img"
                aria-label="Department distribution"
            >
                {slices}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}
