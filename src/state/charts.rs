//! Hand-authored chart datasets for the two overview panels.
//!
//! DESIGN
//! ======
//! Both datasets are constants rather than derivations over the requirement
//! inventory. That mirrors the observed dashboard: the department chart shows
//! authored percentage weights (33/33/33), not record counts, so deriving it
//! from the list would change the rendered output.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

/// One labeled slice of a chart dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: f64,
}

/// Status-distribution dataset for the bar chart.
pub const STATUS_DATA: &[ChartSlice] = &[
    ChartSlice { name: "Pending Approval", value: 1.0 },
    ChartSlice { name: "Approved", value: 1.0 },
    ChartSlice { name: "Processing", value: 1.0 },
];

/// Department-distribution dataset for the pie chart.
pub const DEPARTMENT_DATA: &[ChartSlice] = &[
    ChartSlice { name: "Financial Operations", value: 33.0 },
    ChartSlice { name: "Digital Banking", value: 33.0 },
    ChartSlice { name: "Compliance", value: 33.0 },
];
