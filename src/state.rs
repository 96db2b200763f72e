use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::model::{Datasets, Operation};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Parsed benchmark data; fixed for the lifetime of the window.
    pub datasets: Datasets,

    /// Files the datasets were read from, in load order.
    pub sources: Vec<PathBuf>,

    /// One colour per algorithm across all charts.
    pub color_map: ColorMap,

    /// Dataset shown in the side-panel table.
    pub table_operation: Operation,

    /// Plot `log10(t)` instead of `t`.
    pub log_scale: bool,
}

impl AppState {
    pub fn new(datasets: Datasets, sources: Vec<PathBuf>) -> Self {
        let color_map = ColorMap::new(&datasets.algorithms());
        Self {
            datasets,
            sources,
            color_map,
            table_operation: Operation::Add,
            log_scale: false,
        }
    }

    /// Points to draw for one algorithm of one dataset under the current
    /// scaling. Non-positive times have no logarithm and are dropped.
    pub fn plot_points(&self, operation: Operation, algorithm: &str) -> Vec<[f64; 2]> {
        let series = self.datasets.get(operation).series(algorithm);
        if !self.log_scale {
            return series;
        }
        series
            .into_iter()
            .filter(|&[_, t]| t > 0.0)
            .map(|[n, t]| [n, t.log10()])
            .collect()
    }

    pub fn y_axis_label(&self) -> &'static str {
        if self.log_scale {
            "log10 t(usec)"
        } else {
            "t(usec)"
        }
    }
}
