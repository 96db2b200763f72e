use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::Operation;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Timing charts (central panel)
// ---------------------------------------------------------------------------

/// Lay the four operation charts out in a 2×2 grid filling the panel.
pub fn chart_grid(ui: &mut Ui, state: &AppState) {
    let spacing = ui.spacing().item_spacing.y;
    // Each cell holds a heading row above its chart.
    let height = ((ui.available_height() - spacing) / 2.0 - 28.0).max(120.0);

    for pair in Operation::ALL.chunks(2) {
        ui.columns(2, |cols: &mut [Ui]| {
            for (col, &operation) in cols.iter_mut().zip(pair) {
                timing_plot(col, state, operation, height);
            }
        });
    }
}

/// Render one chart: `n` against time, one line per algorithm.
pub fn timing_plot(ui: &mut Ui, state: &AppState, operation: Operation, height: f32) {
    let dataset = state.datasets.get(operation);
    ui.strong(operation.name());

    Plot::new(("timing_plot", operation))
        .legend(Legend::default())
        .x_axis_label("n")
        .y_axis_label(state.y_axis_label())
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for algorithm in dataset.algorithms() {
                let points: PlotPoints = state.plot_points(operation, &algorithm).into();
                let line = Line::new(points)
                    .name(&algorithm)
                    .color(state.color_map.color_for(&algorithm))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
