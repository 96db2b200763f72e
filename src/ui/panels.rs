use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::loader::algorithm_label;
use crate::data::model::{Dataset, Operation};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – sources and data table
// ---------------------------------------------------------------------------

/// Render the left panel: loaded files and the tabular view of one dataset.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sources");
    ui.separator();

    for path in &state.sources {
        let label = algorithm_label(path);
        let color = state.color_map.color_for(&label);
        ui.label(RichText::new(path.display().to_string()).color(color));
    }

    ui.add_space(8.0);
    ui.heading("Data");
    ui.separator();

    egui::ComboBox::from_id_salt("table_operation")
        .selected_text(state.table_operation.name())
        .show_ui(ui, |ui: &mut Ui| {
            for op in Operation::ALL {
                ui.selectable_value(&mut state.table_operation, op, op.name());
            }
        });

    data_table(ui, state.datasets.get(state.table_operation));
}

fn data_table(ui: &mut Ui, dataset: &Dataset) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(row_height + 4.0, |mut header| {
            for name in Dataset::COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, dataset.len(), |mut row| {
                let record = &dataset.records[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(record.n.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.t.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&record.algorithm);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} measurements from {} files",
            state.datasets.add.len(),
            state.sources.len()
        ));

        ui.separator();

        if ui.selectable_label(state.log_scale, "Log time").clicked() {
            state.log_scale = !state.log_scale;
        }

        ui.separator();

        for (alg, color) in state.color_map.legend_entries() {
            ui.label(RichText::new(alg).color(color));
        }
    });
}
