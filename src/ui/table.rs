use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Render the raw dataset as a scrollable table (data preview).
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV to preview its rows  (File → Open…)");
            });
            return;
        }
    };

    let columns = dataset.columns().to_vec();
    let visible = state.visible_indices.clone();

    let mut builder = TableBuilder::new(ui).striped(true).resizable(true);
    for _ in &columns {
        builder = builder.column(Column::auto().at_least(60.0));
    }

    builder
        .header(20.0, |mut header| {
            for col in &columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut table_row| {
                let row_idx = visible[table_row.index()];
                for col in &columns {
                    table_row.col(|ui| {
                        let text = dataset
                            .cell(row_idx, col)
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        ui.label(text);
                    });
                }
            });
        });
}
