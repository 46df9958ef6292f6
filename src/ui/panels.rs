use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::aggregate::AggregationMode;
use crate::data::filter::RangeBound;
use crate::data::series::ChartKind;
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            axis_selectors(ui, state);
            ui.separator();
            year_range_controls(ui, state);
            ui.separator();
            chart_kind_controls(ui, state);
            ui.separator();
            export_buttons(ui, state);
        });
}

fn axis_selectors(ui: &mut Ui, state: &mut AppState) {
    let columns: Vec<String> = state
        .dataset
        .as_ref()
        .map(|ds| ds.columns().to_vec())
        .unwrap_or_default();

    ui.strong("X-axis column");
    let current_x = state.x_column.clone();
    egui::ComboBox::from_id_salt("x_axis")
        .selected_text(current_x.clone().unwrap_or_else(|| "(row index)".into()))
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_x.is_none(), "(row index)")
                .clicked()
            {
                state.set_x_column(None);
            }
            for col in &columns {
                if ui
                    .selectable_label(current_x.as_deref() == Some(col), col)
                    .clicked()
                {
                    state.set_x_column(Some(col.clone()));
                }
            }
        });

    ui.add_space(4.0);

    ui.strong("Y-axis column");
    let current_y = state.y_column.clone();
    egui::ComboBox::from_id_salt("y_axis")
        .selected_text(current_y.clone().unwrap_or_else(|| "(none)".into()))
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_y.is_none(), "(none)")
                .clicked()
            {
                state.set_y_column(None);
            }
            for col in &columns {
                if ui
                    .selectable_label(current_y.as_deref() == Some(col), col)
                    .clicked()
                {
                    state.set_y_column(Some(col.clone()));
                }
            }
        });
}

fn year_range_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Year range");

    let bounds = state.dataset.as_ref().and_then(|ds| ds.year_bounds());
    let Some((min_year, max_year)) = bounds else {
        ui.label("No numeric 'year' column in this dataset.");
        return;
    };

    let mut active = state.year_range.is_active();
    if ui.checkbox(&mut active, "Filter by year").changed() {
        let range = if active {
            RangeBound::new(min_year, max_year)
        } else {
            RangeBound::default()
        };
        state.set_year_range(range);
    }

    if let (Some(low), Some(high)) = (state.year_range.low, state.year_range.high) {
        let mut low = low;
        let mut high = high;
        let mut changed = false;

        changed |= ui
            .add(Slider::new(&mut low, min_year..=max_year).integer().text("Start"))
            .changed();
        changed |= ui
            .add(Slider::new(&mut high, min_year..=max_year).integer().text("End"))
            .changed();

        // A start dragged past the end is allowed; the chart just goes empty.
        if changed {
            state.set_year_range(RangeBound::new(low, high));
        }
    }
}

fn chart_kind_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Chart type");
    let current_kind = state.chart_kind;
    egui::ComboBox::from_id_salt("chart_kind")
        .selected_text(current_kind.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in [ChartKind::Line, ChartKind::Bar] {
                if ui
                    .selectable_label(current_kind == kind, kind.to_string())
                    .clicked()
                {
                    state.set_chart_kind(kind);
                }
            }
        });

    // Aggregation only applies per-group in bar mode.
    if state.chart_kind == ChartKind::Bar {
        ui.add_space(4.0);
        ui.strong("Bar aggregation");
        let current_mode = state.aggregation;
        egui::ComboBox::from_id_salt("bar_aggregation")
            .selected_text(current_mode.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for mode in AggregationMode::ALL {
                    if ui
                        .selectable_label(current_mode == mode, mode.to_string())
                        .clicked()
                    {
                        state.set_aggregation(mode);
                    }
                }
            });
    }
}

fn export_buttons(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Export");

    if ui.button("Download CSV…").clicked() {
        export_csv_dialog(state);
    }

    let can_export_chart = state.chart.is_some() && !state.show_table;
    if ui
        .add_enabled(can_export_chart, egui::Button::new("Download chart…"))
        .clicked()
    {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Save chart image")
            .add_filter("PNG", &["png"])
            .set_file_name("chart.png")
            .save_file()
        {
            state.pending_image_export = Some(path);
            ui.ctx()
                .send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
    }
}

fn export_csv_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    if let Some(path) = rfd::FileDialog::new()
        .set_title("Save dataset as CSV")
        .add_filter("CSV", &["csv"])
        .set_file_name("data.csv")
        .save_file()
    {
        match export::save_csv(dataset, &path) {
            Ok(()) => {
                log::info!("Exported {} rows to {}", dataset.len(), path.display());
                state.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("CSV export failed: {e}");
                state.status_message = Some(format!("Export error: {e}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows × {} columns, {} visible",
                ds.len(),
                ds.columns().len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Data table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.columns()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
