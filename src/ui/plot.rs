use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::data::series::ChartKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart panel (central panel)
// ---------------------------------------------------------------------------

/// Render the active chart series in the central panel.
pub fn chart_panel(ui: &mut Ui, state: &mut AppState) {
    let series = match &state.chart {
        Some(series) => series.clone(),
        None => {
            state.chart_rect = None;
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV and pick a Y-axis column  (File → Open…)");
            });
            return;
        }
    };

    let color = state.style.color_for(&series.name);
    let labels = series.labels.clone();
    let x_title = state.x_column.clone().unwrap_or_else(|| "Index".to_string());
    let y_title = state.y_column.clone().unwrap_or_default();

    let response = Plot::new("chart_panel")
        .legend(egui_plot::Legend::default())
        .x_axis_label(x_title)
        .y_axis_label(y_title)
        .x_axis_formatter(move |mark, _range| {
            // Category axis: grid positions are row/group indices.
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| match series.kind {
            ChartKind::Line => {
                // Gaps split the line: draw one segment per contiguous run.
                let mut segment: Vec<[f64; 2]> = Vec::new();
                let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
                for (i, value) in series.values.iter().enumerate() {
                    match value {
                        Some(v) => segment.push([i as f64, *v]),
                        None => {
                            if !segment.is_empty() {
                                segments.push(std::mem::take(&mut segment));
                            }
                        }
                    }
                }
                if !segment.is_empty() {
                    segments.push(segment);
                }

                for seg in segments {
                    if seg.len() == 1 {
                        // A lone point between gaps would vanish as a line.
                        plot_ui.points(
                            Points::new(PlotPoints::from(seg))
                                .name(&series.name)
                                .color(color)
                                .radius(3.0),
                        );
                    } else {
                        plot_ui.line(
                            Line::new(PlotPoints::from(seg))
                                .name(&series.name)
                                .color(color)
                                .width(1.5),
                        );
                    }
                }
            }
            ChartKind::Bar => {
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(|(i, v)| v.map(|v| Bar::new(i as f64, v).width(0.6)))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&series.name).color(color));
            }
        });

    state.chart_rect = Some(response.response.rect);
}
