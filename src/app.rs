use eframe::egui;

use crate::export;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ChartboardApp {
    pub state: AppState,
}

impl ChartboardApp {
    /// Finish a pending chart export once the screenshot event arrives,
    /// cropping the frame to the chart surface.
    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        if self.state.pending_image_export.is_none() {
            return;
        }

        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });

        let Some(image) = screenshot else {
            return;
        };
        let Some(path) = self.state.pending_image_export.take() else {
            return;
        };

        let cropped = match self.state.chart_rect {
            Some(rect) => image.region(&rect, Some(ctx.pixels_per_point())),
            None => (*image).clone(),
        };

        match export::save_chart_png(&cropped, &path) {
            Ok(()) => {
                log::info!("Saved chart image to {}", path.display());
                self.state.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                log::error!("Chart export failed: {e}");
                self.state.status_message = Some(format!("Export error: {e}"));
            }
        }
    }
}

impl eframe::App for ChartboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot_events(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: chart controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart or data table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.show_table {
                table::data_table(ui, &self.state);
            } else {
                plot::chart_panel(ui, &mut self.state);
            }
        });
    }
}
