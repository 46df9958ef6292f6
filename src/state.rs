use crate::color::SeriesStyle;
use crate::data::aggregate::AggregationMode;
use crate::data::filter::{filter_by_range, RangeBound};
use crate::data::model::{Dataset, YEAR_COLUMN};
use crate::data::series::{build_series, ChartKind, ChartSeries};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Selected X-axis column.
    pub x_column: Option<String>,

    /// Selected Y-axis column.
    pub y_column: Option<String>,

    /// Active year-range bound (inactive while either side is unset).
    pub year_range: RangeBound,

    /// Line or bar.
    pub chart_kind: ChartKind,

    /// Scalar reduction used per group in bar mode.
    pub aggregation: AggregationMode,

    /// Indices of rows passing the current year filter (cached).
    pub visible_indices: Vec<usize>,

    /// The one active chart-ready series; replaced wholesale on rebuild so
    /// the previous chart is released before the new one takes over.
    pub chart: Option<ChartSeries>,

    /// Series colour provider.
    pub style: SeriesStyle,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Show the raw data table instead of the chart.
    pub show_table: bool,

    /// Screen rect of the chart from the last frame, used to crop the
    /// exported screenshot to the chart surface.
    pub chart_rect: Option<eframe::egui::Rect>,

    /// Target path while the app waits for a screenshot to land on disk.
    pub pending_image_export: Option<std::path::PathBuf>,
}

impl AppState {
    /// Ingest a newly loaded dataset; reset selections and rebuild.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.x_column = None;
        self.y_column = None;
        self.year_range = RangeBound::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.rebuild_chart();
    }

    /// Recompute `visible_indices` after a range change, then rebuild.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filter_by_range(ds, YEAR_COLUMN, &self.year_range);
        } else {
            self.visible_indices.clear();
        }
        self.rebuild_chart();
    }

    /// Rebuild the chart-ready series from the current selections. Assigning
    /// the new series drops the previous one.
    pub fn rebuild_chart(&mut self) {
        self.chart = self.dataset.as_ref().and_then(|ds| {
            build_series(
                ds,
                &self.visible_indices,
                self.x_column.as_deref(),
                self.y_column.as_deref(),
                self.chart_kind,
                self.aggregation,
            )
        });
    }

    pub fn set_x_column(&mut self, col: Option<String>) {
        self.x_column = col;
        self.rebuild_chart();
    }

    pub fn set_y_column(&mut self, col: Option<String>) {
        self.y_column = col;
        self.rebuild_chart();
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
        self.rebuild_chart();
    }

    pub fn set_aggregation(&mut self, mode: AggregationMode) {
        self.aggregation = mode;
        self.rebuild_chart();
    }

    /// Update the year bound and refilter.
    pub fn set_year_range(&mut self, range: RangeBound) {
        self.year_range = range;
        self.refilter();
    }
}
