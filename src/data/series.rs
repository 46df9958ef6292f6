use std::collections::BTreeMap;
use std::fmt;

use super::aggregate::{aggregate, AggregationMode};
use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Chart kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Line
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => write!(f, "Line"),
            ChartKind::Bar => write!(f, "Bar"),
        }
    }
}

// ---------------------------------------------------------------------------
// ChartSeries – the chart-ready structure
// ---------------------------------------------------------------------------

/// One named label/value series, ready for the rendering side. `None` values
/// are gaps: no point in line mode, no bar in bar mode.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// Series builder
// ---------------------------------------------------------------------------

/// Shape the selected rows into a chart-ready series.
///
/// `indices` selects rows of `dataset` (normally the output of
/// [`super::filter::filter_by_range`]). Returns `None` when there is nothing
/// to render: no rows selected, or no Y column chosen.
///
/// Line mode emits one (label, value) pair per row in selection order; labels
/// are the stringified X cells (row index when no X column is chosen, the
/// axis then reads as an index axis) and may repeat. Non-numeric Y cells
/// become gaps.
///
/// Bar mode groups rows by the stringified X cell. Group keys become labels
/// in lexicographic ascending order — the map key order, so "10" sorts before
/// "2". That matches the original dashboard and is kept on purpose. Each
/// group's numeric Y values are reduced with `mode`; a group with no numeric
/// Y cell yields a gap.
pub fn build_series(
    dataset: &Dataset,
    indices: &[usize],
    x_column: Option<&str>,
    y_column: Option<&str>,
    kind: ChartKind,
    mode: AggregationMode,
) -> Option<ChartSeries> {
    let y_column = y_column.filter(|y| !y.is_empty())?;
    if indices.is_empty() {
        return None;
    }

    let label_for = |idx: usize| -> String {
        match x_column {
            Some(x) => dataset
                .cell(idx, x)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            None => idx.to_string(),
        }
    };

    match kind {
        ChartKind::Line => {
            let mut labels = Vec::with_capacity(indices.len());
            let mut values = Vec::with_capacity(indices.len());
            for &idx in indices {
                labels.push(label_for(idx));
                values.push(dataset.cell(idx, y_column).and_then(CellValue::as_f64));
            }
            Some(ChartSeries {
                name: y_column.to_string(),
                kind,
                labels,
                values,
            })
        }
        ChartKind::Bar => {
            // BTreeMap gives the lexicographic label order for free.
            let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
            for &idx in indices {
                let entry = groups.entry(label_for(idx)).or_default();
                if let Some(v) = dataset.cell(idx, y_column).and_then(CellValue::as_f64) {
                    entry.push(v);
                }
            }
            let (labels, values): (Vec<_>, Vec<_>) = groups
                .into_iter()
                .map(|(label, group)| (label, aggregate(&group, mode)))
                .unzip();
            Some(ChartSeries {
                name: format!("{mode} of {y_column}"),
                kind,
                labels,
                values,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn xy_dataset() -> Dataset {
        Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                row(&[("x", CellValue::Text("B".into())), ("y", CellValue::Number(10.0))]),
                row(&[("x", CellValue::Text("A".into())), ("y", CellValue::Number(20.0))]),
                row(&[("x", CellValue::Text("B".into())), ("y", CellValue::Number(30.0))]),
            ],
        )
    }

    fn all(ds: &Dataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn empty_selection_or_unset_y_is_nothing_to_render() {
        let ds = xy_dataset();
        let none = build_series(
            &ds,
            &[],
            Some("x"),
            Some("y"),
            ChartKind::Line,
            AggregationMode::Average,
        );
        assert_eq!(none, None);

        let no_y = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            None,
            ChartKind::Bar,
            AggregationMode::Average,
        );
        assert_eq!(no_y, None);

        // An empty-string Y selection counts as unset.
        let empty_y = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            Some(""),
            ChartKind::Line,
            AggregationMode::Average,
        );
        assert_eq!(empty_y, None);
    }

    #[test]
    fn line_mode_preserves_row_order_and_duplicates() {
        let ds = xy_dataset();
        let series = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            Some("y"),
            ChartKind::Line,
            AggregationMode::Average,
        )
        .unwrap();

        assert_eq!(series.name, "y");
        assert_eq!(series.labels, vec!["B", "A", "B"]);
        assert_eq!(series.values, vec![Some(10.0), Some(20.0), Some(30.0)]);
    }

    #[test]
    fn line_mode_emits_gaps_for_non_numeric_y() {
        let ds = Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                row(&[("x", CellValue::Number(1.0)), ("y", CellValue::Number(5.0))]),
                row(&[("x", CellValue::Number(2.0)), ("y", CellValue::Text("oops".into()))]),
                row(&[("x", CellValue::Number(3.0)), ("y", CellValue::Missing)]),
            ],
        );
        let series = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            Some("y"),
            ChartKind::Line,
            AggregationMode::Average,
        )
        .unwrap();
        assert_eq!(series.values, vec![Some(5.0), None, None]);
    }

    #[test]
    fn line_mode_without_x_labels_by_row_index() {
        let ds = xy_dataset();
        let series = build_series(
            &ds,
            &all(&ds),
            None,
            Some("y"),
            ChartKind::Line,
            AggregationMode::Average,
        )
        .unwrap();
        assert_eq!(series.labels, vec!["0", "1", "2"]);
    }

    #[test]
    fn bar_mode_groups_and_sorts_labels_lexicographically() {
        let ds = xy_dataset();
        let series = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            Some("y"),
            ChartKind::Bar,
            AggregationMode::Average,
        )
        .unwrap();

        assert_eq!(series.name, "average of y");
        assert_eq!(series.labels, vec!["A", "B"]);
        assert_eq!(series.values, vec![Some(20.0), Some(20.0)]);
    }

    #[test]
    fn bar_mode_numeric_looking_labels_sort_as_strings() {
        let ds = Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                row(&[("x", CellValue::Number(10.0)), ("y", CellValue::Number(1.0))]),
                row(&[("x", CellValue::Number(2.0)), ("y", CellValue::Number(1.0))]),
            ],
        );
        let series = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            Some("y"),
            ChartKind::Bar,
            AggregationMode::Count,
        )
        .unwrap();
        // "10" before "2" under string ordering; kept as-is.
        assert_eq!(series.labels, vec!["10", "2"]);
    }

    #[test]
    fn bar_mode_group_without_numbers_is_a_gap() {
        let ds = Dataset::new(
            vec!["x".into(), "y".into()],
            vec![
                row(&[("x", CellValue::Text("A".into())), ("y", CellValue::Missing)]),
                row(&[("x", CellValue::Text("A".into())), ("y", CellValue::Text("-".into()))]),
                row(&[("x", CellValue::Text("B".into())), ("y", CellValue::Number(4.0))]),
            ],
        );
        let series = build_series(
            &ds,
            &all(&ds),
            Some("x"),
            Some("y"),
            ChartKind::Bar,
            AggregationMode::Total,
        )
        .unwrap();
        assert_eq!(series.labels, vec!["A", "B"]);
        assert_eq!(series.values, vec![None, Some(4.0)]);
    }

    #[test]
    fn bar_mode_respects_the_selection() {
        let ds = xy_dataset();
        // Only the two B rows selected.
        let series = build_series(
            &ds,
            &[0, 2],
            Some("x"),
            Some("y"),
            ChartKind::Bar,
            AggregationMode::Median,
        )
        .unwrap();
        assert_eq!(series.labels, vec!["B"]);
        assert_eq!(series.values, vec![Some(20.0)]);
    }
}
