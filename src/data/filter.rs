use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Year-range bound
// ---------------------------------------------------------------------------

/// An inclusive numeric bound pair. Either side may be unset; the filter is
/// only active when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeBound {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl RangeBound {
    pub fn new(low: f64, high: f64) -> Self {
        RangeBound {
            low: Some(low),
            high: Some(high),
        }
    }

    /// Unset on either side means "no filtering".
    pub fn is_active(&self) -> bool {
        self.low.is_some() && self.high.is_some()
    }
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Return indices of rows whose `field` value is a number inside `bound`,
/// in original row order.
///
/// * Either side of the bound unset → all rows pass (identity).
/// * Bound active → rows with a missing or non-numeric `field` are excluded.
/// * An inverted bound (low > high) is not an error; it simply selects
///   nothing. The bounds are deliberately not swapped.
pub fn filter_by_range(dataset: &Dataset, field: &str, bound: &RangeBound) -> Vec<usize> {
    let (low, high) = match (bound.low, bound.high) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => return (0..dataset.len()).collect(),
    };

    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row.get(field)
                .and_then(CellValue::as_f64)
                .is_some_and(|v| low <= v && v <= high)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn year_row(year: CellValue) -> Row {
        [("year".to_string(), year)].into_iter().collect()
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec!["year".into()],
            vec![
                year_row(CellValue::Number(2000.0)),
                year_row(CellValue::Number(2007.0)),
                year_row(CellValue::Missing),
                year_row(CellValue::Text("unknown".into())),
                year_row(CellValue::Number(2012.0)),
            ],
        )
    }

    #[test]
    fn unset_bound_is_identity() {
        let ds = sample_dataset();
        assert_eq!(
            filter_by_range(&ds, "year", &RangeBound::default()),
            vec![0, 1, 2, 3, 4]
        );
        // Half-set bounds are also inactive.
        let half = RangeBound {
            low: Some(2000.0),
            high: None,
        };
        assert_eq!(filter_by_range(&ds, "year", &half), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn active_bound_excludes_missing_and_text() {
        let ds = sample_dataset();
        let hits = filter_by_range(&ds, "year", &RangeBound::new(2000.0, 2012.0));
        assert_eq!(hits, vec![0, 1, 4]);
    }

    #[test]
    fn bound_is_inclusive_and_order_preserving() {
        let ds = sample_dataset();
        let hits = filter_by_range(&ds, "year", &RangeBound::new(2007.0, 2007.0));
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn inverted_bound_selects_nothing() {
        let ds = sample_dataset();
        let hits = filter_by_range(&ds, "year", &RangeBound::new(2010.0, 2005.0));
        assert!(hits.is_empty());
    }
}
