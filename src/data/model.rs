use std::collections::BTreeMap;
use std::fmt;

/// Column name used by the year-range filter.
pub const YEAR_COLUMN: &str = "year";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the dataset
// ---------------------------------------------------------------------------

/// A dynamically-typed CSV cell. Values that parse as numbers are `Number`,
/// empty fields are `Missing`, everything else is `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell. Only `Number` qualifies; filtering and
    /// aggregation are defined over numbers alone.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Rust's shortest float formatting: 2010.0 renders as "2010",
            // which the CSV round-trip relies on.
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one parsed CSV record
// ---------------------------------------------------------------------------

/// One record of the loaded file: column name → value.
pub type Row = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed dataset. Rows keep file order; `columns` keeps the header
/// order exactly as loaded so an export can reproduce it byte-identically.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
    columns: Vec<String>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { rows, columns }
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` in row `idx`, if the cell exists.
    pub fn cell(&self, idx: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(idx).and_then(|row| row.get(column))
    }

    /// Min and max of the numeric `year` column, used to bound the range
    /// sliders. `None` when no row carries a numeric year.
    pub fn year_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for row in &self.rows {
            if let Some(y) = row.get(YEAR_COLUMN).and_then(CellValue::as_f64) {
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(y), hi.max(y)),
                    None => (y, y),
                });
            }
        }
        bounds
    }
}
