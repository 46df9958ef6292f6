use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, cells typed opportunistically (recommended)
/// * `.json` – records-oriented array: `[{ "col": value, ... }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. Cells that parse as numbers
/// become numbers, empty cells become missing, everything else stays text.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(col, cell)| (col.clone(), guess_cell_type(cell)))
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

/// Opportunistic typing of one CSV cell.
pub fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(v) = s.parse::<f64>() {
        return CellValue::Number(v);
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "year": 2001, "country": "FR", "value": 1.5 },
///   ...
/// ]
/// ```
///
/// Column order follows first appearance across the records, standing in for
/// the CSV header order.
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
            row.insert(key.clone(), json_to_cell(val));
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::Number(n) => match n.as_f64() {
            Some(v) => CellValue::Number(v),
            None => CellValue::Text(n.to_string()),
        },
        JsonValue::String(s) if s.is_empty() => CellValue::Missing,
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Bool(b) => CellValue::Text(b.to_string()),
        JsonValue::Null => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn guess_cell_type_covers_the_three_variants() {
        assert_eq!(guess_cell_type(""), CellValue::Missing);
        assert_eq!(guess_cell_type("2010"), CellValue::Number(2010.0));
        assert_eq!(guess_cell_type("-3.25"), CellValue::Number(-3.25));
        assert_eq!(guess_cell_type("Chile"), CellValue::Text("Chile".into()));
    }

    #[test]
    fn csv_loader_keeps_header_order_and_types_cells() {
        let path = write_temp(
            "chartboard_loader_test.csv",
            "year,country,value\n2001,FR,1.5\n2002,DE,\n",
        );
        let ds = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.columns(), ["year", "country", "value"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.cell(0, "year"), Some(&CellValue::Number(2001.0)));
        assert_eq!(ds.cell(0, "country"), Some(&CellValue::Text("FR".into())));
        assert_eq!(ds.cell(1, "value"), Some(&CellValue::Missing));
    }

    #[test]
    fn json_loader_reads_records() {
        let path = write_temp(
            "chartboard_loader_test.json",
            r#"[{"year": 2001, "country": "FR"}, {"year": 2002, "country": null}]"#,
        );
        let ds = load_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.cell(0, "year"), Some(&CellValue::Number(2001.0)));
        assert_eq!(ds.cell(1, "country"), Some(&CellValue::Missing));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        assert!(load_file(Path::new("data.parquet")).is_err());
    }
}
