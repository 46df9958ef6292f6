use std::path::Path;

use eframe::egui;
use thiserror::Error;

use crate::data::model::Dataset;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export buffer was not valid UTF-8")]
    InvalidUtf8,
    #[error("screenshot buffer had an unexpected size")]
    BadImage,
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Serialize the dataset back to CSV text: header first, columns in the
/// loaded header order, missing cells as empty fields.
pub fn dataset_to_csv(dataset: &Dataset) -> Result<String, ExportError> {
    let mut bytes = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut bytes);
        writer.write_record(dataset.columns())?;

        for row in &dataset.rows {
            let record: Vec<String> = dataset
                .columns()
                .iter()
                .map(|col| row.get(col).map(|v| v.to_string()).unwrap_or_default())
                .collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }
    String::from_utf8(bytes).map_err(|_| ExportError::InvalidUtf8)
}

/// Write the dataset as a CSV file.
pub fn save_csv(dataset: &Dataset, path: &Path) -> Result<(), ExportError> {
    let text = dataset_to_csv(dataset)?;
    std::fs::write(path, text)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Chart image export
// ---------------------------------------------------------------------------

/// Encode a screenshot of the chart surface as a PNG file.
pub fn save_chart_png(image: &egui::ColorImage, path: &Path) -> Result<(), ExportError> {
    let width = image.size[0] as u32;
    let height = image.size[1] as u32;
    let raw: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();

    let buffer = image::RgbaImage::from_raw(width, height, raw).ok_or(ExportError::BadImage)?;
    buffer.save(path)?;
    Ok(())
}
