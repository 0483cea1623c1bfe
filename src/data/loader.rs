use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::{cast_with_options, CastOptions};
use arrow::datatypes::{DataType, Float64Type};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Column names the loader depends on. These must match the file exactly.
pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_COLUMN: &str = "Booster Version";
pub const CLASS_COLUMN: &str = "class";

const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, BOOSTER_COLUMN, CLASS_COLUMN];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while reading the launch table.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: '{column}' is empty")]
    NullValue { row: usize, column: &'static str },

    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: f64 },

    #[error("column '{column}' holds a value that cannot be read as {expected}: {source}")]
    InvalidColumn {
        column: &'static str,
        expected: DataType,
        #[source]
        source: ArrowError,
    },

    #[error("row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

pub type Result<T> = std::result::Result<T, DatasetError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one launch per line (the usual export)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?),
        "json" => read_json(std::fs::File::open(path)?),
        "parquet" | "pq" => load_parquet(path),
        other => Err(DatasetError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Row shape shared by the CSV and JSON readers
// ---------------------------------------------------------------------------

/// One row as it appears in the file. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "class")]
    class: f64,
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<LaunchRecord> {
        validate(row, self.site, self.payload_mass, self.booster_version, self.class)
    }
}

fn validate(
    row: usize,
    site: String,
    payload_mass: f64,
    booster_version: String,
    class: f64,
) -> Result<LaunchRecord> {
    if !payload_mass.is_finite() || payload_mass < 0.0 {
        return Err(DatasetError::InvalidPayload {
            row,
            value: payload_mass,
        });
    }
    let outcome = if class.fract() == 0.0 {
        Outcome::from_class(class as i64)
    } else {
        None
    };
    let outcome = outcome.ok_or(DatasetError::InvalidClass { row, value: class })?;
    Ok(LaunchRecord {
        site,
        payload_mass,
        booster_version,
        outcome,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one launch per line.
/// Columns other than the four required ones are skipped.
pub fn read_csv<R: Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        records.push(result?.into_record(row)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
pub fn read_json<R: Read>(input: R) -> Result<LaunchDataset> {
    let rows: Vec<serde_json::Value> = serde_json::from_reader(input)?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.into_iter().enumerate() {
        if let Some(obj) = value.as_object() {
            if let Some(column) = REQUIRED_COLUMNS.iter().find(|c| !obj.contains_key(**c)) {
                return Err(DatasetError::MissingColumn(*column));
            }
        }
        let raw: RawRecord = serde_json::from_value(value)?;
        records.push(raw.into_record(row)?);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat `Launch Site`, `Payload Mass (kg)`,
/// `Booster Version` and `class` columns.
///
/// Numeric columns may be any integer or float type and string columns
/// either `Utf8` or `LargeUtf8`; everything is cast before reading.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();
    for batch in reader {
        read_batch(&batch?, &mut records)?;
    }

    Ok(LaunchDataset::from_records(records))
}

fn read_batch(batch: &RecordBatch, records: &mut Vec<LaunchRecord>) -> Result<()> {
    let site = column_as(batch, SITE_COLUMN, &DataType::Utf8)?;
    let payload = column_as(batch, PAYLOAD_COLUMN, &DataType::Float64)?;
    let booster = column_as(batch, BOOSTER_COLUMN, &DataType::Utf8)?;
    let class = column_as(batch, CLASS_COLUMN, &DataType::Float64)?;

    let site_values = site.as_string::<i32>();
    let payload_values = payload.as_primitive::<Float64Type>();
    let booster_values = booster.as_string::<i32>();
    let class_values = class.as_primitive::<Float64Type>();

    let offset = records.len();
    for i in 0..batch.num_rows() {
        let row = offset + i;
        for (column, array) in [
            (SITE_COLUMN, &site),
            (PAYLOAD_COLUMN, &payload),
            (BOOSTER_COLUMN, &booster),
            (CLASS_COLUMN, &class),
        ] {
            if array.is_null(i) {
                return Err(DatasetError::NullValue { row, column });
            }
        }
        records.push(validate(
            row,
            site_values.value(i).to_string(),
            payload_values.value(i),
            booster_values.value(i).to_string(),
            class_values.value(i),
        )?);
    }
    Ok(())
}

/// Look up a column by its exact name and cast it to `target`.
///
/// The cast is strict: a cell that cannot be converted fails the whole
/// column instead of silently turning into a null.
fn column_as(batch: &RecordBatch, name: &'static str, target: &DataType) -> Result<ArrayRef> {
    let column = batch
        .column_by_name(name)
        .ok_or(DatasetError::MissingColumn(name))?;
    let options = CastOptions {
        safe: false,
        ..Default::default()
    };
    cast_with_options(column.as_ref(), target, &options).map_err(|source| {
        DatasetError::InvalidColumn {
            column: name,
            expected: target.clone(),
            source,
        }
    })
}
