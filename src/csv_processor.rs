use crate::analysis;
use crate::record::DailyRecord;
use crate::utils;

/// Date layout of the Nasdaq historical-quotes export.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

const REQUIRED_COLUMNS: [&str; 6] = ["Date", "Close/Last", "Volume", "Open", "High", "Low"];

/// Represents a single row of the input CSV, before any parsing.
///
/// Prices stay as text because they usually carry a `$` prefix.
#[derive(Debug, serde::Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close/Last")]
    close: String,
    #[serde(rename = "Volume")]
    volume: String,
    #[serde(rename = "Open")]
    open: String,
    #[serde(rename = "High")]
    high: String,
    #[serde(rename = "Low")]
    low: String,
}

/// Errors raised while turning CSV rows into `DailyRecord`s.
///
/// `row` is the 1-based data row, header excluded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Row {row}: invalid {column} price {value:?}")]
    Price {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("Row {row}: invalid volume {value:?}")]
    Volume { row: usize, value: String },
    #[error("Row {row}: invalid date {value:?}: {source}")]
    Date {
        row: usize,
        value: String,
        source: chrono::ParseError,
    },
}

fn verify_required_columns(headers: &csv::StringRecord) -> Result<(), LoadError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn parse_price(row: usize, column: &'static str, raw: &str) -> Result<f64, LoadError> {
    utils::parse_price(raw).ok_or_else(|| LoadError::Price {
        row,
        column,
        value: raw.to_string(),
    })
}

/// Converts one raw CSV row into a typed record.
fn to_daily_record(row: usize, record: CsvRecord, date_format: &str) -> Result<DailyRecord, LoadError> {
    let date = chrono::NaiveDate::parse_from_str(record.date.trim(), date_format).map_err(|source| {
        LoadError::Date {
            row,
            value: record.date.clone(),
            source,
        }
    })?;
    let volume = record.volume.trim().parse::<u64>().map_err(|_| LoadError::Volume {
        row,
        value: record.volume.clone(),
    })?;

    Ok(DailyRecord {
        date,
        open: parse_price(row, "Open", &record.open)?,
        high: parse_price(row, "High", &record.high)?,
        low: parse_price(row, "Low", &record.low)?,
        close: parse_price(row, "Close/Last", &record.close)?,
        volume,
    })
}

/// Reads every data row from `reader` in file order.
///
/// # Arguments
/// * `reader` - CSV reader positioned before the header row.
/// * `date_format` - chrono format string for the `Date` column.
///
/// # Errors
/// * `LoadError::MissingColumn` if a required header is absent.
/// * A row-tagged `LoadError` for the first unparseable date, price or volume.
pub fn read_records<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    date_format: &str,
) -> Result<Vec<DailyRecord>, LoadError> {
    verify_required_columns(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let raw: CsvRecord = result?;
        records.push(to_daily_record(i + 1, raw, date_format)?);
    }
    Ok(records)
}

/// Opens `path` and loads all of its rows.
pub fn load_csv<P: AsRef<std::path::Path>>(path: P, date_format: &str) -> anyhow::Result<Vec<DailyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.as_ref().display(), e))?;

    read_records(&mut reader, date_format)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.as_ref().display(), e))
}

/// A CSV file on disk used as the record source for one analysis run.
#[derive(Debug, Clone)]
pub struct CsvSource {
    pub path: std::path::PathBuf,
    pub date_format: String,
}

impl CsvSource {
    pub fn new<P: Into<std::path::PathBuf>>(path: P, date_format: &str) -> Self {
        CsvSource {
            path: path.into(),
            date_format: date_format.to_string(),
        }
    }
}

impl analysis::RecordSource for CsvSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> anyhow::Result<Vec<DailyRecord>> {
        load_csv(&self.path, &self.date_format)
    }
}
