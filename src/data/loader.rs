use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::LoadError;
use super::model::{
    CITY_COLUMN, COST_OF_LIVING_COLUMN, Dataset, HOME_PRICE_COLUMN, INCOME_COLUMN, RawCityRow,
    REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a city table from a file and derive the affordability index.
pub fn load_and_prepare(path: &Path) -> Result<Dataset, LoadError> {
    let rows = load_file(path)?;
    let dataset = Dataset::prepare(rows)?;
    log::debug!("prepared {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Read a CSV city table from any reader and derive the affordability index.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let rows = parse_csv(reader)?;
    Ok(Dataset::prepare(rows)?)
}

/// Load raw rows from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `City`, `Median_Income`, ... (recommended)
/// * `.json`    – `[{ "City": "...", "Median_Income": 71000, ... }, ...]`
/// * `.parquet` – one column per field, numeric columns of any int/float type
pub fn load_file(path: &Path) -> Result<Vec<RawCityRow>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = open(path)?;
            parse_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            parse_json(&text)
        }
        "parquet" | "pq" => {
            let file = open(path)?;
            parse_parquet(file)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Cell parsing shared by the text formats
// ---------------------------------------------------------------------------

fn parse_city(cell: &str, row: usize) -> Result<String, LoadError> {
    let city = cell.trim();
    if city.is_empty() {
        return Err(LoadError::MissingValue {
            row,
            column: CITY_COLUMN,
        });
    }
    Ok(city.to_string())
}

fn parse_number(cell: &str, row: usize, column: &'static str) -> Result<f64, LoadError> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Err(LoadError::MissingValue { row, column });
    }
    cell.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        value: cell.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one row per city.
/// Columns other than the four required ones are ignored.
fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawCityRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut idx = [0usize; 4];
    for (slot, column) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or(LoadError::MissingColumn { column })?;
    }
    let [city_idx, income_idx, price_idx, col_idx] = idx;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |i: usize| record.get(i).unwrap_or("");

        rows.push(RawCityRow {
            city: parse_city(cell(city_idx), row_no)?,
            median_income: parse_number(cell(income_idx), row_no, INCOME_COLUMN)?,
            median_home_price: parse_number(cell(price_idx), row_no, HOME_PRICE_COLUMN)?,
            cost_of_living_index: parse_number(cell(col_idx), row_no, COST_OF_LIVING_COLUMN)?,
        });
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "City": "Austin", "Median_Income": 85000, "Median_Home_Price": 450000,
///     "Cost_of_Living_Index": 101.2 },
///   ...
/// ]
/// ```
fn parse_json(text: &str) -> Result<Vec<RawCityRow>, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let records = root
        .as_array()
        .ok_or(LoadError::Shape("a top-level JSON array"))?;

    records
        .iter()
        .enumerate()
        .map(|(row, rec)| -> Result<RawCityRow, LoadError> {
            let obj = rec
                .as_object()
                .ok_or(LoadError::Shape("every JSON row to be an object"))?;

            let city = match json_field(obj, row, CITY_COLUMN)? {
                JsonValue::String(s) => parse_city(s, row)?,
                other => parse_city(&other.to_string(), row)?,
            };

            Ok(RawCityRow {
                city,
                median_income: json_number(obj, row, INCOME_COLUMN)?,
                median_home_price: json_number(obj, row, HOME_PRICE_COLUMN)?,
                cost_of_living_index: json_number(obj, row, COST_OF_LIVING_COLUMN)?,
            })
        })
        .collect()
}

fn json_field<'a>(
    obj: &'a Map<String, JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<&'a JsonValue, LoadError> {
    match obj.get(column) {
        None => Err(LoadError::MissingColumn { column }),
        Some(JsonValue::Null) => Err(LoadError::MissingValue { row, column }),
        Some(val) => Ok(val),
    }
}

fn json_number(
    obj: &Map<String, JsonValue>,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    match json_field(obj, row, column)? {
        JsonValue::Number(n) => n.as_f64().ok_or_else(|| LoadError::InvalidNumber {
            row,
            column,
            value: n.to_string(),
        }),
        // Numbers exported as strings still count.
        JsonValue::String(s) => parse_number(s, row, column),
        other => Err(LoadError::InvalidNumber {
            row,
            column,
            value: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet city table.
///
/// `City` may be any type castable to Utf8; the numeric columns any type
/// castable to Float64.  Works with files written by both **Pandas**
/// (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn parse_parquet(file: std::fs::File) -> Result<Vec<RawCityRow>, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    // Resolve columns against the file schema so a file without row groups
    // still reports missing columns.
    let schema = builder.schema().clone();
    let mut idx = [0usize; 4];
    for (slot, column) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = schema
            .index_of(column)
            .map_err(|_| LoadError::MissingColumn { column })?;
    }
    let [city_idx, income_idx, price_idx, col_idx] = idx;

    let reader = builder.build()?;
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;

        let city = cast(batch.column(city_idx), &DataType::Utf8)?;
        let income = NumericColumn::new(batch.column(income_idx), INCOME_COLUMN)?;
        let price = NumericColumn::new(batch.column(price_idx), HOME_PRICE_COLUMN)?;
        let col = NumericColumn::new(batch.column(col_idx), COST_OF_LIVING_COLUMN)?;

        let city = city.as_string::<i32>();
        let offset = rows.len();

        for i in 0..batch.num_rows() {
            let row = offset + i;
            if city.is_null(i) {
                return Err(LoadError::MissingValue {
                    row,
                    column: CITY_COLUMN,
                });
            }
            rows.push(RawCityRow {
                city: parse_city(city.value(i), row)?,
                median_income: income.value(i, row)?,
                median_home_price: price.value(i, row)?,
                cost_of_living_index: col.value(i, row)?,
            });
        }
    }

    Ok(rows)
}

// -- Arrow helpers --

/// A source column next to its Float64 cast.
///
/// The cast turns unparsable cells into nulls; comparing against the source
/// tells those apart from cells that were null to begin with.
struct NumericColumn<'a> {
    source: &'a ArrayRef,
    values: ArrayRef,
    column: &'static str,
}

impl<'a> NumericColumn<'a> {
    fn new(source: &'a ArrayRef, column: &'static str) -> Result<Self, LoadError> {
        let values = cast(source, &DataType::Float64)?;
        Ok(NumericColumn {
            source,
            values,
            column,
        })
    }

    fn value(&self, i: usize, row: usize) -> Result<f64, LoadError> {
        let column = self.column;
        if self.source.is_null(i) {
            return Err(LoadError::MissingValue { row, column });
        }
        if self.values.is_null(i) {
            let value = array_value_to_string(self.source, i)?;
            if value.trim().is_empty() {
                return Err(LoadError::MissingValue { row, column });
            }
            return Err(LoadError::InvalidNumber { row, column, value });
        }
        Ok(self.values.as_primitive::<Float64Type>().value(i))
    }
}
