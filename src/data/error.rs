use thiserror::Error;

/// The affordability index could not be derived for a row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("row {row} ({city}): median home price must be positive, got {price}")]
    NonPositivePrice { row: usize, city: String, price: f64 },

    #[error("row {row} ({city}): {column} is not a finite number")]
    NonFinite {
        row: usize,
        city: String,
        column: &'static str,
    },
}

/// Loading a city table failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("parsing CSV")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),

    #[error("reading parquet")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("decoding arrow data")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("expected {0}")]
    Shape(&'static str),

    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("row {row}: '{column}' has no value")]
    MissingValue { row: usize, column: &'static str },

    #[error("row {row}: '{column}' value '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Compute(#[from] ComputeError),
}
