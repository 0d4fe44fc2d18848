use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a sample city table for the housing dashboard.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version, about)]
struct Args {
    /// Output file; `.parquet` or `.pq` writes Parquet, anything else CSV.
    #[arg(default_value = "housing_affordability.csv")]
    output: PathBuf,
}

/// One output row, serialized with the column names the dashboard expects.
#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "City")]
    city: &'static str,
    #[serde(rename = "Median_Income")]
    median_income: f64,
    #[serde(rename = "Median_Home_Price")]
    median_home_price: f64,
    #[serde(rename = "Cost_of_Living_Index")]
    cost_of_living_index: f64,
}

/// (city, median household income, median home price, cost of living index)
const CITIES: [(&str, f64, f64, f64); 20] = [
    ("New York", 74_694.0, 680_000.0, 187.2),
    ("Los Angeles", 69_778.0, 950_000.0, 173.3),
    ("Chicago", 71_673.0, 330_000.0, 107.0),
    ("Houston", 56_019.0, 270_000.0, 96.5),
    ("Phoenix", 72_092.0, 430_000.0, 103.6),
    ("Philadelphia", 57_537.0, 260_000.0, 112.0),
    ("San Antonio", 58_829.0, 285_000.0, 88.9),
    ("San Diego", 93_042.0, 905_000.0, 160.1),
    ("Dallas", 63_985.0, 395_000.0, 103.0),
    ("San Jose", 136_010.0, 1_400_000.0, 214.5),
    ("Austin", 86_556.0, 545_000.0, 119.3),
    ("Jacksonville", 64_138.0, 325_000.0, 93.7),
    ("Columbus", 62_994.0, 255_000.0, 91.2),
    ("Indianapolis", 59_110.0, 240_000.0, 90.4),
    ("Seattle", 116_068.0, 850_000.0, 172.3),
    ("Denver", 85_853.0, 610_000.0, 128.7),
    ("Nashville", 71_954.0, 470_000.0, 104.8),
    ("Detroit", 37_761.0, 85_000.0, 89.1),
    ("Boston", 89_212.0, 760_000.0, 162.4),
    ("Memphis", 48_090.0, 160_000.0, 84.3),
];

fn rows() -> Vec<Row> {
    CITIES
        .iter()
        .map(|&(city, income, price, col)| Row {
            city,
            median_income: income,
            median_home_price: price,
            cost_of_living_index: col,
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("City", DataType::Utf8, false),
        Field::new("Median_Income", DataType::Float64, false),
        Field::new("Median_Home_Price", DataType::Float64, false),
        Field::new("Cost_of_Living_Index", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.city).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.median_income).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.median_home_price).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                rows.iter().map(|r| r.cost_of_living_index).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let path = args.output.as_path();
    let rows = rows();

    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") | Some("pq") => write_parquet(path, &rows)?,
        _ => write_csv(path, &rows)?,
    }

    println!("Wrote {} cities to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_args_default_and_explicit_output() {
        let args = Args::try_parse_from(["generate_sample"]).unwrap();
        assert_eq!(args.output, PathBuf::from("housing_affordability.csv"));

        let args = Args::try_parse_from(["generate_sample", "out/cities.parquet"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out/cities.parquet"));

        assert!(Args::try_parse_from(["generate_sample", "a.csv", "b.csv"]).is_err());
        assert!(Args::try_parse_from(["generate_sample", "--bogus"]).is_err());
    }

    #[test]
    fn test_help_and_version_are_not_output_paths() {
        let err = Args::try_parse_from(["generate_sample", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = Args::try_parse_from(["generate_sample", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_writes_csv_with_dashboard_columns() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("cities.csv");
        write_csv(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("City,Median_Income,Median_Home_Price,Cost_of_Living_Index")
        );
        assert_eq!(lines.count(), CITIES.len());
    }
}
