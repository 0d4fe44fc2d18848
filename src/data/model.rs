use serde::Serialize;

use super::error::ComputeError;

// ---------------------------------------------------------------------------
// Column names as they appear in source files
// ---------------------------------------------------------------------------

pub const CITY_COLUMN: &str = "City";
pub const INCOME_COLUMN: &str = "Median_Income";
pub const HOME_PRICE_COLUMN: &str = "Median_Home_Price";
pub const COST_OF_LIVING_COLUMN: &str = "Cost_of_Living_Index";

/// Every column a source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    CITY_COLUMN,
    INCOME_COLUMN,
    HOME_PRICE_COLUMN,
    COST_OF_LIVING_COLUMN,
];

// ---------------------------------------------------------------------------
// RawCityRow – one parsed source row, before derivation
// ---------------------------------------------------------------------------

/// A source row exactly as read, without the derived column.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCityRow {
    pub city: String,
    pub median_income: f64,
    pub median_home_price: f64,
    pub cost_of_living_index: f64,
}

// ---------------------------------------------------------------------------
// CityRecord – one row of the prepared table
// ---------------------------------------------------------------------------

/// A city with its derived affordability index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRecord {
    pub city: String,
    pub median_income: f64,
    pub median_home_price: f64,
    pub cost_of_living_index: f64,
    /// `median_income / median_home_price`; higher is more affordable.
    pub affordability_index: f64,
}

impl CityRecord {
    /// Derive the affordability index for `raw`, which sits at data row `row`.
    ///
    /// Rejects a home price that is zero, negative or non-finite, and any
    /// non-finite input, so the index is always a finite number.
    pub fn derive(row: usize, raw: RawCityRow) -> Result<Self, ComputeError> {
        let checks = [
            (INCOME_COLUMN, raw.median_income),
            (HOME_PRICE_COLUMN, raw.median_home_price),
            (COST_OF_LIVING_COLUMN, raw.cost_of_living_index),
        ];
        for (column, value) in checks {
            if !value.is_finite() {
                return Err(ComputeError::NonFinite {
                    row,
                    city: raw.city,
                    column,
                });
            }
        }
        if raw.median_home_price <= 0.0 {
            return Err(ComputeError::NonPositivePrice {
                row,
                city: raw.city,
                price: raw.median_home_price,
            });
        }

        let affordability_index = raw.median_income / raw.median_home_price;
        Ok(CityRecord {
            city: raw.city,
            median_income: raw.median_income,
            median_home_price: raw.median_home_price,
            cost_of_living_index: raw.cost_of_living_index,
            affordability_index,
        })
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete prepared table
// ---------------------------------------------------------------------------

/// The prepared, read-only city table.
///
/// Only shared access to the records is exposed; a new source means a new
/// `Dataset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CityRecord>,
}

impl Dataset {
    /// Derive the affordability index for every row, preserving order.
    pub fn prepare(rows: Vec<RawCityRow>) -> Result<Self, ComputeError> {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(row, raw)| CityRecord::derive(row, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dataset { records })
    }

    /// All records in source order.
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn raw(city: &str, income: f64, price: f64, col: f64) -> RawCityRow {
    RawCityRow {
        city: city.to_string(),
        median_income: income,
        median_home_price: price,
        cost_of_living_index: col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_income_over_price() {
        let ds = Dataset::prepare(vec![
            raw("A", 100_000.0, 200_000.0, 90.0),
            raw("B", 80_000.0, 400_000.0, 120.0),
            raw("C", 120_000.0, 150_000.0, 80.0),
        ])
        .unwrap();

        assert_eq!(ds.len(), 3);
        for rec in ds.records() {
            let expected = rec.median_income / rec.median_home_price;
            assert!((rec.affordability_index - expected).abs() < 1e-12);
        }
        let indices: Vec<f64> = ds.records().iter().map(|r| r.affordability_index).collect();
        assert_eq!(indices, vec![0.5, 0.2, 0.8]);
    }

    #[test]
    fn test_prepare_preserves_order_and_duplicates() {
        let ds = Dataset::prepare(vec![
            raw("Austin", 1.0, 2.0, 1.0),
            raw("Boston", 1.0, 4.0, 1.0),
            raw("Austin", 3.0, 4.0, 1.0),
        ])
        .unwrap();
        let cities: Vec<&str> = ds.records().iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["Austin", "Boston", "Austin"]);
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let err = Dataset::prepare(vec![
            raw("A", 100_000.0, 200_000.0, 90.0),
            raw("Nowhere", 50_000.0, 0.0, 70.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ComputeError::NonPositivePrice {
                row: 1,
                city: "Nowhere".to_string(),
                price: 0.0,
            }
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = Dataset::prepare(vec![raw("A", 1.0, -5.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ComputeError::NonPositivePrice { row: 0, .. }));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let err = Dataset::prepare(vec![raw("A", f64::NAN, 100.0, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::NonFinite { column: INCOME_COLUMN, .. }
        ));

        let err = Dataset::prepare(vec![raw("A", 1.0, f64::INFINITY, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::NonFinite { column: HOME_PRICE_COLUMN, .. }
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::prepare(Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.records().is_empty());
    }
}
