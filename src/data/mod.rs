/// Data layer: core types, loading, and derivation of the affordability index.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawCityRow>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  income / price per row → read-only Vec<CityRecord>
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
