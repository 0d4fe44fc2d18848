use std::path::PathBuf;

use clap::Parser;

/// File loaded when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "housing_affordability.csv";

/// Housing affordability dashboard for U.S. cities.
#[derive(Debug, Parser)]
#[command(name = "housing-dash", version, about)]
pub struct Cli {
    /// City table to load (.csv, .json, .parquet) [default: housing_affordability.csv]
    pub path: Option<PathBuf>,

    /// Initially selected view: overview, income_vs_price, cost_of_living,
    /// top_affordable or least_affordable
    #[arg(long, default_value = "overview")]
    pub view: String,

    /// Print the view's render descriptor as JSON and exit instead of opening a window
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The path to load, falling back to [`DEFAULT_DATA_FILE`].
    pub fn data_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Whether the path was given explicitly.
    pub fn path_is_explicit(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["housing-dash"]).unwrap();
        assert_eq!(cli.data_path(), PathBuf::from(DEFAULT_DATA_FILE));
        assert!(!cli.path_is_explicit());
        assert_eq!(cli.view, "overview");
        assert!(!cli.json);
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "housing-dash",
            "data/cities.parquet",
            "--view",
            "least_affordable",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.data_path(), PathBuf::from("data/cities.parquet"));
        assert!(cli.path_is_explicit());
        assert_eq!(cli.view, "least_affordable");
        assert!(cli.json);
    }
}
