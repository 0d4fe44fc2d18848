mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;
mod view;

use anyhow::{Context, Result};
use app::DashboardApp;
use clap::Parser;
use cli::Cli;
use data::loader::{load_and_prepare, read_csv};
use eframe::egui;
use state::AppState;
use view::{ViewKind, select_view};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.json {
        return print_descriptor(&cli);
    }

    let state = startup_state(&cli)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Housing Affordability Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}

/// Builds the window state from the command line.  A data file named on the
/// command line, or a default file that exists, must load; otherwise the
/// window opens empty.
fn startup_state(cli: &Cli) -> Result<AppState> {
    let initial_view: ViewKind = cli.view.parse().context("parsing --view")?;
    let mut state = AppState::new(initial_view);

    let path = cli.data_path();
    if cli.path_is_explicit() || path.exists() {
        state
            .try_load(&path)
            .with_context(|| format!("loading {}", path.display()))?;
    } else {
        log::warn!(
            "{} not found; use File → Open to load a city table",
            path.display()
        );
    }
    Ok(state)
}

/// Headless mode: print the selected view's descriptor as JSON.
/// A path of `-` reads CSV from stdin.
fn print_descriptor(cli: &Cli) -> Result<()> {
    let path = cli.data_path();
    let dataset = if path.as_os_str() == "-" {
        read_csv(std::io::stdin().lock()).context("loading CSV from stdin")?
    } else {
        load_and_prepare(&path).with_context(|| format!("loading {}", path.display()))?
    };
    log::info!("Loaded {} cities from {}", dataset.len(), path.display());

    let descriptor = select_view(&dataset, &cli.view)?;
    let json =
        serde_json::to_string_pretty(&descriptor).context("serializing render descriptor")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("housing-dash").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_startup_with_unloadable_path_is_fatal() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope.csv");
        let err = startup_state(&cli(&[missing.to_str().unwrap()])).unwrap_err();
        assert!(format!("{err:#}").contains("nope.csv"), "{err:#}");

        let bad = tmp.path().join("bad.csv");
        std::fs::write(&bad, "City,Median_Income\nA,1\n").unwrap();
        let err = startup_state(&cli(&[bad.to_str().unwrap()])).unwrap_err();
        assert!(
            format!("{err:#}").contains("missing required column"),
            "{err:#}"
        );
    }

    #[test]
    fn test_startup_loads_explicit_path() {
        let tmp = tempdir().unwrap();
        let good = tmp.path().join("good.csv");
        std::fs::write(
            &good,
            "City,Median_Income,Median_Home_Price,Cost_of_Living_Index\nA,1,2,3\n",
        )
        .unwrap();

        let state = startup_state(&cli(&[good.to_str().unwrap(), "--view", "tab4"])).unwrap();
        assert_eq!(state.active_view, ViewKind::TopAffordable);
        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(1));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_startup_rejects_unknown_view() {
        let err = startup_state(&cli(&["--view", "bogus"])).unwrap_err();
        assert!(format!("{err:#}").contains("parsing --view"), "{err:#}");
    }
}
