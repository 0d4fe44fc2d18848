use std::path::{Path, PathBuf};

use crate::data::error::LoadError;
use crate::data::loader::load_and_prepare;
use crate::data::model::Dataset;
use crate::view::{RenderDescriptor, ViewKind, select_view};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default, Debug)]
pub struct AppState {
    /// Prepared dataset (None until a file loads).
    pub dataset: Option<Dataset>,

    /// Where `dataset` came from.
    pub source: Option<PathBuf>,

    /// Currently selected tab.
    pub active_view: ViewKind,

    /// Descriptor for `active_view` over `dataset` (cached).
    pub descriptor: Option<RenderDescriptor>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the row table under the chart is shown.
    pub show_table: bool,
}

impl AppState {
    pub fn new(active_view: ViewKind) -> Self {
        Self {
            active_view,
            ..Self::default()
        }
    }

    /// Ingest a newly prepared dataset and rebuild the current view.
    pub fn set_dataset(&mut self, dataset: Dataset, source: PathBuf) {
        self.dataset = Some(dataset);
        self.source = Some(source);
        self.status_message = None;
        self.refresh();
    }

    /// Load and prepare `path`, replacing the current dataset on success.
    pub fn try_load(&mut self, path: &Path) -> Result<(), LoadError> {
        let dataset = load_and_prepare(path)?;
        log::info!("Loaded {} cities from {}", dataset.len(), path.display());
        if dataset.is_empty() {
            log::warn!("{} contains no cities", path.display());
        }
        self.set_dataset(dataset, path.to_path_buf());
        Ok(())
    }

    /// Load and prepare `path`.  On failure the previous dataset stays and
    /// the error goes to the status line.
    pub fn load_path(&mut self, path: &Path) {
        if let Err(e) = self.try_load(path) {
            let err = anyhow::Error::new(e).context(format!("loading {}", path.display()));
            log::error!("Failed to load file: {err:#}");
            self.status_message = Some(format!("Error: {err:#}"));
        }
    }

    /// Switch to the view named `view_id`.  An unknown identifier leaves
    /// the current view in place and reports the error.
    pub fn select(&mut self, view_id: &str) {
        let Some(dataset) = &self.dataset else {
            match view_id.parse() {
                Ok(view) => {
                    self.active_view = view;
                    self.status_message = None;
                }
                Err(e) => self.status_message = Some(format!("Error: {e}")),
            }
            return;
        };

        match select_view(dataset, view_id) {
            Ok(descriptor) => {
                log::debug!("view {} shows {:?}", descriptor.view, descriptor.cities());
                self.active_view = descriptor.view;
                self.descriptor = Some(descriptor);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Recompute the descriptor for the active view.
    fn refresh(&mut self) {
        self.descriptor = self
            .dataset
            .as_ref()
            .map(|ds| self.active_view.describe(ds));
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::data::model::raw;

    fn dataset() -> Dataset {
        Dataset::prepare(vec![
            raw("A", 100_000.0, 200_000.0, 90.0),
            raw("B", 80_000.0, 400_000.0, 120.0),
            raw("C", 120_000.0, 150_000.0, 80.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_set_dataset_builds_active_view() {
        let mut state = AppState::new(ViewKind::TopAffordable);
        state.set_dataset(dataset(), PathBuf::from("cities.csv"));

        let desc = state.descriptor.as_ref().unwrap();
        assert_eq!(desc.view, ViewKind::TopAffordable);
        assert_eq!(desc.cities(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_select_switches_view() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), PathBuf::from("cities.csv"));
        state.select("least_affordable");

        assert_eq!(state.active_view, ViewKind::LeastAffordable);
        assert_eq!(
            state.descriptor.as_ref().map(|d| d.view),
            Some(ViewKind::LeastAffordable)
        );
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_unknown_view_keeps_current_descriptor() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), PathBuf::from("cities.csv"));
        let before = state.descriptor.clone();

        state.select("bogus");

        assert_eq!(state.active_view, ViewKind::Overview);
        assert_eq!(state.descriptor, before);
        assert_eq!(
            state.status_message.as_deref(),
            Some("Error: unknown view identifier 'bogus'")
        );
    }

    #[test]
    fn test_select_without_dataset_only_moves_tab() {
        let mut state = AppState::default();
        state.select("cost_of_living");
        assert_eq!(state.active_view, ViewKind::CostOfLiving);
        assert!(state.descriptor.is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_dataset() {
        let tmp = tempdir().unwrap();
        let good = tmp.path().join("good.csv");
        std::fs::write(
            &good,
            "City,Median_Income,Median_Home_Price,Cost_of_Living_Index\nA,1,2,3\n",
        )
        .unwrap();
        let bad = tmp.path().join("bad.csv");
        std::fs::write(&bad, "City,Median_Income\nA,1\n").unwrap();

        let mut state = AppState::default();
        state.load_path(&good);
        assert_eq!(state.dataset.as_ref().map(Dataset::len), Some(1));
        assert_eq!(state.source.as_deref(), Some(good.as_path()));

        state.load_path(&bad);
        assert_eq!(state.dataset.as_ref().map(Dataset::len), Some(1));
        assert_eq!(state.source.as_deref(), Some(good.as_path()));
        let msg = state.status_message.unwrap();
        assert!(msg.contains("missing required column 'Median_Home_Price'"), "{msg}");
    }

    #[test]
    fn test_valid_selection_clears_previous_error() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), PathBuf::from("cities.csv"));

        state.select("bogus");
        assert!(state.status_message.is_some());
        state.select("top_affordable");
        assert_eq!(state.active_view, ViewKind::TopAffordable);
        assert!(state.status_message.is_none());

        let mut empty = AppState::default();
        empty.select("bogus");
        assert!(empty.status_message.is_some());
        empty.select("tab3");
        assert_eq!(empty.active_view, ViewKind::CostOfLiving);
        assert!(empty.status_message.is_none());
    }

    #[test]
    fn test_try_load_returns_error_and_keeps_state() {
        let tmp = tempdir().unwrap();
        let bad = tmp.path().join("bad.csv");
        std::fs::write(&bad, "City,Median_Income\nA,1\n").unwrap();

        let mut state = AppState::default();
        let err = state.try_load(&bad).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { .. }));
        assert!(state.dataset.is_none());
        assert!(state.status_message.is_none());
    }
}
