use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Tabs ----
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::tab_bar(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Bottom panel: rows of the active view ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("rows_table")
                .default_height(180.0)
                .resizable(true)
                .show(ctx, |ui| {
                    table::rows_table(ui, &self.state);
                });
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            chart::view_panel(ui, &self.state);
        });
    }
}
