use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::view::ViewKind;

// ---------------------------------------------------------------------------
// Tab strip
// ---------------------------------------------------------------------------

/// Render one tab per view; clicking a tab selects it by identifier.
pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for view in ViewKind::ALL {
            let selected = state.active_view == view;
            let text = RichText::new(view.tab_label()).strong().size(16.0);
            if ui.selectable_label(selected, text).clicked() && !selected {
                state.select(view.id());
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(source)) = (&state.dataset, &state.source) {
            ui.label(format!("{} cities loaded from {}", ds.len(), source.display()));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_table, "Show Table")
            .clicked()
        {
            state.show_table = !state.show_table;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open housing affordability data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
