use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const HEADERS: [&str; 5] = [
    "City",
    "Median Income",
    "Median Home Price",
    "Cost of Living",
    "Affordability Index",
];

/// Render the rows of the active view as a table.
pub fn rows_table(ui: &mut Ui, state: &AppState) {
    let Some(desc) = &state.descriptor else {
        ui.label("No dataset loaded.");
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(110.0), 3)
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for rec in &desc.rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&rec.city);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", rec.median_income));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.0}", rec.median_home_price));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", rec.cost_of_living_index));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.4}", rec.affordability_index));
                    });
                });
            }
        });
}
