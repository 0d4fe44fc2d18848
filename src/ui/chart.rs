use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use super::color32;
use crate::state::AppState;
use crate::view::{ChartKind, RenderDescriptor};

const MIN_RADIUS: f64 = 4.0;
const MAX_RADIUS: f64 = 20.0;

// ---------------------------------------------------------------------------
// View panel (central panel)
// ---------------------------------------------------------------------------

/// Render the heading and chart of the active view.
pub fn view_panel(ui: &mut Ui, state: &AppState) {
    let Some(desc) = &state.descriptor else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a city table to view the dashboard  (File → Open…)");
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(desc.heading);
        ui.label(RichText::new(desc.title).weak());
    });
    ui.add_space(8.0);

    if desc.rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No cities in this dataset.");
        });
        return;
    }

    match desc.chart {
        ChartKind::Bar => bar_chart(ui, desc),
        ChartKind::Scatter => scatter_chart(ui, desc),
    }
}

// ---------------------------------------------------------------------------
// Bar chart: one bar per row, categories on the x axis
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, desc: &RenderDescriptor) {
    let labels = desc.x_labels();
    let colors = desc.mark_colors();

    let bars: Vec<Bar> = desc
        .rows
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let height = desc.y.field.number(rec).unwrap_or(0.0);
            Bar::new(i as f64, height)
                .name(&labels[i])
                .fill(color32(colors[i]))
                .width(0.7)
        })
        .collect();

    let tick_labels = labels.clone();
    Plot::new(("view_plot", desc.view.id()))
        .x_axis_label(desc.x.label)
        .y_axis_label(desc.y.label)
        .x_axis_formatter(move |mark, _range| category_label(&tick_labels, mark.value))
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(desc.y.label));
        });
}

/// Tick text for a category axis: the label at integral positions only.
fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scatter chart: one point series per row so each city gets a legend entry
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, desc: &RenderDescriptor) {
    let colors = desc.mark_colors();
    let size_range = desc.size.and_then(|f| desc.range(f));

    Plot::new(("view_plot", desc.view.id()))
        .legend(Legend::default())
        .x_axis_label(desc.x.label)
        .y_axis_label(desc.y.label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, rec) in desc.rows.iter().enumerate() {
                let (Some(x), Some(y)) = (desc.x.field.number(rec), desc.y.field.number(rec))
                else {
                    continue;
                };

                let radius = match (desc.size.and_then(|f| f.number(rec)), size_range) {
                    (Some(v), Some(range)) => marker_radius(v, range),
                    _ => MIN_RADIUS,
                };

                let name = match desc.hover {
                    Some(field) => field.value(rec).to_label(),
                    None => format!("point {i}"),
                };

                let points = Points::new(PlotPoints::new(vec![[x, y]]))
                    .name(name)
                    .color(color32(colors[i]))
                    .radius(radius as f32)
                    .filled(true);

                plot_ui.points(points);
            }
        });
}

/// Marker radius for `value`, scaled linearly over `(min, max)`.
fn marker_radius(value: f64, (min, max): (f64, f64)) -> f64 {
    if !(max > min) {
        return (MIN_RADIUS + MAX_RADIUS) / 2.0;
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    MIN_RADIUS + t * (MAX_RADIUS - MIN_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(category_label(&labels, 0.0), "A");
        assert_eq!(category_label(&labels, 1.0), "B");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn test_marker_radius() {
        assert_eq!(marker_radius(0.2, (0.2, 0.8)), MIN_RADIUS);
        assert_eq!(marker_radius(0.8, (0.2, 0.8)), MAX_RADIUS);
        assert_eq!(marker_radius(0.5, (0.5, 0.5)), 12.0);
    }
}
