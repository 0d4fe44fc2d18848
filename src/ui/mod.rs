pub mod chart;
pub mod panels;
pub mod table;

use eframe::egui::Color32;

use crate::color::Rgb;

/// Convert a toolkit-independent colour for painting.
pub fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}
