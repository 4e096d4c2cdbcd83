use eframe::egui;

use crate::color::Color;

/// A clickable square showing one palette color.
pub struct ColorSwatch {
    pub color: Color,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: Color, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let swatch_size = egui::vec2(28.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(swatch_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 4.0, egui::Color32::from(self.color));

            let border = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::from_gray(160))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(60))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(self.color.to_hex())
    }
}
