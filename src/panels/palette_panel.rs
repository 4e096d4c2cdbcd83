use crate::PixelEditorApp;
use crate::color::PALETTE;
use crate::components::ColorSwatch;

pub fn palette_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::SidePanel::right("palette_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Colors");

            egui::Grid::new("palette_grid")
                .num_columns(4)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for (i, color) in PALETTE.into_iter().enumerate() {
                        let selected = app.editor.color() == color;
                        if ColorSwatch::new(color, selected).show(ui).clicked() {
                            log::debug!("Color selected: {}", color);
                            app.editor.set_color(color);
                        }
                        if i % 4 == 3 {
                            ui.end_row();
                        }
                    }
                });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Current:");
                let current = app.editor.color();
                ColorSwatch::new(current, false).show(ui);
                ui.monospace(current.to_hex());
            });
        });
}
