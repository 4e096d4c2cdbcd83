use crate::PixelEditorApp;
use crate::config::MAX_GRID_SIZE;
use crate::tools::Tool;

pub fn tools_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let active = app.editor.tool();
            for tool in Tool::ALL {
                if ui.selectable_label(active == tool, tool.label()).clicked() {
                    app.editor.set_tool(tool);
                }
            }

            ui.separator();

            let mut show_grid = app.editor.show_grid_lines();
            if ui.checkbox(&mut show_grid, "Grid").changed() {
                app.editor.set_show_grid_lines(show_grid);
            }

            ui.separator();

            ui.add(egui::Slider::new(&mut app.pending_grid_size, 1..=MAX_GRID_SIZE).text("cells"));
            let size_changed = app.pending_grid_size != app.editor.grid_size();
            if ui
                .add_enabled(size_changed, egui::Button::new("New grid"))
                .on_hover_text("Discards the current drawing")
                .clicked()
            {
                app.resize_grid(app.pending_grid_size);
            }

            ui.separator();

            if ui.button("💾 Save").on_hover_text("Save as PNG").clicked() {
                app.save_image();
            }
        });
    });
}
