use crate::PixelEditorApp;

pub fn central_panel(app: &mut PixelEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let side = app.editor.renderer().surface_side(app.editor.grid_size()) as f32;
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        let events = app.input.process_input(ctx, canvas_rect, app.editor.grid_size());
        for event in events {
            app.editor.handle(event);
        }

        // Render the canvas from committed state only
        let snapshot = app.editor.snapshot();
        app.editor
            .renderer()
            .paint(&painter, canvas_rect, &snapshot, app.editor.show_grid_lines());

        if let Some(status) = &app.status {
            ui.label(status);
        }
    });
}
