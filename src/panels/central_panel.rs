use egui::{Color32, Sense};

use crate::surface::PainterSurface;
use crate::SketchpadApp;

#[allow(clippy::cast_precision_loss)]
pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        ui.horizontal(|ui| {
            if ui.button("clear").clicked() {
                app.sketchpad_mut().clear();
            }

            let can_undo = app.sketchpad().display_list().can_undo();
            let can_redo = app.sketchpad().display_list().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("undo")).clicked() {
                app.sketchpad_mut().undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("redo")).clicked() {
                app.sketchpad_mut().redo();
            }

            if ui.button("export").clicked() {
                app.export();
            }
        });

        let [width, height] = app.config().canvas_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width as f32, height as f32), Sense::click_and_drag());

        if app.handle_canvas_input(&response) {
            ctx.request_repaint();
        }

        let mut surface = PainterSurface::new(&painter, response.rect);
        app.sketchpad().render(&mut surface);
        painter.rect_stroke(response.rect, 0.0, egui::Stroke::new(1.0, Color32::GRAY));
    });
}
