use egui::color_picker::{color_edit_button_srgba, Alpha};
use egui::RichText;

use crate::SketchpadApp;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let thin = app.config().thin_thickness;
            let thick = app.config().thick_thickness;
            ui.horizontal(|ui| {
                if ui.selectable_label(app.is_marker_selected(thin), "thin").clicked() {
                    app.select_marker(thin);
                }
                if ui.selectable_label(app.is_marker_selected(thick), "thick").clicked() {
                    app.select_marker(thick);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.marker_color();
                if color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.set_marker_color(color);
                }
            });

            ui.separator();
            ui.label("Stickers");

            // Cloned so the buttons can change the selection
            let stickers = app.stickers().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in stickers {
                    let selected = app.is_sticker_selected(&glyph);
                    if ui
                        .selectable_label(selected, RichText::new(&glyph).size(20.0))
                        .clicked()
                    {
                        log::info!("Sticker selected from UI: {glyph}");
                        app.select_sticker(glyph);
                    }
                }
                if ui.button("+").clicked() {
                    app.open_sticker_prompt();
                }
            });

            ui.separator();

            let sketchpad = app.sketchpad();
            ui.label(format!("State: {}", sketchpad.state().name()));
            ui.horizontal(|ui| {
                ui.label(format!("Undo: {}", sketchpad.display_list().items().len()));
                ui.label(format!("Redo: {}", sketchpad.display_list().redo_items().len()));
            });
        });
}
