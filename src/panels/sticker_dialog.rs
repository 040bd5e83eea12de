use crate::SketchpadApp;

/// "Custom sticker" dialog, shown while the app has an open prompt
pub fn sticker_dialog(app: &mut SketchpadApp, ctx: &egui::Context) {
    let mut submitted = false;
    let mut cancelled = false;

    let Some(text) = app.sticker_prompt_mut() else {
        return;
    };

    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let response = ui.text_edit_singleline(text);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            ui.horizontal(|ui| {
                submitted |= ui.button("OK").clicked();
                cancelled = ui.button("Cancel").clicked();
            });
        });

    if submitted {
        if let Some(text) = app.close_sticker_prompt() {
            app.add_custom_sticker(&text);
        }
    } else if cancelled {
        app.close_sticker_prompt();
    }
}
