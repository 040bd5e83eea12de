use egui::{Color32, Response};

use crate::config::SketchpadConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, sticker_dialog, tools_panel};
use crate::sketchpad::Sketchpad;
use crate::tools::Tool;

/// Prefill of the custom sticker dialog
const CUSTOM_STICKER_PROMPT: &str = "❤️";

pub struct SketchpadApp {
    config: SketchpadConfig,
    sketchpad: Sketchpad,
    input: InputHandler,
    stickers: Vec<String>,
    marker_color: Color32,
    /// Text of the custom sticker dialog while it is open
    sticker_prompt: Option<String>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(SketchpadConfig::default())
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(SketchpadConfig::from_env())
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        Self {
            sketchpad: Sketchpad::from_config(&config),
            input: InputHandler::new(),
            stickers: config.stickers.clone(),
            marker_color: config.stroke_color(),
            sticker_prompt: None,
            config,
        }
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn marker_color(&self) -> Color32 {
        self.marker_color
    }

    /// Route this frame's pointer input over the canvas into the sketchpad
    pub fn handle_canvas_input(&mut self, response: &Response) -> bool {
        let mut changed = false;
        for event in self.input.process_input(response) {
            changed |= self.sketchpad.handle_event(event);
        }
        changed
    }

    pub fn select_marker(&mut self, thickness: f32) {
        self.sketchpad
            .select_tool(Tool::marker(thickness, self.marker_color));
    }

    pub fn select_sticker(&mut self, glyph: String) {
        self.sketchpad.select_tool(Tool::sticker(glyph));
    }

    pub fn is_marker_selected(&self, thickness: f32) -> bool {
        matches!(self.sketchpad.tool(), Tool::Marker { thickness: t, .. } if *t == thickness)
    }

    pub fn is_sticker_selected(&self, glyph: &str) -> bool {
        matches!(self.sketchpad.tool(), Tool::Sticker { glyph: g } if g == glyph)
    }

    /// Change the marker color; an active marker keeps its thickness
    pub fn set_marker_color(&mut self, color: Color32) {
        self.marker_color = color;
        self.sketchpad.set_marker_color(color);
    }

    /// Add a sticker to the palette. Blank and duplicate stickers are ignored.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() || self.stickers.iter().any(|s| s == glyph) {
            return false;
        }
        log::info!("Added custom sticker {glyph}");
        self.stickers.push(glyph.to_owned());
        true
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt = Some(CUSTOM_STICKER_PROMPT.to_owned());
    }

    pub fn sticker_prompt_mut(&mut self) -> Option<&mut String> {
        self.sticker_prompt.as_mut()
    }

    pub fn close_sticker_prompt(&mut self) -> Option<String> {
        self.sticker_prompt.take()
    }

    /// Export the committed drawing at the configured scale
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export(&self) {
        let export = &self.config.export;
        let result = crate::export::render_at_scale(
            self.sketchpad.display_list(),
            self.config.canvas_size,
            export.scale,
            export.background_color(),
        )
        .and_then(|image| crate::export::save_png(&image, &export.path));

        if let Err(err) = result {
            log::error!("Export failed: {err}");
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn export(&self) {
        log::warn!("Exporting to a file is not supported on the web");
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        sticker_dialog(self, ctx);
    }
}
