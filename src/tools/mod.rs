use egui::{Color32, Pos2};

use crate::preview::ToolPreview;

/// Marker thickness of the "thin" preset
pub const THIN_LINE: f32 = 1.0;
/// Marker thickness of the "thick" preset
pub const THICK_LINE: f32 = 4.0;
/// Stickers available out of the box
pub const DEFAULT_STICKERS: [&str; 3] = ["😆", "🍔", "✨"];

/// The currently selected drawing mode.
///
/// Read when an item is begun or the preview is refreshed, never mutated by
/// the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker { thickness: f32, color: Color32 },
    Sticker { glyph: String },
}

impl Default for Tool {
    fn default() -> Self {
        Self::marker(THIN_LINE, Color32::BLACK)
    }
}

impl Tool {
    pub fn marker(thickness: f32, color: Color32) -> Self {
        Self::Marker { thickness, color }
    }

    pub fn sticker(glyph: impl Into<String>) -> Self {
        Self::Sticker {
            glyph: glyph.into(),
        }
    }

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Marker { .. } => "Marker",
            Self::Sticker { .. } => "Sticker",
        }
    }

    /// The preview this tool shows at `position`
    pub fn preview_at(&self, position: Pos2) -> ToolPreview {
        match self {
            Self::Marker { thickness, .. } => ToolPreview::ring(position, *thickness),
            Self::Sticker { glyph } => ToolPreview::glyph(position, glyph.clone()),
        }
    }
}
