use egui::Pos2;

use crate::displayable::Displayable;
use crate::surface::Surface;

/// Line width of the stroke preview ring
pub const RING_WIDTH: f32 = 3.0;

/// What the preview shows at the pointer
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewKind {
    /// Where a stroke would start; the radius follows the marker thickness
    Ring { radius: f32 },
    /// The sticker that would be placed
    Glyph(String),
}

/// Transient indicator drawn under the pointer while not drawing.
///
/// Never committed to history.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPreview {
    position: Pos2,
    kind: PreviewKind,
}

impl ToolPreview {
    /// Stroke preview sized to `thickness`
    pub fn ring(position: Pos2, thickness: f32) -> Self {
        Self {
            position,
            kind: PreviewKind::Ring { radius: thickness },
        }
    }

    /// Sticker placement preview
    pub fn glyph(position: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position,
            kind: PreviewKind::Glyph(glyph.into()),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn kind(&self) -> &PreviewKind {
        &self.kind
    }
}

impl Displayable for ToolPreview {
    fn display(&self, surface: &mut dyn Surface) {
        match &self.kind {
            PreviewKind::Ring { radius } => surface.draw_ring(self.position, *radius, RING_WIDTH),
            PreviewKind::Glyph(glyph) => surface.draw_glyph(glyph, self.position),
        }
    }
}
