use egui::Pos2;

use crate::displayable::Displayable;
use crate::surface::Surface;

/// A text glyph (usually an emoji) stamped onto the canvas.
///
/// While it is being placed the sticker follows the pointer; it keeps a
/// single position rather than a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    position: Pos2,
    glyph: String,
}

impl Sticker {
    pub fn new(position: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position,
            glyph: glyph.into(),
        }
    }

    /// Move the sticker to `position`
    pub fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl Displayable for Sticker {
    fn display(&self, surface: &mut dyn Surface) {
        surface.draw_glyph(&self.glyph, self.position);
    }
}
