use egui::Pos2;

use crate::sticker::Sticker;
use crate::stroke::Stroke;
use crate::surface::Surface;

/// Common trait for everything that can be replayed onto a surface
pub trait Displayable {
    /// Draw onto the surface, in canvas-local coordinates
    fn display(&self, surface: &mut dyn Surface);
}

/// Items that can be drawn, committed and undone
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl DisplayItem {
    /// Follow the pointer while the item is in progress.
    ///
    /// Strokes grow by one point, stickers jump to the new position.
    pub fn drag(&mut self, point: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.add_point(point),
            Self::Sticker(sticker) => sticker.set_position(point),
        }
    }

    /// Get the item type as a string
    pub fn item_type(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}

impl Displayable for DisplayItem {
    fn display(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.display(surface),
            Self::Sticker(sticker) => sticker.display(surface),
        }
    }
}

impl From<Stroke> for DisplayItem {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for DisplayItem {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}
