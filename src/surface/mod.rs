use egui::{Color32, Pos2, Rect};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{DrawOp, RecordingSurface};

/// Font size used for stickers and sticker previews
pub const GLYPH_SIZE: f32 = 32.0;
/// Color of sticker glyphs
pub const GLYPH_COLOR: Color32 = Color32::BLACK;
/// Color of the stroke preview ring
pub const RING_COLOR: Color32 = Color32::RED;
/// Background the on-screen canvas is cleared to
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Something the display list can be replayed onto.
///
/// All coordinates are canvas-local; implementations map them to their own
/// pixel space (screen offset, export scale, ...).
pub trait Surface {
    /// The canvas-local area this surface covers
    fn bounds(&self) -> Rect;

    /// Wipe the given region back to the surface's background
    fn clear(&mut self, region: Rect);

    /// Draw a straight segment between two points
    fn draw_segment(&mut self, start: Pos2, end: Pos2, thickness: f32, color: Color32);

    /// Draw a text glyph with its baseline starting at `position`
    fn draw_glyph(&mut self, text: &str, position: Pos2);

    /// Draw an unfilled circle outline
    fn draw_ring(&mut self, position: Pos2, radius: f32, thickness: f32);
}
