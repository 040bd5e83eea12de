use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

use super::{Surface, CANVAS_BACKGROUND, GLYPH_COLOR, GLYPH_SIZE, RING_COLOR};

/// On-screen surface backed by an egui painter.
///
/// `canvas` is the screen rect the drawing occupies; canvas-local points are
/// offset by its top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    canvas: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas: Rect) -> Self {
        Self { painter, canvas }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.canvas.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.canvas.size())
    }

    fn clear(&mut self, region: Rect) {
        let region = region.translate(self.canvas.min.to_vec2());
        self.painter.rect_filled(region, 0.0, CANVAS_BACKGROUND);
    }

    fn draw_segment(&mut self, start: Pos2, end: Pos2, thickness: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(start), self.to_screen(end)],
            EguiStroke::new(thickness, color),
        );
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2) {
        self.painter.text(
            self.to_screen(position),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(GLYPH_SIZE),
            GLYPH_COLOR,
        );
    }

    fn draw_ring(&mut self, position: Pos2, radius: f32, thickness: f32) {
        self.painter.circle_stroke(
            self.to_screen(position),
            radius,
            EguiStroke::new(thickness, RING_COLOR),
        );
    }
}
