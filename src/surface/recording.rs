use egui::{Color32, Pos2, Rect};

use super::Surface;

/// A single call made against a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    Segment {
        start: Pos2,
        end: Pos2,
        thickness: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        position: Pos2,
    },
    Ring {
        position: Pos2,
        radius: f32,
        thickness: f32,
    },
}

/// Surface that records draw calls instead of producing pixels.
///
/// Clearing drops everything recorded inside the cleared region, so after a
/// full render `ops()` holds exactly what is visible.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: Rect,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ops: Vec::new(),
        }
    }

    /// Everything recorded so far, in call order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Only the segments, as `(start, end)` pairs
    pub fn segments(&self) -> Vec<(Pos2, Pos2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Segment { start, end, .. } => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    /// Returns true if nothing but clears has been recorded
    pub fn is_blank(&self) -> bool {
        self.ops.iter().all(|op| matches!(op, DrawOp::Clear(_)))
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn clear(&mut self, region: Rect) {
        if region.contains_rect(self.bounds) {
            self.ops.clear();
        }
        self.ops.push(DrawOp::Clear(region));
    }

    fn draw_segment(&mut self, start: Pos2, end: Pos2, thickness: f32, color: Color32) {
        self.ops.push(DrawOp::Segment {
            start,
            end,
            thickness,
            color,
        });
    }

    fn draw_glyph(&mut self, text: &str, position: Pos2) {
        self.ops.push(DrawOp::Glyph {
            text: text.to_owned(),
            position,
        });
    }

    fn draw_ring(&mut self, position: Pos2, radius: f32, thickness: f32) {
        self.ops.push(DrawOp::Ring {
            position,
            radius,
            thickness,
        });
    }
}
