use egui::{Color32, Pos2};

use crate::displayable::Displayable;
use crate::surface::Surface;

/// Freehand stroke: the pointer path while the button was held.
///
/// Points are only ever appended, and a stroke always holds at least the
/// point it was started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    /// Start a new stroke at `start`
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    /// Add a point to the end of the stroke
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// A stroke that was never dragged
    pub fn is_single_point(&self) -> bool {
        self.points.len() == 1
    }
}

impl Displayable for Stroke {
    fn display(&self, surface: &mut dyn Surface) {
        // A single point has no segment to draw
        for pair in self.points.windows(2) {
            surface.draw_segment(pair[0], pair[1], self.thickness, self.color);
        }
    }
}
