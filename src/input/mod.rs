use egui::{Pos2, Response};

/// Pointer events the canvas reacts to, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the canvas
    Down(Pos2),
    /// Pointer moved over the canvas (with or without the button held)
    Move(Pos2),
    /// Primary button released, anywhere
    Up,
    /// Pointer is no longer over the canvas
    Leave,
}

/// Handles converting raw egui input over the canvas into [`PointerEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's input for the canvas widget behind `response`.
    ///
    /// The pointer counts as over the canvas only while it is inside the
    /// widget rect, even mid-drag. Crossing out of the rect reports `Leave`
    /// once and no moves are reported until it comes back. Moves are reported
    /// before a press in the same frame, so the press position is never
    /// appended twice.
    pub fn process_input(&mut self, response: &Response) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let to_local = |pos: Pos2| Pos2::ZERO + (pos - rect.min);

        let inside = response.ctx.input(|input| {
            // Another layer on top of the canvas hides it unless we own the drag
            let inside = input
                .pointer
                .hover_pos()
                .filter(|pos| rect.contains(*pos) && (self.pressed || response.contains_pointer()));

            match inside {
                Some(pos) => {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(PointerEvent::Move(to_local(pos)));
                    }
                    if !self.pressed && input.pointer.primary_pressed() {
                        events.push(PointerEvent::Down(to_local(pos)));
                        self.pressed = true;
                    }
                }
                None => {
                    if self.last_pointer_pos.is_some() {
                        events.push(PointerEvent::Leave);
                    }
                }
            }

            // Releases count even when they happen off the canvas
            if self.pressed && input.pointer.primary_released() {
                events.push(PointerEvent::Up);
                self.pressed = false;
            }

            inside
        });

        self.last_pointer_pos = inside;
        events
    }
}
