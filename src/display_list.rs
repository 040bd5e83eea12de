//! The display list: committed items, their redo stack, the item currently
//! being drawn and the tool preview.
//!
//! Every mutating operation returns whether anything visible changed; the
//! caller re-renders on `true`. Misuse (extending or committing with nothing
//! in progress, undoing an empty list, ...) is a `false` no-op.

use egui::{Color32, Pos2};

use crate::displayable::{DisplayItem, Displayable};
use crate::history::History;
use crate::preview::ToolPreview;
use crate::sticker::Sticker;
use crate::stroke::Stroke;
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct DisplayList {
    history: History<DisplayItem>,
    in_progress: Option<DisplayItem>,
    tool_preview: Option<ToolPreview>,
    keep_single_point_strokes: bool,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            in_progress: None,
            tool_preview: None,
            keep_single_point_strokes: true,
        }
    }

    /// Whether strokes that never moved past their first point are committed.
    ///
    /// Kept by default: they draw nothing but still take an undo step.
    pub fn with_single_point_strokes(mut self, keep: bool) -> Self {
        self.keep_single_point_strokes = keep;
        self
    }

    /// Committed items in paint order
    pub fn items(&self) -> &[DisplayItem] {
        self.history.undo_stack()
    }

    /// Undone items, the next one to redo last
    pub fn redo_items(&self) -> &[DisplayItem] {
        self.history.redo_stack()
    }

    pub fn in_progress(&self) -> Option<&DisplayItem> {
        self.in_progress.as_ref()
    }

    pub fn tool_preview(&self) -> Option<&ToolPreview> {
        self.tool_preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Start a new stroke at `point`
    pub fn begin_stroke(&mut self, point: Pos2, thickness: f32, color: Color32) -> bool {
        self.begin(Stroke::new(point, thickness, color).into())
    }

    /// Start placing `glyph` at `point`
    pub fn begin_sticker(&mut self, point: Pos2, glyph: impl Into<String>) -> bool {
        self.begin(Sticker::new(point, glyph).into())
    }

    fn begin(&mut self, item: DisplayItem) -> bool {
        if let Some(current) = &self.in_progress {
            log::warn!(
                "Ignoring new {} while a {} is still in progress",
                item.item_type(),
                current.item_type()
            );
            return false;
        }

        log::debug!("Begin {}", item.item_type());
        // New work invalidates redo history
        self.history.invalidate_redo();
        self.tool_preview = None;
        self.in_progress = Some(item);
        true
    }

    /// Drag the in-progress item to `point`
    pub fn extend(&mut self, point: Pos2) -> bool {
        match &mut self.in_progress {
            Some(item) => {
                item.drag(point);
                true
            }
            None => {
                log::debug!("extend() with nothing in progress");
                false
            }
        }
    }

    /// Move the in-progress item onto the end of the committed list
    pub fn commit(&mut self) -> bool {
        let Some(item) = self.in_progress.take() else {
            log::debug!("commit() with nothing in progress");
            return false;
        };

        let single_point = item.as_stroke().is_some_and(Stroke::is_single_point);
        if single_point && !self.keep_single_point_strokes {
            log::debug!("Dropping single-point stroke");
        } else {
            log::debug!("Commit {} (#{})", item.item_type(), self.items().len() + 1);
            self.history.push(item);
        }
        true
    }

    /// Drop the in-progress item without committing it
    pub fn discard_in_progress(&mut self) -> bool {
        match self.in_progress.take() {
            Some(item) => {
                log::debug!("Discard {}", item.item_type());
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Forget everything, including the redo stack and any in-progress item
    pub fn clear(&mut self) -> bool {
        self.history.clear();
        self.in_progress = None;
        true
    }

    /// Replace (or remove) the tool preview
    pub fn set_tool_preview(&mut self, preview: Option<ToolPreview>) -> bool {
        self.tool_preview = preview;
        true
    }

    /// Clear the surface and replay every committed item, in order.
    pub fn render_committed(&self, surface: &mut dyn Surface) {
        let bounds = surface.bounds();
        surface.clear(bounds);
        for item in self.items() {
            item.display(surface);
        }
    }

    /// Full repaint: committed items, then the in-progress item, then the
    /// tool preview when not drawing. Later draws land on top.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.render_committed(surface);

        if let Some(item) = &self.in_progress {
            item.display(surface);
        } else if let Some(preview) = &self.tool_preview {
            preview.display(surface);
        }
    }
}
