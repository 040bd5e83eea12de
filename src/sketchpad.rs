use egui::Color32;

use crate::config::SketchpadConfig;
use crate::display_list::DisplayList;
use crate::input::PointerEvent;
use crate::state::{EditorState, LeavePolicy};
use crate::surface::Surface;
use crate::tools::Tool;

/// The drawing pad: a display list driven by pointer events.
///
/// Owns the `Idle`/`Drawing` state machine and the tool selection. Every
/// method returns whether the canvas needs to be repainted.
#[derive(Debug)]
pub struct Sketchpad {
    display_list: DisplayList,
    state: EditorState,
    tool: Tool,
    leave_policy: LeavePolicy,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(DisplayList::new(), LeavePolicy::default())
    }
}

impl Sketchpad {
    pub fn new(display_list: DisplayList, leave_policy: LeavePolicy) -> Self {
        Self {
            display_list,
            state: EditorState::Idle,
            tool: Tool::default(),
            leave_policy,
        }
    }

    pub fn from_config(config: &SketchpadConfig) -> Self {
        let display_list =
            DisplayList::new().with_single_point_strokes(config.keep_single_point_strokes);
        let mut pad = Self::new(display_list, config.leave_policy);
        pad.tool = Tool::marker(config.thin_thickness, config.stroke_color());
        pad
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn leave_policy(&self) -> LeavePolicy {
        self.leave_policy
    }

    /// Switch tools. Anything half-drawn is dropped.
    pub fn select_tool(&mut self, tool: Tool) -> bool {
        log::debug!("Tool selected: {} ({:?})", tool.name(), tool);
        self.tool = tool;
        if self.state.is_drawing() {
            self.state = EditorState::Idle;
            return self.display_list.discard_in_progress();
        }
        false
    }

    /// Recolor the marker in place. A stroke already being drawn keeps going
    /// with the color it started with.
    pub fn set_marker_color(&mut self, new_color: Color32) -> bool {
        match &mut self.tool {
            Tool::Marker { color, .. } if *color != new_color => {
                *color = new_color;
                true
            }
            _ => false,
        }
    }

    /// Feed one pointer event through the state machine
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match (self.state, event) {
            (EditorState::Idle, PointerEvent::Down(pos)) => {
                let started = match &self.tool {
                    Tool::Marker { thickness, color } => {
                        self.display_list.begin_stroke(pos, *thickness, *color)
                    }
                    Tool::Sticker { glyph } => self.display_list.begin_sticker(pos, glyph.clone()),
                };
                if started {
                    self.state = EditorState::Drawing;
                }
                started
            }
            (EditorState::Drawing, PointerEvent::Move(pos)) => self.display_list.extend(pos),
            (EditorState::Drawing, PointerEvent::Up) => {
                self.state = EditorState::Idle;
                self.display_list.commit()
            }
            (EditorState::Idle, PointerEvent::Move(pos)) => {
                let preview = self.tool.preview_at(pos);
                self.display_list.set_tool_preview(Some(preview))
            }
            (_, PointerEvent::Leave) => self.leave(),
            (EditorState::Drawing, PointerEvent::Down(_)) | (EditorState::Idle, PointerEvent::Up) => {
                log::debug!("Ignoring {:?} while {}", event, self.state.name());
                false
            }
        }
    }

    fn leave(&mut self) -> bool {
        let mut changed = self.display_list.set_tool_preview(None);
        if self.state.is_drawing() {
            match self.leave_policy {
                LeavePolicy::Continue => {}
                LeavePolicy::Commit => {
                    self.state = EditorState::Idle;
                    changed |= self.display_list.commit();
                }
                LeavePolicy::Discard => {
                    self.state = EditorState::Idle;
                    changed |= self.display_list.discard_in_progress();
                }
            }
        }
        changed
    }

    pub fn undo(&mut self) -> bool {
        self.display_list.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.display_list.redo()
    }

    /// Wipe the canvas and its history
    pub fn clear(&mut self) -> bool {
        self.state = EditorState::Idle;
        self.display_list.clear()
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.display_list.render(surface);
    }
}
