/// Pointer interaction state of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// The primary button went down on the canvas and has not been released
    Drawing,
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing => "Drawing",
        }
    }
}

/// What leaving the canvas mid-drag does to the item being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Keep drawing; the release is still picked up off-canvas
    #[default]
    Continue,
    /// Commit what was drawn so far
    Commit,
    /// Throw the in-progress item away
    Discard,
}
