#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod display_list;
pub mod displayable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod sketchpad;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use config::SketchpadConfig;
pub use display_list::DisplayList;
pub use displayable::{DisplayItem, Displayable};
pub use error::{SketchpadError, SketchpadResult};
pub use history::History;
pub use input::{InputHandler, PointerEvent};
pub use preview::ToolPreview;
pub use sketchpad::Sketchpad;
pub use state::{EditorState, LeavePolicy};
pub use sticker::Sticker;
pub use stroke::Stroke;
pub use surface::Surface;
pub use tools::Tool;
