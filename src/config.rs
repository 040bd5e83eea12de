use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{SketchpadError, SketchpadResult};
use crate::state::LeavePolicy;
use crate::tools::{DEFAULT_STICKERS, THICK_LINE, THIN_LINE};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// App configuration, read from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Canvas size in pixels
    pub canvas_size: [u32; 2],
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    /// Initial marker color, RGB
    pub stroke_color: [u8; 3],
    /// Sticker palette shown in the tools panel
    pub stickers: Vec<String>,
    pub leave_policy: LeavePolicy,
    /// Commit strokes made by a click without any movement
    pub keep_single_point_strokes: bool,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output pixels per canvas pixel
    pub scale: f32,
    /// Paint `background` under the drawing instead of leaving it transparent
    pub opaque: bool,
    pub background: [u8; 3],
    pub path: PathBuf,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256, 256],
            thin_thickness: THIN_LINE,
            thick_thickness: THICK_LINE,
            stroke_color: [0, 0, 0],
            stickers: DEFAULT_STICKERS.iter().map(|s| (*s).to_owned()).collect(),
            leave_policy: LeavePolicy::default(),
            keep_single_point_strokes: true,
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 4.0,
            opaque: false,
            background: [255, 255, 255],
            path: PathBuf::from("sketchpad.png"),
        }
    }
}

impl SketchpadConfig {
    pub fn from_json(json: &str) -> SketchpadResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file
    pub fn load(path: &Path) -> SketchpadResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SketchpadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from the file named by `SKETCHPAD_CONFIG`, falling back to defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn stroke_color(&self) -> Color32 {
        let [r, g, b] = self.stroke_color;
        Color32::from_rgb(r, g, b)
    }
}

impl ExportConfig {
    /// Background to paint before the drawing, if any
    pub fn background_color(&self) -> Option<Color32> {
        self.opaque.then(|| {
            let [r, g, b] = self.background;
            Color32::from_rgb(r, g, b)
        })
    }
}
