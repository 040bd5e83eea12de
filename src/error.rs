use std::path::PathBuf;
use thiserror::Error;

/// Errors from the edges of the app: configuration and export
#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Export scale must be a positive number, got {0}")]
    InvalidScale(f32),

    #[error("Export size {width}x{height} is out of range")]
    InvalidExportSize { width: u64, height: u64 },

    #[error("Failed to write image: {0}")]
    ImageWrite(#[from] image::ImageError),
}

/// Result type for fallible sketchpad operations
pub type SketchpadResult<T> = Result<T, SketchpadError>;
