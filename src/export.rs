use std::path::Path;

use egui::Color32;
use image::RgbaImage;

use crate::display_list::DisplayList;
use crate::error::{SketchpadError, SketchpadResult};
use crate::surface::RasterSurface;

/// Largest width or height an export may have, in pixels
pub const MAX_EXPORT_SIDE: u32 = 16_384;

/// Render the committed drawing off-screen, `factor` times larger than the canvas.
///
/// In-progress work and the tool preview are left out. With a `background`
/// the image is opaque, otherwise untouched pixels stay transparent.
/// Sizes that round to zero or exceed [`MAX_EXPORT_SIDE`] are rejected.
pub fn render_at_scale(
    display_list: &DisplayList,
    canvas_size: [u32; 2],
    factor: f32,
    background: Option<Color32>,
) -> SketchpadResult<RgbaImage> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(SketchpadError::InvalidScale(factor));
    }

    let size = [
        scaled_side(canvas_size[0], factor),
        scaled_side(canvas_size[1], factor),
    ];
    let [width, height] = match size.map(|side| {
        u32::try_from(side)
            .ok()
            .filter(|side| (1..=MAX_EXPORT_SIDE).contains(side))
    }) {
        [Some(width), Some(height)] => [width, height],
        _ => {
            return Err(SketchpadError::InvalidExportSize {
                width: size[0],
                height: size[1],
            });
        }
    };

    let mut surface = RasterSurface::new(width, height, factor, background)?;
    display_list.render_committed(&mut surface);
    Ok(surface.to_image())
}

/// Saturates instead of wrapping for absurd factors
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_side(side: u32, factor: f32) -> u64 {
    (f64::from(side) * f64::from(factor)).round() as u64
}

/// Write an exported image as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> SketchpadResult<()> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::info!(
        "Exported {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
