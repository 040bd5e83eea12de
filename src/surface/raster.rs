//! Off-screen software surface used for exporting.
//!
//! Draw calls arrive in canvas-local coordinates; the export scale is applied
//! as a tiny-skia transform. Glyphs go through fontdue using whatever system
//! fonts can be found, then are composited as small pixmaps.

use egui::{Color32, Pos2, Rect, vec2};
use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};
use tiny_skia::{
    BlendMode, ColorU8, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use super::{Surface, GLYPH_COLOR, GLYPH_SIZE, RING_COLOR};
use crate::error::{SketchpadError, SketchpadResult};

/// Fonts to try for sticker glyphs, emoji-capable ones first.
const FONT_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Apple Symbols.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    // Windows
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "C:\\Windows\\Fonts\\seguisym.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Pixel buffer surface with a uniform scale factor.
pub struct RasterSurface {
    pixmap: Pixmap,
    scale: f32,
    background: tiny_skia::Color,
    fonts: Vec<Font>,
}

impl RasterSurface {
    /// Create a `width` x `height` pixel surface.
    ///
    /// `background` of `None` leaves the buffer fully transparent.
    pub fn new(
        width: u32,
        height: u32,
        scale: f32,
        background: Option<Color32>,
    ) -> SketchpadResult<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or(SketchpadError::InvalidExportSize {
            width: width.into(),
            height: height.into(),
        })?;

        let background = background.map_or(tiny_skia::Color::TRANSPARENT, |color| {
            let [r, g, b, a] = color.to_srgba_unmultiplied();
            tiny_skia::Color::from_rgba8(r, g, b, a)
        });
        pixmap.fill(background);

        Ok(Self {
            pixmap,
            scale,
            background,
            fonts: load_fonts(),
        })
    }

    /// Copy the pixels out as straight (non-premultiplied) RGBA
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        image
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn font_for(&self, ch: char) -> Option<&Font> {
        self.fonts
            .iter()
            .find(|font| font.lookup_glyph_index(ch) != 0)
    }
}

fn solid_paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width,
        line_cap: LineCap::Round,
        ..Default::default()
    }
}

impl Surface for RasterSurface {
    #[allow(clippy::cast_precision_loss)]
    fn bounds(&self) -> Rect {
        Rect::from_min_size(
            Pos2::ZERO,
            vec2(
                self.pixmap.width() as f32 / self.scale,
                self.pixmap.height() as f32 / self.scale,
            ),
        )
    }

    fn clear(&mut self, region: Rect) {
        if region.contains_rect(self.bounds()) {
            self.pixmap.fill(self.background);
            return;
        }

        let Some(rect) =
            tiny_skia::Rect::from_xywh(region.min.x, region.min.y, region.width(), region.height())
        else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(self.background);
        paint.blend_mode = BlendMode::Source;
        let transform = self.transform();
        self.pixmap.fill_rect(rect, &paint, transform, None);
    }

    fn draw_segment(&mut self, start: Pos2, end: Pos2, thickness: f32, color: Color32) {
        let mut builder = PathBuilder::new();
        builder.move_to(start.x, start.y);
        builder.line_to(end.x, end.y);
        let Some(path) = builder.finish() else {
            return;
        };

        let transform = self.transform();
        self.pixmap.stroke_path(
            &path,
            &solid_paint(color),
            &round_stroke(thickness),
            transform,
            None,
        );
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn draw_glyph(&mut self, text: &str, position: Pos2) {
        if self.fonts.is_empty() {
            return;
        }

        let px = GLYPH_SIZE * self.scale;
        let baseline = position * self.scale;
        let [r, g, b, a] = GLYPH_COLOR.to_srgba_unmultiplied();
        let mut cursor_x = baseline.x;

        // Variation selectors and joiners have no outline of their own
        for ch in text.chars().filter(|ch| !ch.is_control() && !is_invisible(*ch)) {
            let Some(font) = self.font_for(ch) else {
                log::debug!("No font covers {ch:?}, skipping");
                continue;
            };
            let (metrics, bitmap) = font.rasterize(ch, px);
            let advance = metrics.advance_width;

            if let Some(mut glyph) = Pixmap::new(metrics.width as u32, metrics.height as u32) {
                for (dst, coverage) in glyph.pixels_mut().iter_mut().zip(&bitmap) {
                    let alpha = (u16::from(a) * u16::from(*coverage) / 255) as u8;
                    *dst = ColorU8::from_rgba(r, g, b, alpha).premultiply();
                }

                let glyph_x = cursor_x as i32 + metrics.xmin;
                let glyph_y = baseline.y as i32 - (metrics.height as i32 + metrics.ymin);
                self.pixmap.draw_pixmap(
                    glyph_x,
                    glyph_y,
                    glyph.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
            }

            cursor_x += advance;
        }
    }

    fn draw_ring(&mut self, position: Pos2, radius: f32, thickness: f32) {
        let Some(path) = PathBuilder::from_circle(position.x, position.y, radius) else {
            return;
        };

        let transform = self.transform();
        self.pixmap.stroke_path(
            &path,
            &solid_paint(RING_COLOR),
            &round_stroke(thickness),
            transform,
            None,
        );
    }
}

fn is_invisible(ch: char) -> bool {
    matches!(ch, '\u{200D}' | '\u{FE00}'..='\u{FE0F}')
}

fn load_fonts() -> Vec<Font> {
    let fonts: Vec<Font> = FONT_SEARCH_PATHS
        .iter()
        .filter_map(|path| {
            let data = std::fs::read(path).ok()?;
            match Font::from_bytes(data, FontSettings::default()) {
                Ok(font) => {
                    log::debug!("Loaded export font: {path}");
                    Some(font)
                }
                Err(err) => {
                    log::warn!("Could not parse font {path}: {err}");
                    None
                }
            }
        })
        .collect();

    if fonts.is_empty() {
        log::warn!("No system font found; stickers will be missing from exports");
    }
    fonts
}
