//! Bold text for [`super::SoftwareRasterizer`], shaped and rasterized on
//! the CPU with cosmic-text.

use super::PixelBuffer;
use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent, Weight,
};

/// Lazily loaded system fonts plus the glyph image cache.
pub(super) struct TextPainter {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextPainter {
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        let faces = font_system.db().faces().count();
        if faces == 0 {
            log::warn!("[raster] no system fonts found; text masks will be empty");
        } else {
            log::debug!("[raster] loaded {faces} font faces");
        }
        Self {
            font_system,
            swash_cache: SwashCache::new(),
        }
    }

    pub fn has_fonts(&self) -> bool {
        self.font_system.db().faces().next().is_some()
    }

    /// Fill `text` centered on `(x, y)`, the way a canvas draws with
    /// `textAlign = center` and `textBaseline = middle`. Coverage is written
    /// as gray and never darkens what is already drawn.
    pub fn draw(&mut self, buf: &mut PixelBuffer, text: &str, x: f32, y: f32, size_px: f32) {
        if text.is_empty() || size_px <= 0.0 || !self.has_fonts() {
            return;
        }
        let fonts = &mut self.font_system;
        let mut layout = Buffer::new(fonts, Metrics::new(size_px, size_px));
        layout.set_size(fonts, None, None);
        layout.set_text(
            fonts,
            text,
            Attrs::new().family(Family::SansSerif).weight(Weight::BOLD),
            Shaping::Advanced,
        );
        layout.shape_until_scroll(fonts, false);

        let width = layout.layout_runs().map(|run| run.line_w).fold(0.0, f32::max);
        let left = (x - width / 2.0).round() as i32;
        let top = (y - size_px / 2.0).round() as i32;

        for run in layout.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let Some(image) = self.swash_cache.get_image(fonts, physical.cache_key) else {
                    continue;
                };
                let origin_x = left + physical.x + image.placement.left;
                let origin_y = top + run.line_y.round() as i32 + physical.y - image.placement.top;
                let (w, h) = (image.placement.width, image.placement.height);
                for row in 0..h {
                    for col in 0..w {
                        let i = (row * w + col) as usize;
                        let coverage = match image.content {
                            SwashContent::Mask => image.data.get(i).copied(),
                            SwashContent::Color => image.data.get(i * 4 + 3).copied(),
                            SwashContent::SubpixelMask => image.data.get(i * 4 + 1).copied(),
                        };
                        let Some(a) = coverage.filter(|a| *a > 0) else {
                            continue;
                        };
                        let px = origin_x + col as i32;
                        let py = origin_y + row as i32;
                        if px < 0 || py < 0 {
                            continue;
                        }
                        let (px, py) = (px as u32, py as u32);
                        if a > buf.red(px, py) {
                            buf.set_pixel(px, py, [a, a, a, 255]);
                        }
                    }
                }
            }
        }
    }
}
