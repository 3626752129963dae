use super::text::TextPainter;
use super::{DrawCommand, PixelBuffer, RasterScene, Rasterizer};
use crate::error::RasterError;
use glam::Vec2;
use std::f32::consts::TAU;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const CURVE_SEGMENTS: usize = 96;

/// CPU rasterizer for [`DrawCommand`]s. Shapes use an even-odd scanline
/// fill sampled at pixel centers with no antialiasing; text is shaped with
/// the system fonts, loaded on first use.
#[derive(Default)]
pub struct SoftwareRasterizer {
    text: Option<TextPainter>,
}

impl SoftwareRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any font could be loaded. Without one, text draws nothing.
    pub fn has_fonts(&mut self) -> bool {
        self.painter().has_fonts()
    }

    fn painter(&mut self) -> &mut TextPainter {
        self.text.get_or_insert_with(TextPainter::new)
    }
}

impl std::fmt::Debug for SoftwareRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftwareRasterizer")
            .field("fonts_loaded", &self.text.is_some())
            .finish()
    }
}

impl Rasterizer for SoftwareRasterizer {
    fn rasterize(&mut self, scene: &RasterScene) -> Result<PixelBuffer, RasterError> {
        let mut buf = PixelBuffer::new(scene.width, scene.height);
        for cmd in &scene.commands {
            match cmd {
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size_px,
                } => self.painter().draw(&mut buf, text, *x, *y, *size_px),
                DrawCommand::Ellipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    rotation,
                } => fill_polygon(&mut buf, &ellipse_path(*cx, *cy, *rx, *ry, *rotation)),
                DrawCommand::Polygon { points } => fill_polygon(&mut buf, points),
                DrawCommand::Arc {
                    cx,
                    cy,
                    radius,
                    start,
                    end,
                    anticlockwise,
                } => fill_polygon(
                    &mut buf,
                    &arc_path(*cx, *cy, *radius, *start, *end, *anticlockwise),
                ),
            }
        }
        Ok(buf)
    }
}

fn ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32) -> Vec<Vec2> {
    let (sr, cr) = rotation.sin_cos();
    (0..CURVE_SEGMENTS)
        .map(|i| {
            let a = i as f32 / CURVE_SEGMENTS as f32 * TAU;
            let (ex, ey) = (rx * a.cos(), ry * a.sin());
            Vec2::new(cx + ex * cr - ey * sr, cy + ex * sr + ey * cr)
        })
        .collect()
}

fn arc_path(cx: f32, cy: f32, radius: f32, start: f32, end: f32, anticlockwise: bool) -> Vec<Vec2> {
    let raw = if anticlockwise { start - end } else { end - start };
    let sweep = if raw >= TAU {
        TAU
    } else {
        raw.rem_euclid(TAU)
    };
    let dir = if anticlockwise { -1.0 } else { 1.0 };
    (0..=CURVE_SEGMENTS)
        .map(|i| {
            let a = start + dir * sweep * (i as f32 / CURVE_SEGMENTS as f32);
            Vec2::new(cx + radius * a.cos(), cy + radius * a.sin())
        })
        .collect()
}

/// Even-odd fill; a pixel is inside when its center is.
fn fill_polygon(buf: &mut PixelBuffer, points: &[Vec2]) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let y0 = (min_y - 0.5).ceil().max(0.0) as u32;
    let y1 = ((max_y - 0.5).floor() + 1.0).clamp(0.0, buf.height() as f32) as u32;
    let mut crossings: Vec<f32> = Vec::with_capacity(8);
    for py in y0..y1 {
        let sy = py as f32 + 0.5;
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y <= sy) != (b.y <= sy) {
                let t = (sy - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(|l, r| l.total_cmp(r));
        for span in crossings.chunks_exact(2) {
            let x0 = (span[0] - 0.5).ceil().max(0.0) as u32;
            let x1 = ((span[1] - 0.5).floor() + 1.0).clamp(0.0, buf.width() as f32) as u32;
            for px in x0..x1 {
                buf.set_pixel(px, py, WHITE);
            }
        }
    }
}
