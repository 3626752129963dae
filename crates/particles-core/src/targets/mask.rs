use super::{jitter, TargetConfiguration};
use crate::constants::{RASTER_STRIDE, RASTER_THRESHOLD, RASTER_Z_JITTER};
use crate::raster::{PixelBuffer, RasterScene, Rasterizer};
use glam::Vec3;
use rand::Rng;

/// Coordinates of bright pixels on a coarse grid, row by row.
pub fn candidate_pixels(buffer: &PixelBuffer, stride: u32, threshold: u8) -> Vec<(u32, u32)> {
    let stride = stride.max(1) as usize;
    let mut out = Vec::new();
    for y in (0..buffer.height()).step_by(stride) {
        for x in (0..buffer.width()).step_by(stride) {
            if buffer.red(x, y) > threshold {
                out.push((x, y));
            }
        }
    }
    out
}

/// Spread `count` points over the bright pixels of `buffer`, cycling through
/// them in scan order. The image is centered, flipped so +y is up, and
/// scaled by `scale` world units per pixel.
///
/// An all-dark buffer yields an all-origin target.
pub fn sample_mask<R: Rng + ?Sized>(
    buffer: &PixelBuffer,
    scale: f32,
    count: usize,
    rng: &mut R,
) -> TargetConfiguration {
    let candidates = candidate_pixels(buffer, RASTER_STRIDE, RASTER_THRESHOLD);
    if candidates.is_empty() {
        log::warn!(
            "[targets] {}x{} mask has no bright pixels; using origin target",
            buffer.width(),
            buffer.height()
        );
        return TargetConfiguration::zeros(count);
    }
    let half_w = buffer.width() as f32 / 2.0;
    let half_h = buffer.height() as f32 / 2.0;
    TargetConfiguration::generate(count, |i| {
        let (px, py) = candidates[i % candidates.len()];
        Vec3::new(
            (px as f32 - half_w) * scale,
            -(py as f32 - half_h) * scale,
            jitter(rng, RASTER_Z_JITTER),
        )
    })
}

/// Draw `scene` and sample it. A failing surface degrades to the origin
/// target like an empty mask does.
pub fn rasterized_target<R: Rng + ?Sized>(
    rasterizer: &mut dyn Rasterizer,
    scene: &RasterScene,
    scale: f32,
    count: usize,
    rng: &mut R,
) -> TargetConfiguration {
    match rasterizer.rasterize(scene) {
        Ok(buffer) => sample_mask(&buffer, scale, count, rng),
        Err(e) => {
            log::warn!("[targets] rasterization failed: {e}; using origin target");
            TargetConfiguration::zeros(count)
        }
    }
}
