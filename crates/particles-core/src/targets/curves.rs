use super::{jitter, unit_sphere, TargetConfiguration};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

pub const HEART_SCALE: f32 = 0.35;
pub const HEART_JITTER: f32 = 0.5;
pub const LAYERED_HEART_JITTER: f32 = 0.4;
// (cumulative share of points, scale): outer 50%, middle 30%, inner 20%
pub const HEART_LAYERS: [(f32, f32); 3] = [(0.5, 0.35), (0.8, 0.22), (1.0, 0.12)];

pub const SATURN_CORE_SHARE: f32 = 0.3;
pub const SATURN_CORE_RADIUS: f32 = 2.5;
pub const SATURN_RING_INNER: f32 = 4.5;
pub const SATURN_RING_WIDTH: f32 = 3.5;
pub const SATURN_RING_THICKNESS: f32 = 0.1;
pub const SATURN_TILT: f32 = 0.44;

/// Classic heart curve, roughly 32 units wide before scaling.
#[inline]
pub fn heart_curve(t: f32) -> Vec2 {
    let s = t.sin();
    Vec2::new(
        16.0 * s * s * s,
        13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos(),
    )
}

fn heart_point<R: Rng + ?Sized>(rng: &mut R, scale: f32, jitter_width: f32) -> Vec3 {
    let base = heart_curve(rng.gen::<f32>() * TAU) * scale;
    Vec3::new(
        base.x + jitter(rng, jitter_width),
        base.y + jitter(rng, jitter_width),
        jitter(rng, jitter_width),
    )
}

/// Flat heart outline; the jitter gives the line its width.
pub fn hollow_heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    TargetConfiguration::generate(count, |_| heart_point(rng, HEART_SCALE, HEART_JITTER))
}

/// Three nested heart outlines.
pub fn layered_heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    TargetConfiguration::generate(count, |i| {
        let share = i as f32 / count as f32;
        let scale = HEART_LAYERS
            .iter()
            .find(|(upto, _)| share < *upto)
            .map_or(HEART_LAYERS[2].1, |(_, s)| *s);
        heart_point(rng, scale, LAYERED_HEART_JITTER)
    })
}

/// Planet core plus a tilted disk.
pub fn saturn<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    let (sin_t, cos_t) = SATURN_TILT.sin_cos();
    TargetConfiguration::generate(count, |i| {
        if (i as f32) < count as f32 * SATURN_CORE_SHARE {
            return unit_sphere(rng) * SATURN_CORE_RADIUS;
        }
        let theta = rng.gen::<f32>() * TAU;
        let r = SATURN_RING_INNER + rng.gen::<f32>() * SATURN_RING_WIDTH;
        let x = r * theta.cos();
        let z = r * theta.sin();
        let y = jitter(rng, SATURN_RING_THICKNESS);
        Vec3::new(x, y * cos_t - z * sin_t, y * sin_t + z * cos_t)
    })
}
