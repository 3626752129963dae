//! Target configurations: fixed-size point clouds the particles are pulled
//! toward.
//!
//! Every generator returns exactly `count` points. The [`TargetLibrary`]
//! owns the tables for a session and applies the regeneration policy.

mod curves;
mod library;
mod mask;
pub mod scenes;
mod shapes;

pub use curves::{hollow_heart, layered_heart, saturn};
pub use library::TargetLibrary;
pub use mask::{candidate_pixels, rasterized_target, sample_mask};
pub use shapes::{cube, pattern_target, random_cloud, ring, sphere};

use crate::error::TargetSizeError;
use glam::Vec3;
use rand::Rng;

/// Identity of a target table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Whatever procedural pattern the user picked.
    Pattern,
    HollowHeart,
    LayeredHeart,
    Saturn,
    LoveText,
    BirthdayText,
    Characters,
}

impl TargetKind {
    /// Tables generated once per session.
    pub const FIXED: [TargetKind; 6] = [
        TargetKind::HollowHeart,
        TargetKind::LayeredHeart,
        TargetKind::Saturn,
        TargetKind::LoveText,
        TargetKind::BirthdayText,
        TargetKind::Characters,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetConfiguration {
    points: Vec<Vec3>,
}

impl TargetConfiguration {
    /// All points at the origin; the fallback for empty masks.
    pub fn zeros(count: usize) -> Self {
        Self {
            points: vec![Vec3::ZERO; count],
        }
    }

    pub(crate) fn generate(count: usize, f: impl FnMut(usize) -> Vec3) -> Self {
        Self {
            points: (0..count).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// `x, y, z` triples, the layout the renderer uploads.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    pub fn check_len(&self, expected: usize) -> Result<(), TargetSizeError> {
        if self.points.len() != expected {
            return Err(TargetSizeError {
                expected,
                actual: self.points.len(),
            });
        }
        Ok(())
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

/// Uniform sample in `[-width / 2, width / 2)`.
#[inline]
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, width: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * width
}

/// Uniform direction on the unit sphere.
#[inline]
pub(crate) fn unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let phi = (rng.gen::<f32>() * 2.0 - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}
