use super::{jitter, unit_sphere, TargetConfiguration};
use crate::state::Pattern;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

pub const SPHERE_RADIUS: f32 = 4.0;
pub const SPHERE_RADIUS_JITTER: f32 = 0.5;
pub const CUBE_SIDE: f32 = 6.0;
pub const RING_RADIUS: f32 = 5.0;
pub const RING_RADIUS_JITTER: f32 = 1.5;
pub const RING_DEPTH: f32 = 2.0;
pub const RANDOM_EXTENT: f32 = 15.0;

pub fn pattern_target<R: Rng + ?Sized>(
    pattern: Pattern,
    count: usize,
    rng: &mut R,
) -> TargetConfiguration {
    match pattern {
        Pattern::Sphere => sphere(count, rng),
        Pattern::Cube => cube(count, rng),
        Pattern::Ring => ring(count, rng),
        Pattern::Random => random_cloud(count, rng),
    }
}

/// Shell of radius 4 with ±0.25 radial jitter.
pub fn sphere<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    TargetConfiguration::generate(count, |_| {
        let r = SPHERE_RADIUS + jitter(rng, SPHERE_RADIUS_JITTER);
        unit_sphere(rng) * r
    })
}

pub fn cube<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    TargetConfiguration::generate(count, |_| {
        Vec3::new(
            jitter(rng, CUBE_SIDE),
            jitter(rng, CUBE_SIDE),
            jitter(rng, CUBE_SIDE),
        )
    })
}

/// Torus-like band around the z axis.
pub fn ring<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    TargetConfiguration::generate(count, |_| {
        let theta = rng.gen::<f32>() * TAU;
        let r = RING_RADIUS + jitter(rng, RING_RADIUS_JITTER);
        Vec3::new(r * theta.cos(), r * theta.sin(), jitter(rng, RING_DEPTH))
    })
}

pub fn random_cloud<R: Rng + ?Sized>(count: usize, rng: &mut R) -> TargetConfiguration {
    TargetConfiguration::generate(count, |_| {
        Vec3::new(
            jitter(rng, RANDOM_EXTENT),
            jitter(rng, RANDOM_EXTENT),
            jitter(rng, RANDOM_EXTENT),
        )
    })
}
