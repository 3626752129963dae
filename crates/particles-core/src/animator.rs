//! Per-frame particle animation.
//!
//! The animator is the only writer of the position buffer. Each frame it
//! picks a target table and blend parameters from the interaction state,
//! eases the cloud orientation and then moves every particle a fixed
//! fraction of the way toward its (scaled) target point.

use crate::constants::*;
use crate::error::TargetSizeError;
use crate::gesture::Gesture;
use crate::state::InteractionState;
use crate::targets::{TargetConfiguration, TargetKind, TargetLibrary};
use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct AnimatorParams {
    pub idle_attraction: f32,
    pub gesture_attraction: f32,
    pub pulse_base: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,
    pub pointer_rotation_range: f32,
    pub follow_rate: f32,
    pub rotation_limit: f32,
    pub idle_sway_rate: f32,
    pub idle_return_rate: f32,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            idle_attraction: IDLE_ATTRACTION,
            gesture_attraction: GESTURE_ATTRACTION,
            pulse_base: PULSE_BASE,
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_frequency: PULSE_FREQUENCY,
            pointer_rotation_range: POINTER_ROTATION_RANGE,
            follow_rate: ROTATION_FOLLOW_RATE,
            rotation_limit: ROTATION_LIMIT,
            idle_sway_rate: IDLE_SWAY_RATE,
            idle_return_rate: IDLE_RETURN_RATE,
        }
    }
}

/// What a frame blends toward and how fast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendParams {
    pub target: TargetKind,
    pub expansion: f32,
    pub attraction: f32,
}

/// Map the current gesture to a target table and blend parameters.
pub fn blend_params(state: &InteractionState, elapsed_sec: f32, params: &AnimatorParams) -> BlendParams {
    let driven = |target| BlendParams {
        target,
        expansion: 1.0,
        attraction: params.gesture_attraction,
    };
    if !state.hand_detected {
        return BlendParams {
            target: TargetKind::Pattern,
            expansion: 1.0,
            attraction: params.idle_attraction,
        };
    }
    match state.gesture {
        Gesture::Open => driven(TargetKind::LoveText),
        Gesture::Closed => driven(TargetKind::Characters),
        Gesture::FingerHeart => driven(TargetKind::HollowHeart),
        Gesture::Victory => driven(TargetKind::BirthdayText),
        Gesture::TwoHandsHeart => BlendParams {
            expansion: params.pulse_base
                + params.pulse_amplitude * (elapsed_sec * params.pulse_frequency).sin(),
            ..driven(TargetKind::LayeredHeart)
        },
        Gesture::Neutral => BlendParams {
            target: TargetKind::Pattern,
            expansion: 1.0,
            attraction: params.idle_attraction,
        },
    }
}

/// Euler angles of the whole cloud, radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }

    /// Pointer-follow when a hand is present, idle sway otherwise.
    pub fn update(&mut self, state: &InteractionState, elapsed_sec: f32, params: &AnimatorParams) {
        if state.hand_detected {
            let target_x = (state.pointer.y - 0.5) * params.pointer_rotation_range;
            let target_y = (state.pointer.x - 0.5) * params.pointer_rotation_range;
            let limit = params.rotation_limit;
            self.x = approach(self.x, target_x, params.follow_rate).clamp(-limit, limit);
            self.y = approach(self.y, target_y, params.follow_rate).clamp(-limit, limit);
        } else {
            let sway_y = (elapsed_sec * IDLE_SWAY_Y_FREQUENCY).sin() * IDLE_SWAY_Y_AMPLITUDE;
            let sway_z = (elapsed_sec * IDLE_SWAY_Z_FREQUENCY).cos() * IDLE_SWAY_Z_AMPLITUDE;
            self.y = approach(self.y, sway_y, params.idle_sway_rate);
            self.z = approach(self.z, sway_z, params.idle_sway_rate);
            self.x = approach(self.x, 0.0, params.idle_return_rate);
        }
    }
}

/// One step of single-pole smoothing.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

pub struct ParticleAnimator {
    positions: Vec<Vec3>,
    rotation: Rotation,
    dirty: bool,
    params: AnimatorParams,
}

impl ParticleAnimator {
    /// Random starting cloud in a cube of side [`INITIAL_CLOUD_EXTENT`].
    pub fn new(count: usize, seed: u64, params: AnimatorParams) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * INITIAL_CLOUD_EXTENT,
                    (rng.gen::<f32>() - 0.5) * INITIAL_CLOUD_EXTENT,
                    (rng.gen::<f32>() - 0.5) * INITIAL_CLOUD_EXTENT,
                )
            })
            .collect();
        Self::with_positions(positions, params)
    }

    pub fn with_positions(positions: Vec<Vec3>, params: AnimatorParams) -> Self {
        Self {
            positions,
            rotation: Rotation::default(),
            dirty: true,
            params,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// `x, y, z` triples for upload.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Fails unless every table in `library` has one point per particle.
    pub fn check_library(&self, library: &TargetLibrary) -> Result<(), TargetSizeError> {
        if library.count() != self.positions.len() {
            return Err(TargetSizeError {
                expected: self.positions.len(),
                actual: library.count(),
            });
        }
        Ok(())
    }

    /// Move every particle toward `target * expansion` by `attraction`.
    /// A table of the wrong length is rejected and nothing moves.
    pub fn blend_toward(
        &mut self,
        target: &TargetConfiguration,
        expansion: f32,
        attraction: f32,
    ) -> Result<(), TargetSizeError> {
        target.check_len(self.positions.len())?;
        for (p, t) in self.positions.iter_mut().zip(target.points()) {
            *p += (*t * expansion - *p) * attraction;
        }
        self.dirty = true;
        Ok(())
    }

    /// Run one animation frame.
    pub fn advance(
        &mut self,
        state: &InteractionState,
        library: &TargetLibrary,
        elapsed_sec: f32,
    ) -> Result<BlendParams, TargetSizeError> {
        self.check_library(library)?;
        let blend = blend_params(state, elapsed_sec, &self.params);
        self.rotation.update(state, elapsed_sec, &self.params);
        let target = library.resolve(blend.target);
        self.blend_toward(target, blend.expansion, blend.attraction)?;
        Ok(blend)
    }

    /// Returns whether the buffer changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
