//! One running toy: interaction state, target tables and the animator,
//! wired the way both front-ends drive them.
//!
//! Detector results arrive through [`ParticleSession::on_landmarks`] at the
//! camera's cadence; [`ParticleSession::tick`] runs once per render frame
//! and only reads the latest state.

use crate::animator::{AnimatorParams, BlendParams, ParticleAnimator, Rotation};
use crate::constants::PARTICLE_COUNT;
use crate::error::TargetSizeError;
use crate::gesture::{classify_with, Classification, ClassifierParams, GestureDebouncer};
use crate::landmarks::LandmarkFrame;
use crate::raster::Rasterizer;
use crate::state::{DetectorStatus, InteractionState, Pattern, Rgb};
use crate::targets::TargetLibrary;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub particle_count: usize,
    pub seed: u64,
    /// Majority-vote window for gestures; 1 disables smoothing.
    pub debounce_frames: usize,
    pub classifier: ClassifierParams,
    pub animator: AnimatorParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: 42,
            debounce_frames: 1,
            classifier: ClassifierParams::default(),
            animator: AnimatorParams::default(),
        }
    }
}

pub struct ParticleSession {
    state: InteractionState,
    library: TargetLibrary,
    animator: ParticleAnimator,
    classifier: ClassifierParams,
    debouncer: GestureDebouncer,
}

impl ParticleSession {
    pub fn new(
        config: SessionConfig,
        rasterizer: &mut dyn Rasterizer,
    ) -> Result<Self, TargetSizeError> {
        let library = TargetLibrary::new(config.particle_count, config.seed, rasterizer);
        let animator = ParticleAnimator::new(
            config.particle_count,
            config.seed.wrapping_add(1),
            config.animator.clone(),
        );
        Self::from_parts(library, animator, config)
    }

    /// Assemble a session from prebuilt tables and particles. The particle
    /// buffer and every table must have the same length.
    pub fn from_parts(
        library: TargetLibrary,
        animator: ParticleAnimator,
        config: SessionConfig,
    ) -> Result<Self, TargetSizeError> {
        animator.check_library(&library)?;
        log::info!(
            "[session] particles={} seed={} debounce={}",
            animator.len(),
            config.seed,
            config.debounce_frames
        );
        Ok(Self {
            state: InteractionState::default(),
            library,
            animator,
            classifier: config.classifier,
            debouncer: GestureDebouncer::new(config.debounce_frames),
        })
    }

    /// Classify one detector result and publish it.
    pub fn on_landmarks(&mut self, frame: &LandmarkFrame) -> Classification {
        if self.state.detector != DetectorStatus::Ready {
            log::info!("[session] detector ready");
            self.state.detector = DetectorStatus::Ready;
        }
        let c = self.debouncer.push(classify_with(frame, &self.classifier));
        if c.hand_detected != self.state.hand_detected || c.gesture != self.state.gesture {
            log::info!("[session] {} -> {}", self.state.status_text(), status_of(&c));
        }
        self.state.apply(c);
        c
    }

    /// The detector could not start or died; fall back to idle animation.
    pub fn on_detector_failure(&mut self, reason: &str) {
        log::warn!("[session] detector unavailable: {reason}");
        self.state.detector = DetectorStatus::Unavailable;
        self.state.apply(Classification::NO_HAND);
        self.debouncer.push(Classification::NO_HAND);
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.state.pattern = pattern;
        if self.library.set_pattern(pattern) {
            log::info!("[session] pattern -> {pattern}");
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        if color != self.state.color {
            log::info!("[session] color -> {}", color.to_hex());
        }
        self.state.color = color;
    }

    /// Advance the animation; `elapsed_sec` drives the pulse and idle sway.
    pub fn tick(&mut self, elapsed_sec: f32) -> Result<BlendParams, TargetSizeError> {
        self.animator
            .advance(&self.state, &self.library, elapsed_sec)
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn library(&self) -> &TargetLibrary {
        &self.library
    }

    pub fn animator(&self) -> &ParticleAnimator {
        &self.animator
    }

    pub fn positions_flat(&self) -> &[f32] {
        self.animator.positions_flat()
    }

    pub fn rotation(&self) -> Rotation {
        self.animator.rotation()
    }

    pub fn take_dirty(&mut self) -> bool {
        self.animator.take_dirty()
    }
}

fn status_of(c: &Classification) -> String {
    InteractionState {
        hand_detected: c.hand_detected,
        gesture: c.gesture,
        ..InteractionState::default()
    }
    .status_text()
}
