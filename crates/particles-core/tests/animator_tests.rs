// Blending, gesture-to-target mapping and cloud orientation.

use glam::Vec3;
use particles_core::gesture::{Gesture, Pointer};
use particles_core::targets::{self, TargetConfiguration, TargetKind};
use particles_core::{
    blend_params, AnimatorParams, InteractionState, ParticleAnimator, Rotation, SoftwareRasterizer,
    TargetLibrary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn hand_state(gesture: Gesture, x: f32, y: f32) -> InteractionState {
    InteractionState {
        hand_detected: true,
        gesture,
        pointer: Pointer { x, y },
        ..InteractionState::default()
    }
}

fn max_error(anim: &ParticleAnimator, target: &TargetConfiguration, expansion: f32) -> f32 {
    anim.positions()
        .iter()
        .zip(target.points())
        .map(|(p, t)| p.distance(*t * expansion))
        .fold(0.0, f32::max)
}

#[test]
fn particles_converge_within_two_hundred_frames() {
    let target = targets::hollow_heart(500, &mut StdRng::seed_from_u64(2));
    let mut anim = ParticleAnimator::new(500, 1, AnimatorParams::default());
    for _ in 0..200 {
        anim.blend_toward(&target, 1.0, 0.1).unwrap();
    }
    assert!(max_error(&anim, &target, 1.0) < 1e-3);
}

#[test]
fn each_step_removes_a_fixed_fraction_of_the_error() {
    let target = targets::sphere(200, &mut StdRng::seed_from_u64(3));
    let mut anim = ParticleAnimator::new(200, 4, AnimatorParams::default());
    let before: Vec<f32> = anim
        .positions()
        .iter()
        .zip(target.points())
        .map(|(p, t)| p.distance(*t))
        .collect();
    anim.blend_toward(&target, 1.0, 0.03).unwrap();
    for ((p, t), d0) in anim.positions().iter().zip(target.points()).zip(before) {
        let d1 = p.distance(*t);
        assert!((d1 - 0.97 * d0).abs() < 1e-4 * d0.max(1.0));
    }
}

#[test]
fn expansion_scales_the_target() {
    let target = targets::cube(100, &mut StdRng::seed_from_u64(5));
    let mut anim = ParticleAnimator::new(100, 6, AnimatorParams::default());
    for _ in 0..300 {
        anim.blend_toward(&target, 2.0, 0.1).unwrap();
    }
    assert!(max_error(&anim, &target, 2.0) < 1e-3);
}

#[test]
fn wrong_length_target_is_rejected_without_moving_anything() {
    let start = vec![Vec3::splat(1.0); 10];
    let mut anim = ParticleAnimator::with_positions(start, AnimatorParams::default());
    assert!(anim.take_dirty());

    let err = anim
        .blend_toward(&TargetConfiguration::zeros(5), 1.0, 0.5)
        .unwrap_err();
    assert_eq!((err.expected, err.actual), (10, 5));
    assert!(anim.positions().iter().all(|p| *p == Vec3::splat(1.0)));
    assert!(!anim.take_dirty());
}

#[test]
fn advance_rejects_a_library_of_another_size() {
    let lib = TargetLibrary::new(32, 1, &mut SoftwareRasterizer::new());
    let mut anim = ParticleAnimator::new(64, 2, AnimatorParams::default());
    let before = anim.positions().to_vec();
    assert!(anim.check_library(&lib).is_err());
    assert!(anim
        .advance(&hand_state(Gesture::Open, 0.5, 0.5), &lib, 0.0)
        .is_err());
    assert_eq!(anim.positions(), &before[..]);
}

#[test]
fn gestures_pick_their_targets() {
    let params = AnimatorParams::default();
    let cases = [
        (Gesture::Open, TargetKind::LoveText),
        (Gesture::Closed, TargetKind::Characters),
        (Gesture::FingerHeart, TargetKind::HollowHeart),
        (Gesture::Victory, TargetKind::BirthdayText),
        (Gesture::TwoHandsHeart, TargetKind::LayeredHeart),
    ];
    for (gesture, kind) in cases {
        let b = blend_params(&hand_state(gesture, 0.5, 0.5), 0.0, &params);
        assert_eq!(b.target, kind, "{gesture}");
        assert_eq!(b.attraction, 0.1);
    }

    let neutral = blend_params(&hand_state(Gesture::Neutral, 0.5, 0.5), 0.0, &params);
    assert_eq!(neutral.target, TargetKind::Pattern);
    assert_eq!((neutral.expansion, neutral.attraction), (1.0, 0.03));

    // a stale gesture without a hand is ignored
    let idle = InteractionState {
        gesture: Gesture::Open,
        ..InteractionState::default()
    };
    let b = blend_params(&idle, 0.0, &params);
    assert_eq!(b.target, TargetKind::Pattern);
    assert_eq!(b.attraction, 0.03);
}

#[test]
fn two_hand_pulse_stays_in_range() {
    let params = AnimatorParams::default();
    let state = hand_state(Gesture::TwoHandsHeart, 0.5, 0.5);
    let (mut lo, mut hi) = (f32::MAX, f32::MIN);
    for i in 0..2_000 {
        let e = blend_params(&state, i as f32 * 0.01, &params).expansion;
        lo = lo.min(e);
        hi = hi.max(e);
    }
    assert!(lo >= 1.6 - 1e-5 && hi <= 2.0 + 1e-5);
    assert!(hi - lo > 0.35);
}

#[test]
fn rotation_follows_pointer() {
    let params = AnimatorParams::default();
    let mut rot = Rotation::default();
    for i in 0..200 {
        rot.update(&hand_state(Gesture::Open, 1.0, 0.0), i as f32 / 60.0, &params);
    }
    // pointer.y drives x, pointer.x drives y
    assert!((rot.x + 0.5).abs() < 1e-3);
    assert!((rot.y - 0.5).abs() < 1e-3);
}

#[test]
fn rotation_is_clamped() {
    let params = AnimatorParams {
        pointer_rotation_range: 4.0,
        ..AnimatorParams::default()
    };
    for (x, y, expect) in [(0.0, 0.0, -0.8), (1.0, 1.0, 0.8)] {
        let mut rot = Rotation::default();
        for i in 0..200 {
            rot.update(&hand_state(Gesture::Neutral, x, y), i as f32 / 60.0, &params);
            assert!(rot.x.abs() <= 0.8 && rot.y.abs() <= 0.8);
        }
        assert_eq!((rot.x, rot.y), (expect, expect));
    }
}

#[test]
fn extreme_pointers_stay_inside_the_limit() {
    let params = AnimatorParams::default();
    let mut rot = Rotation::default();
    for i in 0..600 {
        let (x, y) = if (i / 50) % 2 == 0 { (0.0, 0.0) } else { (1.0, 1.0) };
        rot.update(&hand_state(Gesture::Open, x, y), i as f32 / 60.0, &params);
        assert!(rot.x.abs() <= 0.8 && rot.y.abs() <= 0.8, "frame {i}: {rot:?}");
    }
}

#[test]
fn rotation_beyond_the_limit_is_pulled_back_on_first_hand_frame() {
    let params = AnimatorParams::default();
    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5)] {
        let mut rot = Rotation {
            x: 1.5,
            y: -1.5,
            ..Rotation::default()
        };
        rot.update(&hand_state(Gesture::Neutral, x, y), 0.0, &params);
        assert!(rot.x.abs() <= 0.8 && rot.y.abs() <= 0.8, "{rot:?}");
        for i in 1..300 {
            rot.update(&hand_state(Gesture::Neutral, x, y), i as f32 / 60.0, &params);
            assert!(rot.x.abs() <= 0.8 && rot.y.abs() <= 0.8);
        }
    }
}

#[test]
fn idle_sway_is_gentle_and_levels_out() {
    let params = AnimatorParams::default();
    let mut rot = Rotation {
        x: 0.6,
        ..Rotation::default()
    };
    let idle = InteractionState::default();
    for i in 0..600 {
        rot.update(&idle, i as f32 / 60.0, &params);
        assert!(rot.y.abs() <= 0.2 + 1e-6);
        assert!(rot.z.abs() <= 0.05 + 1e-6);
    }
    assert!(rot.x.abs() < 1e-3);
}

#[test]
fn advance_marks_the_buffer_dirty() {
    let lib = TargetLibrary::new(64, 8, &mut SoftwareRasterizer::new());
    let mut anim = ParticleAnimator::new(64, 9, AnimatorParams::default());
    assert!(anim.take_dirty());
    assert!(!anim.take_dirty());

    let b = anim
        .advance(&hand_state(Gesture::Open, 0.5, 0.5), &lib, 0.0)
        .unwrap();
    assert_eq!(b.target, TargetKind::LoveText);
    assert!(anim.take_dirty());
    assert_eq!(anim.positions_flat().len(), 64 * 3);
}
