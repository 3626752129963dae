// Host-side tests for the desktop controls.
// The native crate is a binary, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/controls.rs"]
mod controls;

use controls::*;
use particles_core::poses::HandPose;
use particles_core::{classify, Gesture, Pattern};

#[test]
fn digit_keys_select_patterns() {
    assert_eq!(command_for_key("1"), Some(Command::SetPattern(Pattern::Sphere)));
    assert_eq!(command_for_key("2"), Some(Command::SetPattern(Pattern::Cube)));
    assert_eq!(command_for_key("3"), Some(Command::SetPattern(Pattern::Ring)));
    assert_eq!(command_for_key("4"), Some(Command::SetPattern(Pattern::Random)));
    assert_eq!(command_for_key("5"), None);
}

#[test]
fn letter_keys_pick_poses_in_either_case() {
    for (key, pose) in [
        ("o", HandPose::Open),
        ("F", HandPose::Fist),
        ("h", HandPose::FingerHeart),
        ("V", HandPose::Victory),
        ("p", HandPose::Point),
    ] {
        assert_eq!(
            command_for_key(key),
            Some(Command::SetHand(SyntheticHand::One(pose)))
        );
    }
    assert_eq!(command_for_key("t"), Some(Command::SetHand(SyntheticHand::Two)));
    assert_eq!(command_for_key("0"), Some(Command::SetHand(SyntheticHand::Absent)));
    assert_eq!(command_for_key("c"), Some(Command::NextColor));
    assert_eq!(command_for_key("x"), None);
}

#[test]
fn cursor_maps_to_mirrored_palm() {
    let palm = palm_from_cursor(200.0, 150.0, 800, 600);
    assert!((palm.x - 0.75).abs() < 1e-6);
    assert!((palm.y - 0.25).abs() < 1e-6);

    // off-window positions clamp, empty windows center
    let clamped = palm_from_cursor(-50.0, 900.0, 800, 600);
    assert_eq!((clamped.x, clamped.y), (1.0, 1.0));
    assert_eq!(palm_from_cursor(10.0, 10.0, 0, 0), glam::Vec2::splat(0.5));
}

#[test]
fn pointer_tracks_the_cursor_after_classification() {
    let mut det = SyntheticDetector::new();
    det.set_hand(SyntheticHand::One(HandPose::Open));
    det.set_palm(palm_from_cursor(200.0, 150.0, 800, 600));
    let c = classify(&det.frame());
    assert!((c.pointer.x - 0.25).abs() < 1e-5);
    assert!((c.pointer.y - 0.25).abs() < 1e-5);
}

#[test]
fn synthetic_detector_frames_classify_as_selected() {
    let mut det = SyntheticDetector::default();
    assert!(!classify(&det.frame()).hand_detected);

    det.set_hand(SyntheticHand::One(HandPose::Victory));
    assert_eq!(classify(&det.frame()).gesture, Gesture::Victory);

    det.set_hand(SyntheticHand::Two);
    assert_eq!(det.frame().len(), 2);
    assert_eq!(classify(&det.frame()).gesture, Gesture::TwoHandsHeart);
}
