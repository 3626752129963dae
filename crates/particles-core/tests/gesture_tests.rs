// Classifier and debouncer behaviour on synthetic and malformed frames.

use glam::Vec2;
use particles_core::landmarks::{HandSnapshot, LandmarkFrame, LandmarkPoint, INDEX_TIP, THUMB_TIP};
use particles_core::poses::{single_hand_frame, synthetic_hand, two_hand_frame, HandPose};
use particles_core::{classify, Classification, Gesture, GestureDebouncer, Pointer};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn frame_of(hand: HandSnapshot) -> LandmarkFrame {
    LandmarkFrame::from_hands([hand])
}

/// Copy of `hand` with the thumb tip moved onto landmark `onto`.
fn thumb_on(hand: &HandSnapshot, onto: usize) -> HandSnapshot {
    let mut points = *hand.points();
    points[THUMB_TIP] = points[onto];
    HandSnapshot::new(points).unwrap()
}

#[test]
fn every_synthetic_pose_classifies_as_expected() {
    for pose in HandPose::ALL {
        let c = classify(&single_hand_frame(pose, Vec2::new(0.5, 0.5)));
        assert!(c.hand_detected);
        assert_eq!(c.gesture, pose.expected_gesture(), "pose {pose:?}");
    }
}

#[test]
fn finger_heart_scenario_reports_pointer_at_mirrored_palm() {
    let hand = synthetic_hand(HandPose::FingerHeart, Vec2::new(0.5, 0.6), 0.3);
    let wrist = hand.point(0);
    assert!(approx(wrist.x, 0.5) && approx(wrist.y, 0.9));

    let c = classify(&frame_of(hand));
    assert!(c.hand_detected);
    assert_eq!(c.gesture, Gesture::FingerHeart);
    assert!(approx(c.pointer.x, 0.5));
    assert!(approx(c.pointer.y, 0.6));
}

#[test]
fn pointer_is_mirrored_horizontally() {
    let c = classify(&single_hand_frame(HandPose::Open, Vec2::new(0.3, 0.4)));
    assert!(approx(c.pointer.x, 0.7), "x = {}", c.pointer.x);
    assert!(approx(c.pointer.y, 0.4));

    let p = Pointer::mirrored(0.0, 1.0);
    assert_eq!(p, Pointer { x: 1.0, y: 1.0 });
}

#[test]
fn empty_frame_reads_as_no_hand() {
    let c = classify(&LandmarkFrame::empty());
    assert_eq!(c, Classification::NO_HAND);
    assert_eq!(c.pointer, Pointer::CENTER);
    assert_eq!(c.gesture, Gesture::Neutral);
}

#[test]
fn pinch_with_extended_index_beats_victory() {
    let victory = synthetic_hand(HandPose::Victory, Vec2::new(0.5, 0.5), 0.3);
    assert_eq!(classify(&frame_of(victory.clone())).gesture, Gesture::Victory);

    let pinched = thumb_on(&victory, INDEX_TIP);
    assert_eq!(classify(&frame_of(pinched)).gesture, Gesture::FingerHeart);
}

#[test]
fn fist_wins_over_pinch_when_index_is_curled() {
    let fist = synthetic_hand(HandPose::Fist, Vec2::new(0.5, 0.5), 0.3);
    let pinched = thumb_on(&fist, INDEX_TIP);
    assert_eq!(classify(&frame_of(pinched)).gesture, Gesture::Closed);
}

#[test]
fn close_hands_override_single_hand_gestures() {
    let c = classify(&two_hand_frame(Vec2::new(0.3, 0.5), 0.3));
    assert!(c.hand_detected);
    assert_eq!(c.gesture, Gesture::TwoHandsHeart);
    // pointer follows the mirrored midpoint of both palms
    assert!(approx(c.pointer.x, 0.7));
    assert!(approx(c.pointer.y, 0.5));
}

#[test]
fn distant_hands_fall_back_to_the_first_hand() {
    let c = classify(&two_hand_frame(Vec2::new(0.5, 0.5), 0.6));
    assert_eq!(c.gesture, Gesture::Open);
    // first hand sits at x = 0.2, mirrored to 0.8
    assert!(approx(c.pointer.x, 0.8));
}

#[test]
fn extra_hands_are_truncated() {
    let hand = synthetic_hand(HandPose::Open, Vec2::new(0.5, 0.5), 0.3);
    let frame = LandmarkFrame::from_hands(vec![hand.clone(), hand.clone(), hand]);
    assert_eq!(frame.len(), 2);
}

#[test]
fn wrong_landmark_count_drops_the_frame() {
    let hand = synthetic_hand(HandPose::Open, Vec2::new(0.5, 0.5), 0.3);
    let good: Vec<LandmarkPoint> = hand.points().to_vec();
    let short: Vec<LandmarkPoint> = good[..20].to_vec();

    assert!(HandSnapshot::from_slice(&short).is_err());
    let frame = LandmarkFrame::from_raw(vec![good, short]);
    assert!(frame.is_empty());
    assert_eq!(classify(&frame), Classification::NO_HAND);
}

#[test]
fn non_finite_landmarks_drop_the_frame() {
    let hand = synthetic_hand(HandPose::Open, Vec2::new(0.5, 0.5), 0.3);
    let mut raw: Vec<LandmarkPoint> = hand.points().to_vec();
    raw[7].y = f32::NAN;
    assert!(HandSnapshot::from_slice(&raw).is_err());
    assert!(LandmarkFrame::from_raw([raw]).is_empty());
}

#[test]
fn flat_buffer_matches_structured_input() {
    let hand = synthetic_hand(HandPose::Victory, Vec2::new(0.4, 0.5), 0.3);
    let flat: Vec<f32> = hand.points().iter().flat_map(|p| [p.x, p.y, p.z]).collect();

    let frame = LandmarkFrame::from_flat(&flat, 1);
    assert_eq!(frame.len(), 1);
    assert_eq!(classify(&frame), classify(&frame_of(hand)));

    assert!(LandmarkFrame::from_flat(&flat[..60], 1).is_empty());
    assert!(LandmarkFrame::from_flat(&flat, 2).is_empty());
}

#[test]
fn debouncer_window_one_passes_through() {
    let mut d = GestureDebouncer::default();
    assert_eq!(d.window(), 1);
    for pose in HandPose::ALL {
        let c = classify(&single_hand_frame(pose, Vec2::new(0.5, 0.5)));
        assert_eq!(d.push(c), c);
    }
}

#[test]
fn debouncer_majority_vote_and_reset() {
    let open = classify(&single_hand_frame(HandPose::Open, Vec2::new(0.5, 0.5)));
    let fist = classify(&single_hand_frame(HandPose::Fist, Vec2::new(0.5, 0.5)));
    let mut d = GestureDebouncer::new(3);

    assert_eq!(d.push(open).gesture, Gesture::Open);
    assert_eq!(d.push(open).gesture, Gesture::Open);
    // one stray frame is outvoted
    assert_eq!(d.push(fist).gesture, Gesture::Open);
    assert_eq!(d.push(fist).gesture, Gesture::Closed);

    // losing the hand clears the history
    assert_eq!(d.push(Classification::NO_HAND), Classification::NO_HAND);
    assert_eq!(d.push(open).gesture, Gesture::Open);
}

#[test]
fn debouncer_ties_go_to_the_latest_gesture() {
    let open = classify(&single_hand_frame(HandPose::Open, Vec2::new(0.5, 0.5)));
    let fist = classify(&single_hand_frame(HandPose::Fist, Vec2::new(0.5, 0.5)));
    let mut d = GestureDebouncer::new(2);
    d.push(open);
    assert_eq!(d.push(fist).gesture, Gesture::Closed);
}

#[test]
fn gesture_names_match_status_line() {
    let names: Vec<&str> = Gesture::ALL.iter().map(|g| g.name()).collect();
    assert_eq!(
        names,
        ["neutral", "open", "closed", "fingerHeart", "victory", "twoHandsHeart"]
    );
    assert_eq!(Gesture::TwoHandsHeart.to_string(), "twoHandsHeart");
}
