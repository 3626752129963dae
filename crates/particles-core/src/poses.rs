//! Synthetic hand poses.
//!
//! Builds plausible 21-point hands in detector space for each gesture the
//! classifier knows. The native front-end has no camera detector and feeds
//! these through the real classifier; the tests use them as fixtures.
//!
//! Offsets are in units of hand size (wrist to middle MCP), with the hand
//! upright in image space (fingers toward smaller y).

use crate::gesture::Gesture;
use crate::landmarks::*;
use glam::Vec2;

pub const DEFAULT_HAND_SIZE: f32 = 0.3;

// Extended finger joints sit on the wrist->MCP ray at these multiples.
const EXTENDED: [f32; 3] = [1.3, 1.5, 1.7];
// Curled fingers fold back toward the palm.
const CURLED: [f32; 3] = [1.15, 0.9, 0.6];

const MCP_OFFSETS: [(usize, Vec2); 4] = [
    (INDEX_MCP, Vec2::new(-0.25, -0.95)),
    (MIDDLE_MCP, Vec2::new(0.0, -1.0)),
    (RING_MCP, Vec2::new(0.22, -0.95)),
    (PINKY_MCP, Vec2::new(0.42, -0.85)),
];

const THUMB_CMC_OFFSET: Vec2 = Vec2::new(-0.25, -0.15);
const THUMB_MCP_OFFSET: Vec2 = Vec2::new(-0.45, -0.3);
const THUMB_OUT: [Vec2; 2] = [Vec2::new(-0.6, -0.45), Vec2::new(-0.72, -0.58)];
const THUMB_TUCKED: [Vec2; 2] = [Vec2::new(-0.35, -0.5), Vec2::new(-0.2, -0.45)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandPose {
    /// All fingers and thumb spread.
    Open,
    /// Every finger curled, thumb across the knuckles.
    Fist,
    /// Index extended with the thumb tip touching it, others curled.
    FingerHeart,
    /// Index and middle extended, others curled.
    Victory,
    /// Index only; reads as neutral.
    Point,
}

impl HandPose {
    pub const ALL: [HandPose; 5] = [
        HandPose::Open,
        HandPose::Fist,
        HandPose::FingerHeart,
        HandPose::Victory,
        HandPose::Point,
    ];

    /// What the single-hand classifier should report for this pose.
    pub fn expected_gesture(self) -> Gesture {
        match self {
            HandPose::Open => Gesture::Open,
            HandPose::Fist => Gesture::Closed,
            HandPose::FingerHeart => Gesture::FingerHeart,
            HandPose::Victory => Gesture::Victory,
            HandPose::Point => Gesture::Neutral,
        }
    }

    /// Extended flags for index, middle, ring, pinky.
    fn extended(self) -> [bool; 4] {
        match self {
            HandPose::Open => [true; 4],
            HandPose::Fist => [false; 4],
            HandPose::FingerHeart | HandPose::Point => [true, false, false, false],
            HandPose::Victory => [true, true, false, false],
        }
    }
}

/// Hand in `pose` whose middle MCP (the palm point) sits at `palm`.
pub fn synthetic_hand(pose: HandPose, palm: Vec2, hand_size: f32) -> HandSnapshot {
    let wrist = palm + Vec2::new(0.0, hand_size);
    let at = |offset: Vec2| wrist + offset * hand_size;
    let mut points = [LandmarkPoint::default(); LANDMARK_COUNT];
    let mut set = |index: usize, p: Vec2| points[index] = LandmarkPoint::new(p.x, p.y, 0.0);

    set(WRIST, wrist);
    for ((mcp, offset), extended) in MCP_OFFSETS.iter().zip(pose.extended()) {
        let chain = if extended { EXTENDED } else { CURLED };
        set(*mcp, at(*offset));
        for (joint, k) in chain.iter().enumerate() {
            set(*mcp + 1 + joint, at(*offset * *k));
        }
    }

    set(THUMB_CMC, at(THUMB_CMC_OFFSET));
    set(THUMB_MCP, at(THUMB_MCP_OFFSET));
    let [ip, tip] = match pose {
        HandPose::Open => THUMB_OUT,
        HandPose::FingerHeart => {
            // thumb tip meets the index tip
            let index_tip = MCP_OFFSETS[0].1 * EXTENDED[2];
            [index_tip + Vec2::new(-0.12, 0.12), index_tip + Vec2::new(-0.05, 0.05)]
        }
        _ => THUMB_TUCKED,
    };
    set(THUMB_IP, at(ip));
    set(THUMB_TIP, at(tip));

    HandSnapshot::from_trusted(points)
}

/// Single hand frame.
pub fn single_hand_frame(pose: HandPose, palm: Vec2) -> LandmarkFrame {
    LandmarkFrame::from_hands([synthetic_hand(pose, palm, DEFAULT_HAND_SIZE)])
}

/// Two open hands with palms `separation` apart, centered on `center`.
pub fn two_hand_frame(center: Vec2, separation: f32) -> LandmarkFrame {
    let half = Vec2::new(separation / 2.0, 0.0);
    LandmarkFrame::from_hands([
        synthetic_hand(HandPose::Open, center - half, DEFAULT_HAND_SIZE),
        synthetic_hand(HandPose::Open, center + half, DEFAULT_HAND_SIZE),
    ])
}
