//! Desktop stand-in for the camera detector.
//!
//! There is no landmark model on desktop, so the keyboard picks a synthetic
//! hand pose and the mouse moves its palm. The resulting frames go through
//! the same classifier the camera path uses.

use glam::Vec2;
use particles_core::poses::{single_hand_frame, two_hand_frame, HandPose};
use particles_core::{LandmarkFrame, Pattern};

/// Palm separation used for the two-hand pose; well inside the two-hand
/// heart distance.
pub const TWO_HAND_SEPARATION: f32 = 0.25;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyntheticHand {
    #[default]
    Absent,
    One(HandPose),
    Two,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetPattern(Pattern),
    NextPattern,
    NextColor,
    SetHand(SyntheticHand),
}

#[inline]
pub fn command_for_key(key: &str) -> Option<Command> {
    let cmd = match key {
        "1" => Command::SetPattern(Pattern::Sphere),
        "2" => Command::SetPattern(Pattern::Cube),
        "3" => Command::SetPattern(Pattern::Ring),
        "4" => Command::SetPattern(Pattern::Random),
        " " => Command::NextPattern,
        "c" | "C" => Command::NextColor,
        "o" | "O" => Command::SetHand(SyntheticHand::One(HandPose::Open)),
        "f" | "F" => Command::SetHand(SyntheticHand::One(HandPose::Fist)),
        "h" | "H" => Command::SetHand(SyntheticHand::One(HandPose::FingerHeart)),
        "v" | "V" => Command::SetHand(SyntheticHand::One(HandPose::Victory)),
        "p" | "P" => Command::SetHand(SyntheticHand::One(HandPose::Point)),
        "t" | "T" => Command::SetHand(SyntheticHand::Two),
        "0" => Command::SetHand(SyntheticHand::Absent),
        _ => return None,
    };
    Some(cmd)
}

/// Cursor position in window pixels to a palm position in detector space.
///
/// The detector sees an unmirrored camera image, so the palm x is flipped
/// here; after the classifier mirrors it back the pointer tracks the cursor.
#[inline]
pub fn palm_from_cursor(x: f64, y: f64, width: u32, height: u32) -> Vec2 {
    if width == 0 || height == 0 {
        return Vec2::splat(0.5);
    }
    let u = (x / width as f64).clamp(0.0, 1.0) as f32;
    let v = (y / height as f64).clamp(0.0, 1.0) as f32;
    Vec2::new(1.0 - u, v)
}

#[derive(Clone, Debug)]
pub struct SyntheticDetector {
    hand: SyntheticHand,
    palm: Vec2,
}

impl SyntheticDetector {
    pub fn new() -> Self {
        Self {
            hand: SyntheticHand::Absent,
            palm: Vec2::splat(0.5),
        }
    }

    pub fn set_hand(&mut self, hand: SyntheticHand) {
        self.hand = hand;
    }

    pub fn set_palm(&mut self, palm: Vec2) {
        self.palm = palm;
    }

    /// What the camera detector would have delivered this frame.
    pub fn frame(&self) -> LandmarkFrame {
        match self.hand {
            SyntheticHand::Absent => LandmarkFrame::empty(),
            SyntheticHand::One(pose) => single_hand_frame(pose, self.palm),
            SyntheticHand::Two => two_hand_frame(self.palm, TWO_HAND_SEPARATION),
        }
    }
}

impl Default for SyntheticDetector {
    fn default() -> Self {
        Self::new()
    }
}
