//! Heuristic hand-pose classifier.
//!
//! Each frame is decided from scratch: there is no memory across frames
//! here. [`GestureDebouncer`] can be layered on top when boundary flicker
//! matters.

use crate::constants::*;
use crate::landmarks::*;
use std::collections::VecDeque;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gesture {
    #[default]
    Neutral,
    Open,
    Closed,
    FingerHeart,
    Victory,
    TwoHandsHeart,
}

impl Gesture {
    pub const ALL: [Gesture; 6] = [
        Gesture::Neutral,
        Gesture::Open,
        Gesture::Closed,
        Gesture::FingerHeart,
        Gesture::Victory,
        Gesture::TwoHandsHeart,
    ];

    /// Name used by the status line and the JS bridge.
    pub fn name(self) -> &'static str {
        match self {
            Gesture::Neutral => "neutral",
            Gesture::Open => "open",
            Gesture::Closed => "closed",
            Gesture::FingerHeart => "fingerHeart",
            Gesture::Victory => "victory",
            Gesture::TwoHandsHeart => "twoHandsHeart",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Palm position in [0, 1]², mirrored horizontally to match the selfie view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.5, y: 0.5 };

    #[inline]
    pub fn mirrored(raw_x: f32, raw_y: f32) -> Self {
        Self {
            x: 1.0 - raw_x,
            y: raw_y,
        }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::CENTER
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub hand_detected: bool,
    pub gesture: Gesture,
    pub pointer: Pointer,
}

impl Classification {
    pub const NO_HAND: Classification = Classification {
        hand_detected: false,
        gesture: Gesture::Neutral,
        pointer: Pointer::CENTER,
    };
}

impl Default for Classification {
    fn default() -> Self {
        Self::NO_HAND
    }
}

#[derive(Clone, Debug)]
pub struct ClassifierParams {
    pub two_hand_max_distance: f32,
    pub curl_ratio: f32,
    pub pinch_ratio: f32,
    pub thumb_open_ratio: f32,
    pub closed_min_curled: usize,
    pub open_min_extended: usize,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            two_hand_max_distance: TWO_HAND_HEART_MAX_DISTANCE,
            curl_ratio: CURL_RATIO,
            pinch_ratio: PINCH_RATIO,
            thumb_open_ratio: THUMB_OPEN_RATIO,
            closed_min_curled: CLOSED_MIN_CURLED,
            open_min_extended: OPEN_MIN_EXTENDED,
        }
    }
}

/// Per-finger curl flags, thumb excluded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerCurls {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerCurls {
    pub fn curled_count(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|c| **c)
            .count()
    }

    pub fn extended_count(&self) -> usize {
        4 - self.curled_count()
    }
}

/// A finger is curled when its tip is not meaningfully farther from the
/// wrist than its MCP joint.
#[inline]
pub fn is_curled(hand: &HandSnapshot, tip: usize, mcp: usize, params: &ClassifierParams) -> bool {
    hand.distance(tip, WRIST) < hand.distance(mcp, WRIST) * params.curl_ratio
}

pub fn finger_curls(hand: &HandSnapshot, params: &ClassifierParams) -> FingerCurls {
    FingerCurls {
        index: is_curled(hand, INDEX_TIP, INDEX_MCP, params),
        middle: is_curled(hand, MIDDLE_TIP, MIDDLE_MCP, params),
        ring: is_curled(hand, RING_TIP, RING_MCP, params),
        pinky: is_curled(hand, PINKY_TIP, PINKY_MCP, params),
    }
}

pub fn classify(frame: &LandmarkFrame) -> Classification {
    classify_with(frame, &ClassifierParams::default())
}

pub fn classify_with(frame: &LandmarkFrame, params: &ClassifierParams) -> Classification {
    match frame.hands() {
        [] => Classification::NO_HAND,
        [first, second] => classify_two_hands(first, second, params)
            .unwrap_or_else(|| classify_primary(first, params)),
        [first, ..] => classify_primary(first, params),
    }
}

fn classify_two_hands(
    a: &HandSnapshot,
    b: &HandSnapshot,
    params: &ClassifierParams,
) -> Option<Classification> {
    let pa = a.point(MIDDLE_MCP);
    let pb = b.point(MIDDLE_MCP);
    if pa.distance_xy(&pb) >= params.two_hand_max_distance {
        return None;
    }
    let mid = (pa.xy() + pb.xy()) * 0.5;
    Some(Classification {
        hand_detected: true,
        gesture: Gesture::TwoHandsHeart,
        pointer: Pointer::mirrored(mid.x, mid.y),
    })
}

fn classify_primary(hand: &HandSnapshot, params: &ClassifierParams) -> Classification {
    let palm = hand.point(MIDDLE_MCP);
    Classification {
        hand_detected: true,
        gesture: classify_hand(hand, params),
        pointer: Pointer::mirrored(palm.x, palm.y),
    }
}

/// Single-hand decision tree. The index curl decides between fist and
/// finger heart, so it is checked before the pinch.
pub fn classify_hand(hand: &HandSnapshot, params: &ClassifierParams) -> Gesture {
    let hand_size = hand.distance(WRIST, MIDDLE_MCP);
    let curls = finger_curls(hand, params);
    let is_pinch = hand.distance(THUMB_TIP, INDEX_TIP) < hand_size * params.pinch_ratio;
    let is_victory = !curls.index && !curls.middle && curls.ring && curls.pinky;

    if curls.curled_count() >= params.closed_min_curled && curls.index {
        return Gesture::Closed;
    }
    if is_pinch && !curls.index {
        return Gesture::FingerHeart;
    }
    if is_victory {
        return Gesture::Victory;
    }

    let thumb_open =
        hand.distance(THUMB_TIP, WRIST) > hand.distance(THUMB_MCP, WRIST) * params.thumb_open_ratio;
    let open_count = curls.extended_count() + usize::from(thumb_open);
    if open_count >= params.open_min_extended {
        Gesture::Open
    } else {
        Gesture::Neutral
    }
}

/// Majority vote over the last `window` detected frames.
///
/// A window of 1 passes every classification through untouched. Losing the
/// hand clears the history so a re-acquired hand starts fresh. Ties go to
/// the most recently seen gesture.
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    window: usize,
    history: VecDeque<Gesture>,
}

impl GestureDebouncer {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            history: VecDeque::with_capacity(window),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn push(&mut self, c: Classification) -> Classification {
        if !c.hand_detected {
            self.history.clear();
            return c;
        }
        if self.window == 1 {
            return c;
        }
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(c.gesture);

        let mut counts = [0usize; Gesture::ALL.len()];
        for g in &self.history {
            counts[g.slot()] += 1;
        }
        let mut best = c.gesture;
        for g in self.history.iter().rev() {
            if counts[g.slot()] > counts[best.slot()] {
                best = *g;
            }
        }
        Classification { gesture: best, ..c }
    }
}

impl Default for GestureDebouncer {
    fn default() -> Self {
        Self::new(1)
    }
}
