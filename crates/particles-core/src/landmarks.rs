//! Hand landmark snapshots as delivered by the external detector.
//!
//! Every hand is exactly 21 points in normalized camera space (x/y in
//! [0, 1], z relative depth). Anything else is rejected at construction so
//! the classifier can index landmarks without bounds checks failing.

use crate::constants::MAX_HANDS;
use crate::error::SnapshotError;
use glam::Vec2;
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LandmarkPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance in the image plane; depth is ignored.
    #[inline]
    pub fn distance_xy(&self, other: &LandmarkPoint) -> f32 {
        self.xy().distance(other.xy())
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One tracked hand: 21 anatomically indexed landmarks.
#[derive(Clone, Debug, PartialEq)]
pub struct HandSnapshot {
    points: [LandmarkPoint; LANDMARK_COUNT],
}

impl HandSnapshot {
    pub fn new(points: [LandmarkPoint; LANDMARK_COUNT]) -> Result<Self, SnapshotError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(SnapshotError::NonFinite { index });
        }
        Ok(Self { points })
    }

    /// Caller guarantees finite coordinates (synthetic poses).
    pub(crate) fn from_trusted(points: [LandmarkPoint; LANDMARK_COUNT]) -> Self {
        debug_assert!(points.iter().all(LandmarkPoint::is_finite));
        Self { points }
    }

    pub fn from_slice(points: &[LandmarkPoint]) -> Result<Self, SnapshotError> {
        let points: [LandmarkPoint; LANDMARK_COUNT] =
            points
                .try_into()
                .map_err(|_| SnapshotError::WrongLandmarkCount {
                    expected: LANDMARK_COUNT,
                    actual: points.len(),
                })?;
        Self::new(points)
    }

    /// Build from `x, y, z` triples.
    pub fn from_xyz(flat: &[f32]) -> Result<Self, SnapshotError> {
        if flat.len() != LANDMARK_COUNT * 3 {
            return Err(SnapshotError::WrongLandmarkCount {
                expected: LANDMARK_COUNT,
                actual: flat.len() / 3,
            });
        }
        let mut points = [LandmarkPoint::default(); LANDMARK_COUNT];
        for (p, xyz) in points.iter_mut().zip(flat.chunks_exact(3)) {
            *p = LandmarkPoint::new(xyz[0], xyz[1], xyz[2]);
        }
        Self::new(points)
    }

    #[inline]
    pub fn point(&self, index: usize) -> LandmarkPoint {
        self.points[index]
    }

    pub fn points(&self) -> &[LandmarkPoint; LANDMARK_COUNT] {
        &self.points
    }

    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.points[a].distance_xy(&self.points[b])
    }
}

/// All hands seen in one camera frame, at most [`MAX_HANDS`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkFrame {
    hands: SmallVec<[HandSnapshot; MAX_HANDS]>,
}

impl LandmarkFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Hands beyond [`MAX_HANDS`] are dropped.
    pub fn from_hands(hands: impl IntoIterator<Item = HandSnapshot>) -> Self {
        Self {
            hands: hands.into_iter().take(MAX_HANDS).collect(),
        }
    }

    /// Validate raw per-hand point lists. A single malformed hand makes the
    /// whole frame read as "no hand".
    pub fn from_raw<I, H>(raw: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: AsRef<[LandmarkPoint]>,
    {
        let parsed: Result<SmallVec<[HandSnapshot; MAX_HANDS]>, SnapshotError> = raw
            .into_iter()
            .take(MAX_HANDS)
            .map(|h| HandSnapshot::from_slice(h.as_ref()))
            .collect();
        match parsed {
            Ok(hands) => Self { hands },
            Err(e) => {
                log::debug!("[landmarks] dropping malformed frame: {e}");
                Self::empty()
            }
        }
    }

    /// Parse `num_hands * 21 * 3` packed floats, the layout JS hands over as a
    /// `Float32Array`.
    pub fn from_flat(flat: &[f32], num_hands: usize) -> Self {
        let hands = num_hands.min(MAX_HANDS);
        let stride = LANDMARK_COUNT * 3;
        if flat.len() < hands * stride {
            let e = SnapshotError::ShortFlatBuffer {
                len: flat.len(),
                hands,
            };
            log::debug!("[landmarks] dropping malformed frame: {e}");
            return Self::empty();
        }
        let parsed: Result<SmallVec<[HandSnapshot; MAX_HANDS]>, SnapshotError> = flat
            .chunks_exact(stride)
            .take(hands)
            .map(HandSnapshot::from_xyz)
            .collect();
        match parsed {
            Ok(hands) => Self { hands },
            Err(e) => {
                log::debug!("[landmarks] dropping malformed frame: {e}");
                Self::empty()
            }
        }
    }

    pub fn hands(&self) -> &[HandSnapshot] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}
