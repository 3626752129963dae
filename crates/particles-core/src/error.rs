use thiserror::Error;

/// Reasons a detector result cannot be turned into a [`crate::HandSnapshot`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("expected {expected} landmarks, got {actual}")]
    WrongLandmarkCount { expected: usize, actual: usize },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("flat landmark buffer of {len} floats is too short for {hands} hands")]
    ShortFlatBuffer { len: usize, hands: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown pattern {0:?}; expected sphere, cube, ring or random")]
pub struct PatternParseError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("target has {actual} points, expected {expected}")]
pub struct TargetSizeError {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("2d drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, len: usize },
}
