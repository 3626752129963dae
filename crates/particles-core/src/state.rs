//! Interaction state shared between the classifier, the UI and the animator.
//!
//! There is exactly one [`InteractionState`] per session. It is passed
//! explicitly to whoever needs it instead of living in a global, so the core
//! can be exercised without a browser or a window.

use crate::constants::{camera_eye_vec3, CAMERA_FOV_DEGREES};
use crate::error::{ColorParseError, PatternParseError};
use crate::gesture::{Classification, Gesture, Pointer};
use glam::{Mat4, Vec3};
use std::fmt;
use std::str::FromStr;

/// Procedural shape shown while no gesture is driving the cloud.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pattern {
    #[default]
    Sphere,
    Cube,
    Ring,
    Random,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [Pattern::Sphere, Pattern::Cube, Pattern::Ring, Pattern::Random];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Sphere => "sphere",
            Pattern::Cube => "cube",
            Pattern::Ring => "ring",
            Pattern::Random => "random",
        }
    }

    pub fn next(self) -> Pattern {
        match self {
            Pattern::Sphere => Pattern::Cube,
            Pattern::Cube => Pattern::Ring,
            Pattern::Ring => Pattern::Random,
            Pattern::Random => Pattern::Sphere,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PatternParseError(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);

    /// Swatches offered by the UI, in display order.
    pub const PALETTE: [Rgb; 6] = [
        Rgb::new(0x00, 0xff, 0xff),
        Rgb::new(0xff, 0x00, 0xff),
        Rgb::new(0xff, 0xff, 0x00),
        Rgb::new(0xff, 0x33, 0x33),
        Rgb::new(0x33, 0xff, 0x33),
        Rgb::new(0xff, 0xff, 0xff),
    ];

    /// Parse `#rrggbb` or the short `#rgb` form.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };
        match digits.len() {
            6 => Ok(Rgb::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Rgb::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to [0, 1].
    pub fn to_unit_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Next palette swatch after this colour; custom colours restart at the
    /// first swatch.
    pub fn next_in_palette(self) -> Rgb {
        match Rgb::PALETTE.iter().position(|c| *c == self) {
            Some(i) => Rgb::PALETTE[(i + 1) % Rgb::PALETTE.len()],
            None => Rgb::PALETTE[0],
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::CYAN
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

/// Lifecycle of the external landmark detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectorStatus {
    #[default]
    Loading,
    Ready,
    Unavailable,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub hand_detected: bool,
    pub gesture: Gesture,
    pub pointer: Pointer,
    pub pattern: Pattern,
    pub color: Rgb,
    pub detector: DetectorStatus,
}

impl InteractionState {
    /// Overwrite the detection fields; pattern and colour belong to the UI.
    pub fn apply(&mut self, c: Classification) {
        self.hand_detected = c.hand_detected;
        self.gesture = c.gesture;
        self.pointer = c.pointer;
    }

    pub fn status_text(&self) -> String {
        if self.hand_detected {
            format!("Connected: {}", self.gesture)
        } else {
            "No Hand Detected".to_string()
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed scene camera looking at the origin from +z.
    pub fn scene(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
