use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Particle cloud
pub const PARTICLE_COUNT: usize = 15_000;
pub const INITIAL_CLOUD_EXTENT: f32 = 20.0; // side of the cube the cloud starts in

// Detector
pub const MAX_HANDS: usize = 2;
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;
pub const MODEL_COMPLEXITY: u32 = 1;
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.5;
pub const MIN_TRACKING_CONFIDENCE: f32 = 0.5;

// Classifier thresholds
pub const TWO_HAND_HEART_MAX_DISTANCE: f32 = 0.5; // between middle MCPs, normalized xy
pub const CURL_RATIO: f32 = 1.2; // tip/wrist vs mcp/wrist
pub const PINCH_RATIO: f32 = 0.5; // thumb-index gap relative to hand size
pub const THUMB_OPEN_RATIO: f32 = 1.1;
pub const CLOSED_MIN_CURLED: usize = 3;
pub const OPEN_MIN_EXTENDED: usize = 3;

// Blending
pub const IDLE_ATTRACTION: f32 = 0.03;
pub const GESTURE_ATTRACTION: f32 = 0.1;
pub const PULSE_BASE: f32 = 1.8;
pub const PULSE_AMPLITUDE: f32 = 0.2;
pub const PULSE_FREQUENCY: f32 = 10.0; // rad/s

// Orientation
pub const POINTER_ROTATION_RANGE: f32 = 1.0; // [0,1] pointer -> [-0.5,0.5] rad
pub const ROTATION_FOLLOW_RATE: f32 = 0.1;
pub const ROTATION_LIMIT: f32 = 0.8;
pub const IDLE_SWAY_Y_AMPLITUDE: f32 = 0.2;
pub const IDLE_SWAY_Y_FREQUENCY: f32 = 0.5;
pub const IDLE_SWAY_Z_AMPLITUDE: f32 = 0.05;
pub const IDLE_SWAY_Z_FREQUENCY: f32 = 0.3;
pub const IDLE_SWAY_RATE: f32 = 0.02;
pub const IDLE_RETURN_RATE: f32 = 0.05; // x rotation back to level

// Rasterized targets
pub const RASTER_STRIDE: u32 = 2;
pub const RASTER_THRESHOLD: u8 = 128; // red channel must exceed this
pub const RASTER_Z_JITTER: f32 = 0.5;

// Scene
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 15.0];
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const POINT_SIZE: f32 = 0.08; // world units, attenuated by distance
pub const POINT_OPACITY: f32 = 0.8;
pub const BACKGROUND_RGB: [f32; 3] = [0.02, 0.02, 0.02];

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(CAMERA_EYE[0], CAMERA_EYE[1], CAMERA_EYE[2])
}
