use crate::constants::*;

/// Settings handed to the external hand-landmark detector.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorOptions {
    pub max_num_hands: usize,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub capture_width: u32,
    pub capture_height: u32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: MAX_HANDS,
            model_complexity: MODEL_COMPLEXITY,
            min_detection_confidence: MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: MIN_TRACKING_CONFIDENCE,
            capture_width: CAPTURE_WIDTH,
            capture_height: CAPTURE_HEIGHT,
        }
    }
}
