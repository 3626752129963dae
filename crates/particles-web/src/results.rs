use js_sys::{Array, Reflect};
use particles_core::{LandmarkFrame, LandmarkPoint, MAX_HANDS};
use wasm_bindgen::JsValue;

#[inline]
fn coord(point: &JsValue, key: &str) -> f32 {
    Reflect::get(point, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .map_or(f32::NAN, |v| v as f32)
}

/// Non-array entries parse as an empty hand, which the frame rejects.
fn parse_hand(hand: &JsValue) -> Vec<LandmarkPoint> {
    if !Array::is_array(hand) {
        return Vec::new();
    }
    Array::from(hand)
        .iter()
        .map(|p| LandmarkPoint::new(coord(&p, "x"), coord(&p, "y"), coord(&p, "z")))
        .collect()
}

/// Read `results.multiHandLandmarks` (array of arrays of `{x, y, z}`).
/// Missing or malformed data reads as no hand.
pub fn frame_from_results(results: &JsValue) -> LandmarkFrame {
    let hands = match Reflect::get(results, &JsValue::from_str("multiHandLandmarks")) {
        Ok(v) if Array::is_array(&v) => Array::from(&v),
        _ => return LandmarkFrame::empty(),
    };
    let raw: Vec<Vec<LandmarkPoint>> = hands
        .iter()
        .take(MAX_HANDS)
        .map(|hand| parse_hand(&hand))
        .collect();
    LandmarkFrame::from_raw(raw)
}
