//! Lifetime of the JS-side hand detector.

use js_sys::{Function, Object, Reflect};
use particles_core::DetectorOptions;
use wasm_bindgen::JsValue;

/// Owns the detector's teardown callback. Dropping the guard stops the
/// camera stream and closes the inference session, whether the app is
/// released normally or setup bailed out halfway.
pub struct DetectorGuard {
    stop: Function,
}

impl DetectorGuard {
    pub fn new(stop: Function) -> Self {
        Self { stop }
    }
}

impl Drop for DetectorGuard {
    fn drop(&mut self) {
        match self.stop.call0(&JsValue::NULL) {
            Ok(_) => log::info!("[detector] released"),
            Err(e) => log::warn!("[detector] stop callback failed: {e:?}"),
        }
    }
}

/// Options object in the shape the JS detector expects.
pub fn options_to_js(opts: &DetectorOptions) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    let set = |key: &str, value: JsValue| Reflect::set(&obj, &JsValue::from_str(key), &value);
    set("maxNumHands", JsValue::from(opts.max_num_hands as u32))?;
    set("modelComplexity", JsValue::from(opts.model_complexity))?;
    set(
        "minDetectionConfidence",
        JsValue::from(opts.min_detection_confidence),
    )?;
    set(
        "minTrackingConfidence",
        JsValue::from(opts.min_tracking_confidence),
    )?;
    set("captureWidth", JsValue::from(opts.capture_width))?;
    set("captureHeight", JsValue::from(opts.capture_height))?;
    Ok(obj.into())
}
