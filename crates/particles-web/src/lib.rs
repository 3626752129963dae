#![cfg(target_arch = "wasm32")]
//! Browser bridge. The host page owns the camera, the landmark model and the
//! 3D scene; it forwards detector results here, calls [`ParticleApp::frame`]
//! once per animation frame and uploads [`ParticleApp::positions`] when the
//! frame reports a change.

mod canvas;
mod detector;
mod results;

use canvas::CanvasRasterizer;
use detector::DetectorGuard;
use particles_core::{
    DetectorOptions, DetectorStatus, FrameClock, LandmarkFrame, ParticleSession, Pattern,
    Rasterizer, Rgb, SessionConfig, SoftwareRasterizer,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particles-web starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct ParticleApp {
    session: ParticleSession,
    clock: FrameClock,
    detector: Option<DetectorGuard>,
}

#[wasm_bindgen]
impl ParticleApp {
    /// `debounce_frames` of 0 or 1 leaves gestures unsmoothed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, debounce_frames: u32) -> Result<ParticleApp, JsValue> {
        let config = SessionConfig {
            seed: seed as u64,
            debounce_frames: debounce_frames as usize,
            ..SessionConfig::default()
        };
        let mut raster: Box<dyn Rasterizer> = match CanvasRasterizer::new() {
            Ok(canvas) => Box::new(canvas),
            Err(e) => {
                log::warn!("[web] {e}; drawing masks in software");
                Box::new(SoftwareRasterizer::new())
            }
        };
        Ok(ParticleApp {
            session: ParticleSession::new(config, raster.as_mut()).map_err(js_err)?,
            clock: FrameClock::new(),
            detector: None,
        })
    }

    /// Options to pass to the detector's `setOptions`.
    #[wasm_bindgen(js_name = detectorOptions)]
    pub fn detector_options() -> Result<JsValue, JsValue> {
        detector::options_to_js(&DetectorOptions::default())
    }

    /// Hand over the detector's teardown callback. Any previously attached
    /// detector is stopped first.
    #[wasm_bindgen(js_name = attachDetector)]
    pub fn attach_detector(&mut self, stop: js_sys::Function) {
        self.detector = Some(DetectorGuard::new(stop));
    }

    #[wasm_bindgen(js_name = releaseDetector)]
    pub fn release_detector(&mut self) {
        self.detector = None;
    }

    /// Feed one detector `results` object.
    #[wasm_bindgen(js_name = onResults)]
    pub fn on_results(&mut self, results: &JsValue) {
        let frame = results::frame_from_results(results);
        self.session.on_landmarks(&frame);
    }

    /// Feed `num_hands * 63` packed `x, y, z` floats.
    #[wasm_bindgen(js_name = onFlatLandmarks)]
    pub fn on_flat_landmarks(&mut self, flat: &[f32], num_hands: usize) {
        self.session
            .on_landmarks(&LandmarkFrame::from_flat(flat, num_hands));
    }

    #[wasm_bindgen(js_name = onDetectorError)]
    pub fn on_detector_error(&mut self, message: &str) {
        self.detector = None;
        self.session.on_detector_failure(message);
    }

    #[wasm_bindgen(js_name = setPattern)]
    pub fn set_pattern(&mut self, name: &str) -> Result<(), JsValue> {
        let pattern: Pattern = name.parse().map_err(js_err)?;
        self.session.set_pattern(pattern);
        Ok(())
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, hex: &str) -> Result<(), JsValue> {
        let color = Rgb::from_hex(hex).map_err(js_err)?;
        self.session.set_color(color);
        Ok(())
    }

    /// Advance one animation frame. Returns whether positions changed.
    pub fn frame(&mut self) -> Result<bool, JsValue> {
        let (elapsed, _dt) = self.clock.tick();
        self.session.tick(elapsed).map_err(js_err)?;
        Ok(self.session.take_dirty())
    }

    /// Copy of the `x, y, z` position buffer.
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.session.positions_flat())
    }

    /// Cloud orientation as `[x, y, z]` Euler angles in radians.
    pub fn rotation(&self) -> Vec<f32> {
        let r = self.session.rotation();
        vec![r.x, r.y, r.z]
    }

    #[wasm_bindgen(getter, js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.session.state().status_text()
    }

    #[wasm_bindgen(getter)]
    pub fn gesture(&self) -> String {
        self.session.state().gesture.name().to_string()
    }

    #[wasm_bindgen(getter, js_name = handDetected)]
    pub fn hand_detected(&self) -> bool {
        self.session.state().hand_detected
    }

    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> String {
        self.session.state().pattern.name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.session.state().color.to_hex()
    }

    /// Whether the detector has delivered at least one result.
    #[wasm_bindgen(getter)]
    pub fn loaded(&self) -> bool {
        self.session.state().detector == DetectorStatus::Ready
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.session.animator().len()
    }
}
