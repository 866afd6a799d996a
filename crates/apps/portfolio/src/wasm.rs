use crate::{Portfolio, Scene, SessionConfig};
use folio_audio::{AudioCue, CueSink, TracingSink};
use folio_core::Key;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Forwards audio cues to a JavaScript callback as plain objects
struct JsCueSink {
    callback: js_sys::Function,
}

impl CueSink for JsCueSink {
    fn emit(&mut self, cue: AudioCue) -> folio_audio::Result<()> {
        let value = serde_wasm_bindgen::to_value(&cue)
            .map_err(|e| folio_audio::Error::Sink(e.to_string()))?;
        self.callback
            .call1(&JsValue::NULL, &value)
            .map(|_| ())
            .map_err(|e| folio_audio::Error::Sink(format!("{:?}", e)))
    }
}

fn sink(on_audio: Option<js_sys::Function>) -> Box<dyn CueSink> {
    match on_audio {
        Some(callback) => Box::new(JsCueSink { callback }),
        None => Box::new(TracingSink),
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

#[wasm_bindgen]
pub struct WasmPortfolio {
    inner: RefCell<Portfolio>,
}

#[wasm_bindgen]
impl WasmPortfolio {
    /// Session with the built-in scene
    ///
    /// # Arguments
    /// * `on_audio` - Called with every audio cue (`{ cue: "play", channel, volume }`, ...)
    #[wasm_bindgen(constructor)]
    pub fn new(on_audio: Option<js_sys::Function>) -> Self {
        Self {
            inner: RefCell::new(Portfolio::with_sink(
                Scene::portfolio(),
                SessionConfig::default(),
                sink(on_audio),
            )),
        }
    }

    /// Session with a scene given as `{ commands: [...] }`
    #[wasm_bindgen(js_name = fromScene)]
    pub fn from_scene(
        scene: JsValue,
        on_audio: Option<js_sys::Function>,
    ) -> Result<WasmPortfolio, JsValue> {
        let scene: Scene = serde_wasm_bindgen::from_value(scene)?;
        Ok(Self {
            inner: RefCell::new(Portfolio::with_sink(
                scene,
                SessionConfig::default(),
                sink(on_audio),
            )),
        })
    }

    /// Forward a `KeyboardEvent.code`; unknown codes are ignored
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.inner.borrow_mut().press(key);
        }
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.inner.borrow_mut().release(key);
        }
    }

    /// Window lost focus
    #[wasm_bindgen(js_name = blur)]
    pub fn blur(&self) {
        self.inner.borrow_mut().release_all();
    }

    /// Advance one frame and return its report
    ///
    /// # Arguments
    /// * `dt` - Seconds since the previous frame
    #[wasm_bindgen(js_name = frame)]
    pub fn frame(&self, dt: f32) -> Result<JsValue, JsValue> {
        let report = self.inner.borrow_mut().frame(dt);
        to_js(&report)
    }

    #[wasm_bindgen(js_name = finishLoading)]
    pub fn finish_loading(&self) {
        self.inner.borrow_mut().finish_loading();
    }

    #[wasm_bindgen(js_name = startExploring)]
    pub fn start_exploring(&self) {
        self.inner.borrow_mut().start_exploring();
    }

    #[wasm_bindgen(js_name = changeSection)]
    pub fn change_section(&self, section: &str) {
        self.inner.borrow_mut().change_section(section);
    }

    #[wasm_bindgen(js_name = clickHotspot)]
    pub fn click_hotspot(&self, id: &str) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .click_hotspot(id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = closeInfo)]
    pub fn close_info(&self) {
        self.inner.borrow_mut().close_info();
    }

    #[wasm_bindgen(js_name = toggleControls)]
    pub fn toggle_controls(&self) -> bool {
        self.inner.borrow_mut().toggle_controls()
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) -> bool {
        self.inner.borrow_mut().toggle_mute()
    }

    #[wasm_bindgen(js_name = setFollow)]
    pub fn set_follow(&self, enabled: bool) {
        self.inner.borrow_mut().set_follow(enabled);
    }

    #[wasm_bindgen(js_name = navigation)]
    pub fn navigation(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().navigation())
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().snapshot())
    }

    /// Camera position and orbit target as `[px, py, pz, tx, ty, tz]`
    #[wasm_bindgen(js_name = cameraPose)]
    pub fn camera_pose(&self) -> Vec<f32> {
        let portfolio = self.inner.borrow();
        let position = portfolio.rig().camera().position;
        let target = portfolio.rig().orbit_target();
        vec![position.x, position.y, position.z, target.x, target.y, target.z]
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_camera_pose_starts_at_home() {
        let portfolio = WasmPortfolio::new(None);
        assert_eq!(portfolio.camera_pose(), vec![0.0, 3.0, 10.0, 0.0, 0.0, 0.0]);
    }

    #[wasm_bindgen_test]
    fn test_key_codes_drive_avatar() {
        let portfolio = WasmPortfolio::new(None);
        portfolio.finish_loading();
        portfolio.key_down("KeyW");
        portfolio.key_down("F13");
        portfolio.frame(1.0 / 60.0).unwrap();
        portfolio.key_up("KeyW");

        let z = portfolio.inner.borrow().world().avatar_position().z;
        assert!((z + 0.15).abs() < 1e-6);
    }

    #[wasm_bindgen_test]
    fn test_unknown_hotspot_is_an_error() {
        let portfolio = WasmPortfolio::new(None);
        portfolio.finish_loading();
        assert!(portfolio.click_hotspot("nowhere").is_err());
    }
}
