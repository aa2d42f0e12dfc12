/// meshview Web - WASM bindings for the viewer core
///
/// The page owns the WebGL context, the file picker and the DOM events. It
/// hands STL bytes and pointer input to [`WebViewer`] and reads back vertex
/// buffers and row-major matrices (upload with `transpose = true`).
use meshview_core::{
    matrix, ControlCommand, CpuSource, Modifiers, ViewerOptions, ViewerSession,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WebViewer {
    session: ViewerSession<CpuSource>,
}

#[wasm_bindgen]
impl WebViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebViewer {
        Self::with_options(ViewerOptions::default())
    }

    /// Create a viewer from a TOML options string
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options_toml(toml: &str) -> Result<WebViewer, JsValue> {
        let options = ViewerOptions::from_toml(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_options(options))
    }

    /// Decode binary STL bytes; on failure the current mesh stays on screen
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.session
            .load_bytes(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.resize(width, height);
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, x: f64, y: f64) {
        self.session.apply(ControlCommand::Press { x, y });
    }

    #[wasm_bindgen(js_name = dragMove)]
    pub fn drag_move(&mut self, x: f64, y: f64, shift: bool, ctrl: bool) {
        self.session.apply(ControlCommand::Move {
            x,
            y,
            modifiers: Modifiers { shift, ctrl },
        });
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) {
        self.session.apply(ControlCommand::Release);
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.session.apply(ControlCommand::Wheel { delta_y });
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    #[wasm_bindgen(js_name = setSpin)]
    pub fn set_spin(&mut self, enabled: bool) {
        self.session.set_spin(enabled);
    }

    /// Advance one frame; false when the canvas has no area yet
    pub fn update(&mut self) -> bool {
        self.session.update()
    }

    #[wasm_bindgen(js_name = modelViewMatrix)]
    pub fn model_view_matrix(&self) -> Vec<f32> {
        matrix::to_row_major(self.session.camera().model_view_matrix()).to_vec()
    }

    #[wasm_bindgen(js_name = projectionMatrix)]
    pub fn projection_matrix(&self) -> Vec<f32> {
        matrix::to_row_major(self.session.camera().projection_matrix()).to_vec()
    }

    pub fn points(&self) -> Vec<f32> {
        self.session.drawable().mesh().points().to_vec()
    }

    pub fn normals(&self) -> Vec<f32> {
        self.session.drawable().mesh().normals().to_vec()
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.session.drawable().mesh().vertex_count()
    }
}

impl WebViewer {
    pub fn with_options(options: ViewerOptions) -> WebViewer {
        let session = match ViewerSession::new(CpuSource, options) {
            Ok(session) => session,
            Err(never) => match never {},
        };
        WebViewer { session }
    }
}

impl Default for WebViewer {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}
