//! Browser bindings.
//!
//! [`WebBlochSphere`] wraps one [`BlochSphere`] for JavaScript hosts: the
//! page mounts it into a container element, forwards control events by name,
//! calls [`WebBlochSphere::tick`] from `requestAnimationFrame`, and reads the
//! flattened arrow, trace and marker buffers to draw them. Notices raised
//! during a tick are shown with `window.alert`.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use web_time::Instant;

use crate::engine::{BlochCommand, BlochSphere};
use crate::error::BlochError;
use crate::options::Options;
use crate::state::Gate;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&e.to_string().into());
    }
}

/// One Bloch sphere bound to a page element.
#[wasm_bindgen]
pub struct WebBlochSphere {
    engine: BlochSphere,
    canvas: Option<HtmlCanvasElement>,
}

#[wasm_bindgen]
impl WebBlochSphere {
    /// Sphere at rest. `options_toml` may override any option; malformed
    /// text is logged and defaults are used.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: u32, height: u32, options_toml: Option<String>) -> Self {
        let options = match options_toml.as_deref().map(Options::from_toml) {
            Some(Ok(options)) => options,
            Some(Err(e)) => {
                log::error!("{e}; using default options");
                Options::default()
            }
            None => Options::default(),
        };
        Self {
            engine: BlochSphere::new(options, (width, height)),
            canvas: None,
        }
    }

    /// Create a canvas inside the element with id `element_id`.
    ///
    /// Returns `false` and logs an error when the element does not exist.
    pub fn mount(&mut self, element_id: &str) -> bool {
        match self.try_mount(element_id) {
            Ok(canvas) => {
                self.canvas = Some(canvas);
                true
            }
            Err(e) => {
                log::error!("{e}");
                false
            }
        }
    }

    /// Resize the canvas and the camera viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(canvas) = &self.canvas {
            canvas.set_width(width);
            canvas.set_height(height);
        }
        self.engine.resize(width, height);
    }

    /// Advance one frame. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let changed = self.engine.tick(Instant::now());
        for notice in self.engine.drain_notices() {
            log::info!("{notice}");
            alert(&notice.to_string());
        }
        changed
    }

    /// Forward a named control event; see
    /// [`BlochCommand::from_control`]. Unknown controls are logged.
    pub fn control(&mut self, name: &str, value: f32) -> bool {
        match BlochCommand::from_control(name, value) {
            Ok(command) => self.engine.execute(command),
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Trigger a gate by name.
    pub fn gate(&mut self, name: &str) -> bool {
        match name.parse::<Gate>() {
            Ok(gate) => self.engine.apply_gate(gate),
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Start challenge mode by level name.
    pub fn start_challenge(&mut self, level: &str) {
        self.engine.start_challenge_named(level);
    }

    /// Add a marker by state key to the running challenge.
    pub fn place_marker(&mut self, key: &str) -> bool {
        self.engine.place_marker(key)
    }

    /// Return to the rest pose.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Whether gate buttons should be enabled.
    #[must_use]
    pub fn gate_controls_enabled(&self) -> bool {
        self.engine.gate_controls_enabled()
    }

    /// Arrow orientation as `[x, y, z, w]`.
    #[must_use]
    pub fn orientation(&self) -> Vec<f32> {
        self.engine.orientation().to_array().to_vec()
    }

    /// Group deformation as a column-major 4×4 matrix.
    #[must_use]
    pub fn deformation(&self) -> Vec<f32> {
        self.engine.deformation().matrix().to_cols_array().to_vec()
    }

    /// Trace points as `[x0, y0, z0, x1, ...]`, ready for a vertex buffer.
    #[must_use]
    pub fn trace(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.engine.trace().to_flat().as_slice())
    }

    /// Marker positions as `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn markers(&self) -> Vec<f32> {
        self.engine
            .challenge()
            .markers()
            .iter()
            .flat_map(|m| m.position.to_array())
            .collect()
    }

    /// Camera view-projection matrix, column-major.
    #[must_use]
    pub fn view_projection(&self) -> Vec<f32> {
        self.engine
            .scene()
            .camera
            .build_matrix()
            .to_cols_array()
            .to_vec()
    }

    /// JSON schema of the options as a JS object, for building a settings
    /// panel.
    #[must_use]
    pub fn options_schema() -> JsValue {
        serde_json::to_string(&Options::json_schema())
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::NULL)
    }
}

impl WebBlochSphere {
    fn try_mount(
        &self,
        element_id: &str,
    ) -> Result<HtmlCanvasElement, BlochError> {
        let mount_err = || BlochError::MountPoint(element_id.to_owned());
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(mount_err)?;
        let parent = document
            .get_element_by_id(element_id)
            .ok_or_else(mount_err)?;
        let canvas = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(mount_err)?;
        let viewport = self.engine.scene().viewport;
        canvas.set_width(viewport.width);
        canvas.set_height(viewport.height);
        let _ = parent.append_child(&canvas).map_err(|_| mount_err())?;
        Ok(canvas)
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("could not show alert: {message}");
        }
    }
}
