use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, WebGl2RenderingContext};

pub mod animation;
pub mod camera;
pub mod curve;
pub mod data;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;

use data::{LoadError, SceneConfig};
use render::RenderPipeline;
use scene::{KeyOutcome, SceneState};

const DEFAULT_CONTROL_POINTS: &str = include_str!("../assets/spline.txt");
const DEFAULT_MESH: &str = include_str!("../assets/object.obj");
const DEFAULT_CONFIG: &str = include_str!("../assets/scene.yaml");

/// Install the panic hook and route `log` output to the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();
}

fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;

    // A second call finds the logger already set
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn load_error(e: LoadError) -> JsValue {
    log::error!("{}", e);
    JsValue::from_str(&e.to_string())
}

/// Viewer state exposed to JavaScript
#[wasm_bindgen]
pub struct SplineFlight {
    scene: SceneState,
    pipeline: RenderPipeline,
    /// Timestamp of the previous tick, `None` until the first one
    last_timestamp: Option<f64>,
}

#[wasm_bindgen]
impl SplineFlight {
    /// Viewer over the bundled curve, mesh and settings
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<SplineFlight, JsValue> {
        Self::from_sources(canvas, DEFAULT_CONFIG, DEFAULT_CONTROL_POINTS, DEFAULT_MESH)
    }

    /// Viewer over caller-supplied text: YAML settings, control point
    /// lines and an OBJ mesh
    #[wasm_bindgen]
    pub fn from_sources(
        canvas: HtmlCanvasElement,
        config_yaml: &str,
        control_points: &str,
        mesh: &str,
    ) -> Result<SplineFlight, JsValue> {
        let config = SceneConfig::from_yaml(config_yaml).map_err(load_error)?;
        let scene = SceneState::from_sources(config, control_points, mesh).map_err(load_error)?;

        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let mut pipeline = RenderPipeline::new(gl, width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        pipeline.upload_curve(scene.curve()).map_err(|e| JsValue::from_str(&e))?;
        pipeline.upload_mesh(scene.mesh()).map_err(|e| JsValue::from_str(&e))?;
        pipeline.set_display(scene.display());

        Ok(Self {
            scene,
            pipeline,
            last_timestamp: None,
        })
    }

    /// Animation frame callback.
    ///
    /// Each call advances the flight by the time since the previous call,
    /// then redraws. The first call only draws.
    #[wasm_bindgen]
    pub fn tick(&mut self, timestamp_ms: f64) {
        if let Some(last) = self.last_timestamp {
            self.update((timestamp_ms - last) as f32);
        }
        self.last_timestamp = Some(timestamp_ms);
        self.render();
    }

    /// Advance the flight by `delta_ms` milliseconds without drawing
    #[wasm_bindgen]
    pub fn update(&mut self, delta_ms: f32) {
        self.scene.update(delta_ms);
    }

    /// Start the flight over from the beginning of the curve
    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.scene.restart();
    }

    #[wasm_bindgen]
    pub fn render(&self) {
        let projection = self.scene.projection_matrix(self.pipeline.aspect());
        self.pipeline.render(
            &self.scene.view_matrix(),
            &projection,
            &self.scene.object_transform(),
        );
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        self.pipeline.resize(width, height);
    }

    /// Apply one key press. Returns whether the key did anything.
    #[wasm_bindgen]
    pub fn on_key(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };

        match self.scene.handle_key(c) {
            KeyOutcome::Camera => true,
            KeyOutcome::Display => {
                self.pipeline.set_display(self.scene.display());
                true
            }
            KeyOutcome::Ignored => false,
        }
    }

    #[wasm_bindgen]
    pub fn on_keyboard_event(&mut self, event: KeyboardEvent) -> bool {
        self.on_key(&event.key())
    }

    #[wasm_bindgen]
    pub fn is_animation_done(&self) -> bool {
        self.scene.animation().is_done()
    }

    /// Continuous sample index the object is at
    #[wasm_bindgen]
    pub fn curve_position(&self) -> f32 {
        self.scene.animation().position()
    }

    #[wasm_bindgen]
    pub fn sample_count(&self) -> usize {
        self.scene.curve().len()
    }
}
