use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod error;
pub mod growth;
pub mod logging;
pub mod math;
pub mod render;
pub mod scene;
pub mod visual;

pub use config::ForestConfig;
pub use error::SceneError;
pub use growth::{resolve_features, FeatureSet, ForestStats, GrowthLevel};
pub use scene::{compose_scene, ComposeOptions, Scene, SceneElement};

use animation::EntranceLatch;
use visual::SceneSummary;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// Forest renderer exposed to JavaScript.
///
/// Holds the only state the host needs between frames: the entrance latch
/// and, when recency tracking is on, the last rendered tree count.
#[wasm_bindgen]
pub struct ForestRenderer {
    config: ForestConfig,
    entrance: EntranceLatch,
    track_recency: bool,
    last_tree_count: Option<u32>,
}

impl Default for ForestRenderer {
    fn default() -> Self {
        Self::with_forest_config(ForestConfig::default())
    }
}

impl ForestRenderer {
    pub fn with_forest_config(config: ForestConfig) -> Self {
        Self {
            config,
            entrance: EntranceLatch::new(),
            track_recency: false,
            last_tree_count: None,
        }
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Compose a frame, updating the remembered tree count when tracking
    pub fn compose(&mut self, raw_level: f64) -> error::Result<Scene> {
        let level = GrowthLevel::from_raw(raw_level)?;
        let options = ComposeOptions {
            entrance_played: self.entrance.has_played(),
            previous_tree_count: if self.track_recency { self.last_tree_count } else { None },
        };
        let scene = compose_scene(level, &options, &self.config);
        if self.track_recency {
            self.last_tree_count = Some(scene.features.tree_count);
        }
        Ok(scene)
    }

    pub fn compose_svg(&mut self, raw_level: f64) -> error::Result<String> {
        let scene = self.compose(raw_level)?;
        Ok(render::render_svg(&scene, &self.config))
    }

    pub fn compose_json(&mut self, raw_level: f64) -> error::Result<String> {
        let scene = self.compose(raw_level)?;
        Ok(serde_json::to_string(&scene)?)
    }

    pub fn stats(&self, raw_level: f64) -> error::Result<ForestStats> {
        let level = GrowthLevel::from_raw(raw_level)?;
        Ok(ForestStats::from_features(level, &resolve_features(level, &self.config)))
    }
}

#[wasm_bindgen]
impl ForestRenderer {
    /// Create a renderer with the default forest config
    #[wasm_bindgen(constructor)]
    pub fn new() -> ForestRenderer {
        Self::default()
    }

    /// Create a renderer from a YAML config
    #[wasm_bindgen]
    pub fn with_config(yaml: &str) -> Result<ForestRenderer, JsValue> {
        let config = ForestConfig::from_yaml(yaml).map_err(to_js)?;
        Ok(Self::with_forest_config(config))
    }

    /// Render the scene for a growth level as an SVG document
    #[wasm_bindgen]
    pub fn render_svg(&mut self, growth_level: f64) -> Result<String, JsValue> {
        self.compose_svg(growth_level).map_err(to_js)
    }

    /// Composed scene as JSON
    #[wasm_bindgen]
    pub fn scene_json(&mut self, growth_level: f64) -> Result<String, JsValue> {
        self.compose_json(growth_level).map_err(to_js)
    }

    /// Composed scene as a plain JavaScript object
    #[wasm_bindgen]
    pub fn scene_object(&mut self, growth_level: f64) -> Result<JsValue, JsValue> {
        let json = self.compose_json(growth_level).map_err(to_js)?;
        js_sys::JSON::parse(&json)
    }

    /// Dashboard stats as JSON
    #[wasm_bindgen]
    pub fn stats_json(&self, growth_level: f64) -> Result<String, JsValue> {
        let stats = self.stats(growth_level).map_err(to_js)?;
        serde_json::to_string(&stats).map_err(|e| to_js(e.into()))
    }

    /// Text report of the scene at a growth level
    #[wasm_bindgen]
    pub fn report(&self, growth_level: f64) -> Result<String, JsValue> {
        let level = GrowthLevel::from_raw(growth_level).map_err(to_js)?;
        let scene = compose_scene(level, &ComposeOptions::default(), &self.config);
        Ok(visual::generate_scene_report(&SceneSummary::from_scene(&scene)))
    }

    /// Record that the host has displayed a frame
    #[wasm_bindgen]
    pub fn mark_presented(&mut self) {
        self.entrance.mark_presented();
    }

    #[wasm_bindgen]
    pub fn has_presented(&self) -> bool {
        self.entrance.has_played()
    }

    /// Only flag the newest tree when the count grew since the last frame
    #[wasm_bindgen]
    pub fn track_recency(&mut self, enabled: bool) {
        self.track_recency = enabled;
        if !enabled {
            self.last_tree_count = None;
        }
    }
}

fn to_js(err: SceneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
