//! Browser bindings
//!
//! Exposes a `LifeWheel` handle to JavaScript, and a `ChartCanvas` that
//! draws it through WebGPU. The page owns text rendering and the
//! language-model call; this side owns state, geometry and hit testing.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::coach::{
    self, Suggestion, SuggestionRequest, SuggestionService, parse_suggestions, suggestion_prompt,
};
use crate::error::{CoachError, CoachResult, RenderError};
use crate::export::{AreaSnapshot, SvgStyle};
use crate::i18n::Catalog;
use crate::renderer::ChartRenderer;
use crate::settings::Settings;
use crate::wheel::{AreaId, Color, ScoreCommand, WheelSession, WheelState};

const STORAGE_KEY: &str = "life_wheel_areas";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Life Wheel starting...");
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser language, e.g. "pt-BR"
fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Suggestion service backed by a JS function `(prompt: string) => Promise<string>`
struct JsSuggestionService {
    callback: js_sys::Function,
}

impl SuggestionService for JsSuggestionService {
    async fn suggest(&self, request: &SuggestionRequest) -> CoachResult<Vec<Suggestion>> {
        let prompt = suggestion_prompt(request)?;
        let returned = self
            .callback
            .call1(&JsValue::NULL, &JsValue::from_str(&prompt))
            .map_err(|e| CoachError::Service(describe(&e)))?;
        let answer = JsFuture::from(js_sys::Promise::resolve(&returned))
            .await
            .map_err(|e| CoachError::Service(describe(&e)))?;
        let text = answer.as_string().ok_or_else(|| {
            CoachError::MalformedResponse("service did not return a string".to_string())
        })?;
        parse_suggestions(&text)
    }
}

/// Message of a thrown JS value
fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

#[wasm_bindgen]
pub struct LifeWheel {
    session: WheelSession,
}

#[wasm_bindgen]
impl LifeWheel {
    /// Create a wheel, restoring saved areas when present.
    ///
    /// `settings_json` may be omitted. Unless it names a language, the
    /// browser's language is used when it is supported.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<LifeWheel, JsValue> {
        let explicit_language = settings_json.as_deref().and_then(Settings::explicit_language);
        let mut settings = match settings_json {
            Some(json) => Settings::from_json_str(&json).map_err(js_error)?,
            None => Settings::default(),
        };

        let mut catalog = Catalog::builtin(&settings.language);
        if explicit_language.is_none() {
            if let Some(tag) = browser_language() {
                if let Some(code) = catalog.match_language(&tag).map(str::to_string) {
                    catalog.set_language(&code);
                    settings.language = code;
                }
            }
        }

        let seed = js_sys::Date::now() as u64;
        let state = match Self::load_saved() {
            Some(snapshot) => {
                log::info!("Restored {} saved areas", snapshot.areas.len());
                snapshot.restore(seed)
            }
            None => WheelState::seeded(seed, &catalog),
        };
        Ok(LifeWheel {
            session: WheelSession::new(state, settings, catalog),
        })
    }

    fn load_saved() -> Option<AreaSnapshot> {
        let json = storage()?.get_item(STORAGE_KEY).ok()??;
        match AreaSnapshot::from_json(&json) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("Ignoring unreadable saved wheel: {}", e);
                None
            }
        }
    }

    /// Persist the current areas to LocalStorage
    pub fn save(&self) -> Result<(), JsValue> {
        let json = self.session.snapshot().to_json().map_err(js_error)?;
        if let Some(storage) = storage() {
            storage.set_item(STORAGE_KEY, &json)?;
            log::debug!("Wheel saved");
        }
        Ok(())
    }

    pub fn language(&self) -> String {
        self.session.language().to_string()
    }

    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&mut self, code: &str) -> bool {
        self.session.set_language(code)
    }

    /// Current chart primitives as JSON
    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.session.scene().to_json().map_err(js_error)
    }

    #[wasm_bindgen(js_name = areasJson)]
    pub fn areas_json(&self) -> Result<String, JsValue> {
        self.session.snapshot().to_json().map_err(js_error)
    }

    /// Press at canvas coordinates; returns whether to re-render
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.session.press(Vec2::new(x, y)).needs_render()
    }

    pub fn rotate(&mut self) -> f32 {
        self.session.rotate()
    }

    #[wasm_bindgen(js_name = addArea)]
    pub fn add_area(&mut self) -> String {
        self.session.add_area().to_string()
    }

    #[wasm_bindgen(js_name = removeArea)]
    pub fn remove_area(&mut self, id: &str) -> bool {
        self.session.remove_area(&AreaId::new(id)).is_change()
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        self.session.rename(&AreaId::new(id), name).is_change()
    }

    pub fn recolor(&mut self, id: &str, color: &str) -> bool {
        self.session
            .recolor(&AreaId::new(id), Color::from(color))
            .is_change()
    }

    #[wasm_bindgen(js_name = setScore)]
    pub fn set_score(&mut self, id: &str, score: i32) -> bool {
        self.session
            .command(&AreaId::new(id), ScoreCommand::Set(score))
            .needs_render()
    }

    pub fn increment(&mut self, id: &str) -> bool {
        self.session
            .command(&AreaId::new(id), ScoreCommand::Increment)
            .needs_render()
    }

    pub fn decrement(&mut self, id: &str) -> bool {
        self.session
            .command(&AreaId::new(id), ScoreCommand::Decrement)
            .needs_render()
    }

    /// Clip-space triangle list (`x, y, r, g, b, a` as f32) for a custom renderer
    #[wasm_bindgen(js_name = meshBytes)]
    pub fn mesh_bytes(&self) -> Vec<u8> {
        let vertices = self
            .session
            .mesh()
            .to_clip_space(self.session.settings().canvas_size);
        bytemuck::cast_slice(&vertices).to_vec()
    }

    #[wasm_bindgen(js_name = exportSvg)]
    pub fn export_svg(&self) -> String {
        self.session.export_svg(&SvgStyle::print())
    }

    #[wasm_bindgen(js_name = reportJson)]
    pub fn report_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.chart_export().report).map_err(js_error)
    }

    /// Request suggestions through `callback(prompt) -> Promise<string>`.
    ///
    /// Resolves to a JSON array of suggestions; rejects with the service's
    /// message. The wheel may keep changing while the promise is pending.
    pub fn suggestions(&self, callback: js_sys::Function) -> js_sys::Promise {
        let request = self.session.suggestion_request();
        let translator = self.session.translator().clone();
        let service = JsSuggestionService { callback };

        wasm_bindgen_futures::future_to_promise(async move {
            let suggestions = coach::fetch_suggestions(&service, request, &translator)
                .await
                .map_err(|e| JsValue::from_str(&e.message()))?;
            serde_json::to_string(&suggestions)
                .map(|json| JsValue::from_str(&json))
                .map_err(js_error)
        })
    }
}

/// WebGPU drawing surface for a `LifeWheel`
#[wasm_bindgen]
pub struct ChartCanvas {
    renderer: ChartRenderer,
}

#[wasm_bindgen]
impl ChartCanvas {
    /// Set up WebGPU on a canvas element
    pub async fn attach(canvas: web_sys::HtmlCanvasElement) -> Result<ChartCanvas, JsValue> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(js_error)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_error(RenderError::Adapter(e.to_string())))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = ChartRenderer::new(surface, &adapter, width, height)
            .await
            .map_err(js_error)?;
        Ok(ChartCanvas { renderer })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    /// Draw the wheel's current scene
    pub fn draw(&mut self, wheel: &LifeWheel) -> Result<(), JsValue> {
        let mesh = wheel.session.mesh();
        self.renderer
            .render(&mesh, wheel.session.settings().canvas_size)
            .map_err(js_error)
    }

    /// Press at a pixel position of this canvas; returns whether to redraw
    #[wasm_bindgen(js_name = pressAt)]
    pub fn press_at(&self, wheel: &mut LifeWheel, x: f32, y: f32) -> bool {
        let canvas_size = wheel.session.settings().canvas_size;
        let point = self.renderer.viewport().to_chart(x, y, canvas_size);
        wheel.session.press(point).needs_render()
    }
}
