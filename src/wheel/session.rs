//! A wheel together with everything needed to draw and export it
//!
//! This is the handle a shell (browser, CLI) holds. Every mutating call
//! returns what changed so the shell can decide whether to re-render;
//! `scene()` always reflects the current state.

use glam::Vec2;

use super::area::{AreaId, Color};
use super::interaction::{self, Interaction, InteractionResult, ScoreCommand};
use super::state::{Mutation, ScoreChange, WheelState};
use crate::coach::{
    self, ActionPlan, ActionPlanRequest, ActionPlanService, Suggestion, SuggestionRequest,
    SuggestionService,
};
use crate::error::{CoachResult, ExportResult};
use crate::export::{
    self, AreaSnapshot, ChartExport, DocumentSink, Rasterizer, ReportLayout, SvgStyle, render_svg,
};
use crate::geometry::{ChartScene, WheelGeometry};
use crate::i18n::{Catalog, Translator};
use crate::renderer::{self, ChartMesh};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct WheelSession {
    state: WheelState,
    settings: Settings,
    translator: Catalog,
}

impl WheelSession {
    /// Session around an existing state
    pub fn new(state: WheelState, settings: Settings, translator: Catalog) -> Self {
        Self {
            state,
            settings,
            translator,
        }
    }

    /// Fresh session with the default areas in the configured language
    pub fn seeded(seed: u64, settings: Settings) -> Self {
        let translator = Catalog::builtin(&settings.language);
        let state = WheelState::seeded(seed, &translator);
        Self::new(state, settings, translator)
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn translator(&self) -> &Catalog {
        &self.translator
    }

    pub fn language(&self) -> &str {
        self.translator.language()
    }

    /// Switch language for labels of future areas, reports and requests.
    ///
    /// Existing area names are user data and are not retranslated.
    pub fn set_language(&mut self, code: &str) -> bool {
        let switched = self.translator.set_language(code);
        if switched {
            self.settings.language = code.to_string();
            log::info!("Language switched to {}", code);
        }
        switched
    }

    /// Drawing frame at the current rotation
    pub fn geometry(&self) -> WheelGeometry {
        WheelGeometry::new(&self.settings, self.state.rotation_deg())
    }

    pub fn scene(&self) -> ChartScene {
        self.geometry().scene(self.state.areas())
    }

    /// Triangle mesh of the current scene, in canvas coordinates
    pub fn mesh(&self) -> ChartMesh {
        renderer::tessellate(&self.scene(), &self.settings)
    }

    // === Interaction ===

    pub fn handle(&mut self, input: &Interaction) -> InteractionResult {
        let geometry = self.geometry();
        interaction::apply(&mut self.state, &geometry, input)
    }

    /// Pointer press at a canvas position
    pub fn press(&mut self, point: Vec2) -> InteractionResult {
        self.handle(&Interaction::Press(point))
    }

    pub fn command(&mut self, area: &AreaId, command: ScoreCommand) -> InteractionResult {
        self.handle(&Interaction::Command {
            area: area.clone(),
            command,
        })
    }

    /// Turn the wheel by one slice; returns the new rotation in degrees
    pub fn rotate(&mut self) -> f32 {
        self.state.rotate()
    }

    // === Editing ===

    pub fn add_area(&mut self) -> AreaId {
        self.state.add_area(&self.translator)
    }

    pub fn remove_area(&mut self, id: &AreaId) -> Mutation {
        self.state.remove_area(id)
    }

    pub fn rename(&mut self, id: &AreaId, name: impl Into<String>) -> Mutation {
        self.state.rename(id, name)
    }

    pub fn recolor(&mut self, id: &AreaId, color: Color) -> Mutation {
        self.state.recolor(id, color)
    }

    pub fn change_score(&mut self, id: &AreaId, change: ScoreChange) -> Mutation {
        self.state.change_score(id, change)
    }

    // === Boundaries ===

    pub fn snapshot(&self) -> AreaSnapshot {
        AreaSnapshot::capture(&self.state)
    }

    pub fn suggestion_request(&self) -> SuggestionRequest {
        self.snapshot().suggestion_request(self.language())
    }

    pub fn action_plan_request(&self) -> ActionPlanRequest {
        self.snapshot().action_plan_request(self.language())
    }

    /// Ask the service for suggestions on the current areas.
    ///
    /// The request is a snapshot: the wheel is never modified by this call,
    /// whatever the outcome.
    pub async fn suggestions<S: SuggestionService>(
        &self,
        service: &S,
    ) -> CoachResult<Vec<Suggestion>> {
        coach::fetch_suggestions(service, self.suggestion_request(), &self.translator).await
    }

    pub async fn action_plans<S: ActionPlanService>(
        &self,
        service: &S,
    ) -> CoachResult<Vec<ActionPlan>> {
        coach::fetch_action_plans(service, self.action_plan_request()).await
    }

    /// Standalone SVG of the current chart
    pub fn export_svg(&self, style: &SvgStyle) -> String {
        render_svg(&self.scene(), style)
    }

    /// Everything an export collaborator needs
    pub fn chart_export(&self) -> ChartExport {
        let scene = self.scene();
        let snapshot = self.snapshot();
        ChartExport {
            svg: render_svg(&scene, &SvgStyle::print()),
            report: ReportLayout::build(
                &snapshot,
                &self.translator,
                self.settings.report_rows_per_page,
            ),
            scene,
            snapshot,
        }
    }

    /// Rasterize the chart at the configured size and write the document
    pub async fn export_document<R: Rasterizer, D: DocumentSink>(
        &self,
        rasterizer: &R,
        sink: &D,
    ) -> ExportResult<Vec<u8>> {
        export::export_document(
            &self.chart_export(),
            rasterizer,
            sink,
            self.settings.export_image_size,
        )
        .await
    }

    /// Translated user-facing message for a failed suggestion request
    pub fn suggestion_error_message(&self) -> String {
        self.translator.lookup("error.suggestions")
    }
}
