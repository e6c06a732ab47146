//! Chart settings and preferences
//!
//! Injected into the session rather than read from globals. Shells usually
//! ship them as JSON; missing fields fall back to defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_SIZE, LABEL_MARGIN, LABEL_PADDING, NUM_LEVELS};
use crate::error::SettingsError;

/// Chart settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Edge length of the square drawing canvas
    pub canvas_size: f32,
    /// Space kept free around the outer ring for labels
    pub label_padding: f32,
    /// Label anchor distance beyond the outer ring
    pub label_margin: f32,
    /// Number of radial levels drawn as grid circles
    pub levels: u8,

    // === Locale ===
    /// Active language code ("en", "pt")
    pub language: String,

    // === Export ===
    /// Tessellation density for curved edges
    pub arc_segments_per_radian: f32,
    /// Score table rows per report page
    pub report_rows_per_page: usize,
    /// Bitmap edge length requested from the rasterizer
    pub export_image_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            label_padding: LABEL_PADDING,
            label_margin: LABEL_MARGIN,
            levels: NUM_LEVELS,

            language: "en".to_string(),

            arc_segments_per_radian: 24.0,
            report_rows_per_page: 20,
            export_image_size: 1200,
        }
    }
}

/// Upper bound on tessellation density
pub const MAX_ARC_SEGMENTS_PER_RADIAN: f32 = 256.0;
/// Largest bitmap edge an export may request
pub const MAX_EXPORT_IMAGE_SIZE: u32 = 8192;

impl Settings {
    /// Language named in a settings document, if it names one
    pub fn explicit_language(json: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(json)
            .ok()?
            .get("language")?
            .as_str()
            .map(str::to_string)
    }

    /// Parse settings from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: canvas={}, levels={}, language={}",
            settings.canvas_size,
            settings.levels,
            settings.language
        );
        Ok(settings)
    }

    /// Serialize settings for the shell to store
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject settings the geometry cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.levels == 0 {
            return Err(SettingsError::Invalid {
                field: "levels",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(SettingsError::Invalid {
                field: "canvas_size",
                reason: format!("{} is not a positive size", self.canvas_size),
            });
        }
        if self.max_radius() <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "label_padding",
                reason: format!(
                    "{} leaves no room for the wheel on a {} canvas",
                    self.label_padding, self.canvas_size
                ),
            });
        }
        if !(self.arc_segments_per_radian > 0.0
            && self.arc_segments_per_radian <= MAX_ARC_SEGMENTS_PER_RADIAN)
        {
            return Err(SettingsError::Invalid {
                field: "arc_segments_per_radian",
                reason: format!(
                    "{} is outside (0, {}]",
                    self.arc_segments_per_radian, MAX_ARC_SEGMENTS_PER_RADIAN
                ),
            });
        }
        if self.export_image_size == 0 || self.export_image_size > MAX_EXPORT_IMAGE_SIZE {
            return Err(SettingsError::Invalid {
                field: "export_image_size",
                reason: format!("must be within 1..={}", MAX_EXPORT_IMAGE_SIZE),
            });
        }
        if self.report_rows_per_page == 0 {
            return Err(SettingsError::Invalid {
                field: "report_rows_per_page",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Canvas center point
    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.canvas_size / 2.0)
    }

    /// Radius of the outermost level ring
    pub fn max_radius(&self) -> f32 {
        self.canvas_size / 2.0 - self.label_padding
    }

    /// Radius at which slice labels are anchored
    pub fn label_radius(&self) -> f32 {
        self.max_radius() + self.label_margin
    }
}
