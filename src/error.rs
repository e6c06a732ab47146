//! Error types
//!
//! Only boundary operations fail: loading settings, talking to the
//! suggestion service and handing charts to an export collaborator.
//! Score and area mutations never fail; see `wheel::Mutation`.

use thiserror::Error;

/// Settings could not be loaded or are unusable
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Failure talking to the suggestion / action-plan service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    /// The service call failed; carries the user-facing message
    #[error("{0}")]
    Service(String),

    /// A prompt template could not be rendered
    #[error("prompt rendering failed: {0}")]
    Prompt(String),

    /// The model answered with something that is not the expected JSON
    #[error("malformed service response: {0}")]
    MalformedResponse(String),
}

impl CoachError {
    /// Human-readable message for display in the shell
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Failure preparing or handing off an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing to export: the wheel has no areas")]
    EmptyChart,

    #[error("rasterization failed: {0}")]
    Raster(String),
}

/// The GPU surface or device could not be set up or drawn to
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),

    #[error("failed to create GPU device: {0}")]
    Device(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),
}

pub type CoachResult<T> = Result<T, CoachError>;
pub type ExportResult<T> = Result<T, ExportError>;
pub type RenderResult<T> = Result<T, RenderError>;
