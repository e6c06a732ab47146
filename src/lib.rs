//! Life Wheel - a "wheel of life" self-assessment chart
//!
//! Core modules:
//! - `wheel`: Area list, rotation and score interaction (the mutable state)
//! - `geometry`: Pure radial chart geometry (slices, grid, labels, hit testing)
//! - `renderer`: Tessellation of chart primitives into GPU vertices
//! - `export`: Snapshots, SVG documents and paginated score reports
//! - `coach`: Boundary with the external suggestion service
//! - `i18n`: Injected translation lookup
//! - `settings`: Chart and export configuration

pub mod coach;
pub mod error;
pub mod export;
pub mod geometry;
pub mod i18n;
pub mod renderer;
pub mod settings;
pub mod wheel;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{CoachError, ExportError, SettingsError};
pub use geometry::{ChartScene, WheelGeometry};
pub use i18n::{Catalog, Translator};
pub use settings::Settings;
pub use wheel::{LifeArea, WheelSession, WheelState};

use glam::Vec2;

/// Chart configuration constants
pub mod consts {
    /// Lowest score an area can hold
    pub const MIN_SCORE: u8 = 0;
    /// Highest score an area can hold
    pub const MAX_SCORE: u8 = 10;
    /// Score given to newly added areas
    pub const DEFAULT_SCORE: u8 = 5;

    /// Number of radial bands (one per score step)
    pub const NUM_LEVELS: u8 = 10;

    /// Square canvas edge length in chart units
    pub const CANVAS_SIZE: f32 = 600.0;
    /// Space reserved between the outermost ring and the canvas edge
    pub const LABEL_PADDING: f32 = 60.0;
    /// Distance of label anchors beyond the outermost ring
    pub const LABEL_MARGIN: f32 = 30.0;
}

/// Convert polar (r, theta) to cartesian (x, y) around the origin.
///
/// Screen convention: +y points down, so increasing theta runs clockwise.
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_polar_round_trip() {
        let p = polar_to_cartesian(120.0, -FRAC_PI_2);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y + 120.0).abs() < 1e-4);

        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 120.0).abs() < 1e-4);
        assert!((theta + FRAC_PI_2).abs() < 1e-5);
    }
}
