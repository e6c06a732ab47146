//! Wheel geometry and scene building
//!
//! Slice 0 starts at 12 o'clock and slices proceed clockwise. Every
//! primitive is emitted in absolute canvas coordinates with the wheel
//! rotation already applied, so consumers never rotate anything themselves
//! and label text stays upright.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::path::Path;
use super::sector::SliceSector;
use crate::consts::MAX_SCORE;
use crate::polar_to_cartesian;
use crate::settings::Settings;
use crate::wheel::{AreaId, Color, LifeArea};

/// Fixed drawing frame of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    pub canvas_size: f32,
    pub center: Vec2,
    /// Radius of the outermost level ring (score 10)
    pub max_radius: f32,
    /// Radius of label anchors
    pub label_radius: f32,
    pub levels: u8,
    /// Wheel rotation in degrees
    pub rotation_deg: f32,
}

/// Outline of one scored slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceOutline {
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    /// Empty when the score is 0
    pub path: Path,
}

impl SliceOutline {
    pub fn sector(&self) -> SliceSector {
        SliceSector::wedge(self.radius, self.start_angle, self.end_angle)
    }
}

/// Reference circle for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCircle {
    pub level: u8,
    pub center: Vec2,
    pub radius: f32,
}

/// Radial line on a slice boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    pub from: Vec2,
    pub to: Vec2,
}

/// Filled wedge for one area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicePrimitive {
    pub area_id: AreaId,
    pub index: usize,
    pub score: u8,
    /// Used for both fill and stroke
    pub color: Color,
    #[serde(flatten)]
    pub outline: SliceOutline,
}

/// Area name placed outside the wheel, centered on its anchor.
///
/// Text is always drawn upright; only the anchor orbits with rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub area_id: AreaId,
    pub index: usize,
    pub text: String,
    pub anchor: Vec2,
    /// Bisecting angle of the slice (radians, rotation included)
    pub angle: f32,
}

/// Everything needed to draw the wheel, serializable for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub canvas_size: f32,
    pub center: Vec2,
    pub max_radius: f32,
    pub rotation_deg: f32,
    pub grid: Vec<GridCircle>,
    pub dividers: Vec<Divider>,
    pub slices: Vec<SlicePrimitive>,
    pub labels: Vec<Label>,
}

impl ChartScene {
    /// Scene with no primitives (used for an empty area list)
    pub fn empty(geometry: &WheelGeometry) -> Self {
        Self {
            canvas_size: geometry.canvas_size,
            center: geometry.center,
            max_radius: geometry.max_radius,
            rotation_deg: geometry.rotation_deg,
            grid: Vec::new(),
            dividers: Vec::new(),
            slices: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    pub fn primitive_count(&self) -> usize {
        self.grid.len() + self.dividers.len() + self.slices.len() + self.labels.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl WheelGeometry {
    pub fn new(settings: &Settings, rotation_deg: f32) -> Self {
        Self {
            canvas_size: settings.canvas_size,
            center: settings.center(),
            max_radius: settings.max_radius(),
            label_radius: settings.label_radius(),
            levels: settings.levels,
            rotation_deg,
        }
    }

    /// Same frame, different rotation
    pub fn with_rotation(mut self, rotation_deg: f32) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Angular width of every slice; callers must rule out `total == 0`
    #[inline]
    pub fn slice_angle(total: usize) -> f32 {
        TAU / total as f32
    }

    /// Angle of boundary `k` (slice `k` starts here, slice `k - 1` ends here)
    #[inline]
    pub fn boundary_angle(&self, k: usize, total: usize) -> f32 {
        k as f32 * Self::slice_angle(total) - FRAC_PI_2 + self.rotation_deg.to_radians()
    }

    /// Radius drawn for a score
    #[inline]
    pub fn score_radius(&self, score: u8) -> f32 {
        score.min(MAX_SCORE) as f32 * self.max_radius / MAX_SCORE as f32
    }

    /// Radius of grid level `level`
    #[inline]
    pub fn level_radius(&self, level: u8) -> f32 {
        level as f32 * self.max_radius / self.levels as f32
    }

    /// Full-height sector of slice `index`
    pub fn sector(&self, index: usize, total: usize) -> SliceSector {
        SliceSector::wedge(
            self.max_radius,
            self.boundary_angle(index, total),
            self.boundary_angle(index + 1, total),
        )
    }

    /// Canvas position of a wheel-local polar coordinate
    #[inline]
    pub fn point(&self, r: f32, theta: f32) -> Vec2 {
        self.center + polar_to_cartesian(r, theta)
    }

    /// Closed wedge outline for a slice with the given score
    pub fn slice_outline(&self, index: usize, score: u8, total: usize) -> SliceOutline {
        if total == 0 {
            return SliceOutline {
                radius: 0.0,
                start_angle: 0.0,
                end_angle: 0.0,
                path: Path::new(),
            };
        }

        let radius = self.score_radius(score);
        let sector = SliceSector::wedge(
            radius,
            self.boundary_angle(index, total),
            self.boundary_angle(index + 1, total),
        );

        let path = if score == 0 {
            Path::new()
        } else if total == 1 {
            // An arc with coincident endpoints draws nothing; use two halves
            let half = polar_to_cartesian(radius, sector.mid_angle());
            Path::new()
                .move_to(self.center)
                .line_to(self.center + sector.outer_start())
                .arc_to(radius, false, self.center + half)
                .arc_to(radius, false, self.center + sector.outer_end())
                .close()
        } else {
            let large_arc = sector.angular_span() > std::f32::consts::PI;
            Path::new()
                .move_to(self.center)
                .line_to(self.center + sector.outer_start())
                .arc_to(radius, large_arc, self.center + sector.outer_end())
                .close()
        };

        SliceOutline {
            radius,
            start_angle: sector.start_angle,
            end_angle: sector.end_angle,
            path,
        }
    }

    /// One circle per level, innermost first
    pub fn grid_circles(&self) -> Vec<GridCircle> {
        (1..=self.levels)
            .map(|level| GridCircle {
                level,
                center: self.center,
                radius: self.level_radius(level),
            })
            .collect()
    }

    /// One divider per slice boundary
    pub fn dividers(&self, total: usize) -> Vec<Divider> {
        (0..total)
            .map(|k| Divider {
                from: self.center,
                to: self.point(self.max_radius, self.boundary_angle(k, total)),
            })
            .collect()
    }

    /// Label anchor on the bisector of slice `index`
    pub fn label_anchor(&self, index: usize, total: usize) -> (Vec2, f32) {
        let angle = self.sector(index, total).mid_angle();
        (self.point(self.label_radius, angle), angle)
    }

    /// Build every primitive for the given areas
    pub fn scene(&self, areas: &[LifeArea]) -> ChartScene {
        let total = areas.len();
        if total == 0 {
            return ChartScene::empty(self);
        }

        let slices = areas
            .iter()
            .enumerate()
            .map(|(index, area)| SlicePrimitive {
                area_id: area.id.clone(),
                index,
                score: area.score,
                color: area.color.clone(),
                outline: self.slice_outline(index, area.score, total),
            })
            .collect();

        let labels = areas
            .iter()
            .enumerate()
            .map(|(index, area)| {
                let (anchor, angle) = self.label_anchor(index, total);
                Label {
                    area_id: area.id.clone(),
                    index,
                    text: area.name.clone(),
                    anchor,
                    angle,
                }
            })
            .collect();

        ChartScene {
            canvas_size: self.canvas_size,
            center: self.center,
            max_radius: self.max_radius,
            rotation_deg: self.rotation_deg,
            grid: self.grid_circles(),
            dividers: self.dividers(total),
            slices,
            labels,
        }
    }
}
