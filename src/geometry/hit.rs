//! Hit testing pointer positions against the wheel
//!
//! The tricky part of the interaction model: mapping a canvas point back to
//! a slice and a radial band while the wheel is rotated by an arbitrary
//! angle and sliced into an arbitrary number of wedges.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::chart::WheelGeometry;
use crate::cartesian_to_polar;
use crate::wheel::{AreaId, LifeArea};

/// Which part of a slice was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceRegion {
    /// Inside the colored wedge (r <= score radius)
    Filled,
    /// Between the colored wedge and the outer ring
    Unfilled,
}

/// Result of a successful hit test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceHit {
    pub index: usize,
    pub area_id: AreaId,
    pub region: SliceRegion,
    /// Level band under the pointer (1..=levels)
    pub level: u8,
    /// Distance from the wheel center
    pub radius: f32,
}

/// Slice index under a wheel-local angle, rotation included
pub fn slice_index_at(geometry: &WheelGeometry, theta: f32, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let offset = (theta - geometry.boundary_angle(0, total)).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU
    let index = ((offset / WheelGeometry::slice_angle(total)) as usize).min(total - 1);
    // Division can round a point just past a boundary back into the previous slice
    if index + 1 < total && !geometry.sector(index, total).contains_angle(theta) {
        return Some(index + 1);
    }
    Some(index)
}

/// Level band for a distance from the center (None outside the wheel)
pub fn level_at(geometry: &WheelGeometry, radius: f32) -> Option<u8> {
    if radius > geometry.max_radius || geometry.levels == 0 {
        return None;
    }
    let level = (radius * geometry.levels as f32 / geometry.max_radius).ceil() as u8;
    Some(level.clamp(1, geometry.levels))
}

/// Map a canvas point to the slice and region beneath it
pub fn hit_test(geometry: &WheelGeometry, areas: &[LifeArea], point: Vec2) -> Option<SliceHit> {
    if !point.is_finite() {
        return None;
    }
    let total = areas.len();
    let local = point - geometry.center;
    let (radius, theta) = cartesian_to_polar(local);

    let level = level_at(geometry, radius)?;
    let index = slice_index_at(geometry, theta, total)?;
    let area = &areas[index];

    let region = if area.score > 0 && radius <= geometry.score_radius(area.score) {
        SliceRegion::Filled
    } else {
        SliceRegion::Unfilled
    };

    Some(SliceHit {
        index,
        area_id: area.id.clone(),
        region,
        level,
        radius,
    })
}
