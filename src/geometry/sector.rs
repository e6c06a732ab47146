//! Slice sector geometry
//!
//! In polar coordinates around the wheel center, a sector is defined by:
//! - inner_radius, outer_radius: radial extent (inner = 0 for a pie wedge)
//! - start_angle, end_angle: angular extent, clockwise on screen
//!
//! Angles are kept unnormalized so that neighbouring slices share their
//! boundary angle bit-for-bit.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// An annular wedge in wheel-local polar space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceSector {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Start angle (radians)
    pub start_angle: f32,
    /// End angle (radians), `start_angle <= end_angle <= start_angle + 2π`
    pub end_angle: f32,
}

impl SliceSector {
    pub fn new(inner_radius: f32, outer_radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
        }
    }

    /// Full wedge from the center out to `radius`
    pub fn wedge(radius: f32, start_angle: f32, end_angle: f32) -> Self {
        Self::new(0.0, radius, start_angle, end_angle)
    }

    /// Angular span of the sector
    #[inline]
    pub fn angular_span(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    /// Angle bisecting the sector
    #[inline]
    pub fn mid_angle(&self) -> f32 {
        self.start_angle + self.angular_span() / 2.0
    }

    /// Check if an angle falls in [start, end), any winding
    pub fn contains_angle(&self, theta: f32) -> bool {
        let span = self.angular_span();
        if span >= TAU {
            return true;
        }
        let offset = (theta - self.start_angle).rem_euclid(TAU);
        offset < span
    }

    /// Point on the outer edge at the start angle
    pub fn outer_start(&self) -> Vec2 {
        polar_to_cartesian(self.outer_radius, self.start_angle)
    }

    /// Point on the outer edge at the end angle
    pub fn outer_end(&self) -> Vec2 {
        polar_to_cartesian(self.outer_radius, self.end_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_contains_angle_any_winding() {
        // Top-right quarter, starting at 12 o'clock
        let sector = SliceSector::wedge(100.0, -FRAC_PI_2, 0.0);
        assert!(sector.contains_angle(-PI / 4.0));
        assert!(sector.contains_angle(-PI / 4.0 + TAU));
        assert!(sector.contains_angle(-FRAC_PI_2));
        assert!(!sector.contains_angle(0.0)); // end is exclusive
        assert!(!sector.contains_angle(PI / 4.0));
    }

    #[test]
    fn test_contains_angle_past_pi() {
        // Bottom-left quarter crosses the atan2 seam at ±π
        let sector = SliceSector::wedge(100.0, FRAC_PI_2 + 0.5, PI + 0.5);
        assert!(sector.contains_angle(PI));
        assert!(sector.contains_angle(-PI + 0.1));
        assert!(!sector.contains_angle(0.0));
    }

    #[test]
    fn test_full_turn_contains_everything() {
        let sector = SliceSector::wedge(50.0, -FRAC_PI_2, 3.0 * FRAC_PI_2);
        for i in 0..16 {
            assert!(sector.contains_angle(i as f32 * TAU / 16.0));
        }
    }

    #[test]
    fn test_span_and_edges() {
        let sector = SliceSector::wedge(10.0, 0.0, FRAC_PI_2);
        assert!((sector.angular_span() - FRAC_PI_2).abs() < 1e-6);
        assert!((sector.mid_angle() - PI / 4.0).abs() < 1e-6);
        assert!((sector.outer_start() - Vec2::new(10.0, 0.0)).length() < 1e-4);
        assert!((sector.outer_end() - Vec2::new(0.0, 10.0)).length() < 1e-4);
    }
}
