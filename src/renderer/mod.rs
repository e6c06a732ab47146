//! Chart tessellation
//!
//! Turns a `ChartScene` into a triangle list ready for a wgpu vertex
//! buffer (see `Vertex::desc`). Labels are not tessellated; text is left
//! to the shell's text renderer at the anchors the scene provides.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{ChartRenderer, Viewport};
pub use vertex::{Vertex, colors};

use crate::geometry::{ChartScene, SliceSector};
use crate::settings::Settings;

/// Line width of grid circles and dividers, in canvas units
const GRID_LINE_WIDTH: f32 = 1.0;
/// Width of the opaque slice outline
const OUTLINE_WIDTH: f32 = 1.5;

/// Triangle list for one frame, in canvas coordinates
#[derive(Debug, Clone, Default)]
pub struct ChartMesh {
    pub vertices: Vec<Vertex>,
    /// Vertex counts per layer (background grid, slices)
    pub grid_vertices: usize,
    pub slice_vertices: usize,
}

impl ChartMesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Copy of the mesh mapped to clip space
    pub fn to_clip_space(&self, canvas_size: f32) -> Vec<Vertex> {
        self.vertices
            .iter()
            .map(|v| v.to_clip_space(canvas_size))
            .collect()
    }
}

/// Tessellate every slice, grid circle and divider of the scene.
///
/// Slices are drawn over the grid, in area order.
pub fn tessellate(scene: &ChartScene, settings: &Settings) -> ChartMesh {
    let density = settings.arc_segments_per_radian;
    let mut mesh = ChartMesh::default();

    for circle in &scene.grid {
        mesh.vertices.extend(shapes::ring(
            circle.center,
            circle.radius,
            GRID_LINE_WIDTH,
            colors::GRID,
            density,
        ));
    }
    for divider in &scene.dividers {
        mesh.vertices
            .extend(shapes::line(divider.from, divider.to, GRID_LINE_WIDTH, colors::DIVIDER));
    }
    mesh.grid_vertices = mesh.vertices.len();

    for slice in &scene.slices {
        if slice.outline.path.is_empty() {
            continue;
        }
        let wedge = slice.outline.sector();
        mesh.vertices.extend(shapes::sector(
            scene.center,
            &wedge,
            slice.color.rgba_or_fallback(colors::FILL_ALPHA),
            density,
        ));

        let rim = SliceSector::new(
            (wedge.outer_radius - OUTLINE_WIDTH).max(0.0),
            wedge.outer_radius,
            wedge.start_angle,
            wedge.end_angle,
        );
        mesh.vertices.extend(shapes::sector(
            scene.center,
            &rim,
            slice.color.rgba_or_fallback(1.0),
            density,
        ));
    }
    mesh.slice_vertices = mesh.vertices.len() - mesh.grid_vertices;

    log::trace!(
        "Tessellated scene: {} grid + {} slice vertices",
        mesh.grid_vertices,
        mesh.slice_vertices
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WheelGeometry;
    use crate::wheel::{AreaId, Color, LifeArea};

    fn scene(scores: &[i32]) -> ChartScene {
        let areas: Vec<LifeArea> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| {
                LifeArea::new(AreaId::new(format!("a{i}")), "Area", *s, Color::from("#FF6384"))
            })
            .collect();
        WheelGeometry::new(&Settings::default(), 0.0).scene(&areas)
    }

    #[test]
    fn test_empty_scene_has_no_vertices() {
        let mesh = tessellate(&scene(&[]), &Settings::default());
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_zero_score_draws_no_slice() {
        let settings = Settings::default();
        let with_zero = tessellate(&scene(&[0, 0]), &settings);
        assert_eq!(with_zero.slice_vertices, 0);
        assert!(with_zero.grid_vertices > 0);

        let scored = tessellate(&scene(&[5, 0]), &settings);
        assert!(scored.slice_vertices > 0);
        assert_eq!(scored.grid_vertices, with_zero.grid_vertices);
    }

    #[test]
    fn test_slice_vertices_within_score_radius() {
        let s = scene(&[5, 10, 3]);
        let mesh = tessellate(&s, &Settings::default());
        for v in &mesh.vertices[mesh.grid_vertices..] {
            let r = (glam::Vec2::from(v.position) - s.center).length();
            assert!(r <= s.max_radius + 1e-3);
        }
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
