//! Vertex types for 2D chart rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in canvas coordinates with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map canvas coordinates (y down) to clip space (y up, [-1, 1])
    pub fn to_clip_space(self, canvas_size: f32) -> Self {
        let [x, y] = self.position;
        Self {
            position: [x / canvas_size * 2.0 - 1.0, 1.0 - y / canvas_size * 2.0],
            color: self.color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for chart elements that do not come from an area
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GRID: [f32; 4] = [0.53, 0.53, 0.53, 0.5];
    pub const DIVIDER: [f32; 4] = [0.53, 0.53, 0.53, 0.5];
    /// Alpha of slice fills; the outline stays opaque
    pub const FILL_ALPHA: f32 = 0.55;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
        let vertex = Vertex::new(1.0, 2.0, colors::GRID);
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_clip_space_corners() {
        let c = [0.0; 4];
        assert_eq!(Vertex::new(0.0, 0.0, c).to_clip_space(600.0).position, [-1.0, 1.0]);
        assert_eq!(Vertex::new(600.0, 600.0, c).to_clip_space(600.0).position, [1.0, -1.0]);
        assert_eq!(Vertex::new(300.0, 300.0, c).to_clip_space(600.0).position, [0.0, 0.0]);
    }
}
