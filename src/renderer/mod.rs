//! Frame rendering
//!
//! The projection math in `columns` draws through the [`Canvas`] trait.
//! [`VertexCanvas`] is the built-in implementation: it tessellates every
//! primitive into a triangle list a GPU host can upload as-is.

pub mod canvas;
pub mod columns;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Rect};
pub use columns::{draw_columns, draw_projectiles, render_frame, wall_height, wall_slice};
pub use vertex::{Vertex, colors};

use glam::Vec2;

/// Segments used to approximate a circle
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Canvas that records a triangle list in pixel coordinates
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub circle_segments: u32,
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: Vec::new(),
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for VertexCanvas {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn draw_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::rect(&rect, color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(center, radius, color, self.circle_segments));
    }
}
