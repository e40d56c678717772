//! Drawing surface supplied by the host

use glam::Vec2;

/// Axis-aligned rectangle in pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The two primitives the frame is built from. Fire-and-forget: nothing is
/// read back.
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: [f32; 4]);

    fn draw_rect(&mut self, rect: Rect, color: [f32; 4]);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}
