//! 2D camera transform used to project particles onto a canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-to-screen transform: `screen = (world - offset) * zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera2D {
    /// World position that maps to the canvas origin.
    pub offset: Vec2,
    /// Screen pixels per world unit.
    pub zoom: f32,
}

impl Camera2D {
    /// Create a camera from an offset and zoom.
    pub fn new(offset_x: f32, offset_y: f32, zoom: f32) -> Self {
        Self {
            offset: Vec2::new(offset_x, offset_y),
            zoom,
        }
    }

    /// Camera that keeps `center` in the middle of a `viewport` sized canvas.
    pub fn centered_on(center: Vec2, zoom: f32, viewport: (u32, u32)) -> Self {
        let half = Vec2::new(viewport.0 as f32, viewport.1 as f32) * 0.5;
        Self {
            offset: center - half / zoom,
            zoom,
        }
    }

    /// Project a world position to screen space.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.offset) * self.zoom
    }

    /// Inverse of [`Camera2D::world_to_screen`].
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.offset
    }

    /// Whether `world` projects inside the viewport grown by `margin` pixels
    /// on every side.
    pub fn is_visible(&self, world: Vec2, margin: f32, viewport: (u32, u32)) -> bool {
        let s = self.world_to_screen(world);
        s.x >= -margin
            && s.x <= viewport.0 as f32 + margin
            && s.y >= -margin
            && s.y <= viewport.1 as f32 + margin
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
