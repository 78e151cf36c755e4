//! Viewport geometry supplied by the host page

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};

/// Size of the browser area the desktop renders into.
///
/// The host updates this whenever the page resizes; placement and maximize
/// read the current value at call time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Full viewport rectangle
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Area left for windows once the dock strip is reserved at the bottom
    pub fn work_area(&self, dock_height: f32) -> Rect {
        Rect::new(0.0, 0.0, self.width.max(0.0), (self.height - dock_height).max(0.0))
    }

    /// Top-left origin that centers `size` within the work area.
    ///
    /// Clamped to the origin so oversized windows keep their title bar reachable.
    pub fn centered(&self, size: Size, dock_height: f32) -> Vec2 {
        let area = self.work_area(dock_height);
        Vec2::new(
            (area.width - size.width) / 2.0,
            (area.height - size.height) / 2.0,
        )
        .max(Vec2::ZERO)
    }
}
