//! Pointer input translation
//!
//! Turns pointer events over the window surface into [`Intent`](crate::Intent)s.
//! Drag state lives here; window state stays in the engine.

mod drag;
mod router;
mod surface;

pub use drag::DragState;
pub use router::GestureRouter;
pub use surface::WindowSurface;

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Calculate new position and size after a resize drag.
///
/// Sizes are clamped to `min_size`. When a left or top edge hits the floor
/// the opposite edge stays put instead of the window sliding.
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
) -> (Vec2, Size) {
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if handle.moves_left_edge() {
        new_size.width = (start_size.width - delta.x).max(min_size.width);
        new_pos.x = start_pos.x + start_size.width - new_size.width;
    } else if handle.moves_right_edge() {
        new_size.width = (start_size.width + delta.x).max(min_size.width);
    }

    if handle.moves_top_edge() {
        new_size.height = (start_size.height - delta.y).max(min_size.height);
        new_pos.y = start_pos.y + start_size.height - new_size.height;
    } else if handle.moves_bottom_edge() {
        new_size.height = (start_size.height + delta.y).max(min_size.height);
    }

    (new_pos, new_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(200.0, 150.0);

    #[test]
    fn test_resize_south() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeS,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, 50.0),
            MIN,
        );
        assert!((pos.x - 100.0).abs() < 0.001);
        assert!((pos.y - 100.0).abs() < 0.001);
        assert!((size.width - 400.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeN,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, -50.0),
            MIN,
        );
        assert!((pos.y - 50.0).abs() < 0.001);
        assert!((size.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_west_clamped_anchors_right_edge() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeW,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(350.0, 0.0),
            MIN,
        );
        assert!((size.width - 200.0).abs() < 0.001);
        assert!((pos.x - 300.0).abs() < 0.001);
        assert!((pos.x + size.width - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_northwest_both_axes() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeNW,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(-20.0, -30.0),
            MIN,
        );
        assert!((pos.x - 80.0).abs() < 0.001);
        assert!((pos.y - 70.0).abs() < 0.001);
        assert!((size.width - 420.0).abs() < 0.001);
        assert!((size.height - 330.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_southeast_clamped() {
        let (pos, size) = calculate_resize(
            WindowRegion::ResizeSE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(-1000.0, -1000.0),
            MIN,
        );
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(size, MIN);
    }

    #[test]
    fn test_non_resize_region_is_identity() {
        let (pos, size) = calculate_resize(
            WindowRegion::TitleBar,
            Vec2::new(1.0, 2.0),
            Size::new(400.0, 300.0),
            Vec2::new(50.0, 50.0),
            MIN,
        );
        assert_eq!(pos, Vec2::new(1.0, 2.0));
        assert_eq!(size, Size::new(400.0, 300.0));
    }
}
