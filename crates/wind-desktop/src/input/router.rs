//! Gesture router state machine

use crate::intent::Intent;
use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::{calculate_resize, DragState};

/// Tracks the drag in progress and turns pointer motion into intents
#[derive(Debug, Default)]
pub struct GestureRouter {
    drag: Option<DragState>,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_pointer,
        });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Intents for the pointer now being at `pointer`.
    ///
    /// A resize from the left or top edge moves the window too, so it yields
    /// a move followed by a resize.
    pub fn drag_to(&self, pointer: Vec2, min_size: Size) -> Vec<Intent> {
        match &self.drag {
            None => Vec::new(),
            Some(DragState::MoveWindow { window_id, offset }) => vec![Intent::Move {
                window_id: *window_id,
                position: pointer - *offset,
            }],
            Some(DragState::ResizeWindow {
                window_id,
                handle,
                start_pos,
                start_size,
                start_pointer,
            }) => {
                let delta = pointer - *start_pointer;
                let (position, size) =
                    calculate_resize(*handle, *start_pos, *start_size, delta, min_size);
                let mut intents = Vec::with_capacity(2);
                if handle.moves_left_edge() || handle.moves_top_edge() {
                    intents.push(Intent::Move {
                        window_id: *window_id,
                        position,
                    });
                }
                intents.push(Intent::Resize {
                    window_id: *window_id,
                    size,
                });
                intents
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(200.0, 150.0);

    #[test]
    fn test_router_idle() {
        let router = GestureRouter::new();
        assert!(!router.is_dragging());
        assert!(router.drag_to(Vec2::new(5.0, 5.0), MIN).is_empty());
    }

    #[test]
    fn test_router_move() {
        let mut router = GestureRouter::new();
        router.start_window_move(1, Vec2::new(10.0, 10.0));
        assert!(router.is_dragging());

        let intents = router.drag_to(Vec2::new(110.0, 60.0), MIN);
        assert_eq!(
            intents,
            vec![Intent::Move {
                window_id: 1,
                position: Vec2::new(100.0, 50.0)
            }]
        );

        router.end_drag();
        assert!(router.drag_state().is_none());
    }

    #[test]
    fn test_router_resize_east_only_resizes() {
        let mut router = GestureRouter::new();
        router.start_window_resize(
            2,
            WindowRegion::ResizeE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(500.0, 250.0),
        );

        let intents = router.drag_to(Vec2::new(560.0, 400.0), MIN);
        assert_eq!(
            intents,
            vec![Intent::Resize {
                window_id: 2,
                size: Size::new(460.0, 300.0)
            }]
        );
    }

    #[test]
    fn test_router_resize_west_moves_and_resizes() {
        let mut router = GestureRouter::new();
        router.start_window_resize(
            3,
            WindowRegion::ResizeW,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(100.0, 200.0),
        );

        let intents = router.drag_to(Vec2::new(60.0, 200.0), MIN);
        assert_eq!(intents.len(), 2);
        assert_eq!(
            intents[0],
            Intent::Move {
                window_id: 3,
                position: Vec2::new(60.0, 100.0)
            }
        );
        assert_eq!(
            intents[1],
            Intent::Resize {
                window_id: 3,
                size: Size::new(440.0, 300.0)
            }
        );
    }
}
