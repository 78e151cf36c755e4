//! Drag state for pointer gestures

use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};

/// Current drag operation state
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
    },
    /// Resizing a window from an edge or corner
    ResizeWindow {
        window_id: WindowId,
        handle: WindowRegion,
        /// Window position at start
        start_pos: Vec2,
        /// Window size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Vec2,
    },
}

impl DragState {
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Window being dragged
    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } => *window_id,
            DragState::ResizeWindow { window_id, .. } => *window_id,
        }
    }
}
