//! Window struct and state

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use crate::types::ZIndex;
use super::WindowId;

/// Visibility state of a window.
///
/// A single enum keeps minimized and maximized mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// One open panel in a workspace.
///
/// Windows are owned by their [`Workspace`](crate::Workspace) and only
/// mutated through [`WorkspaceManager`](crate::WorkspaceManager).
/// Focus is not stored here; a window is focused when it is its
/// workspace's active window.
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier, never reused
    pub id: WindowId,
    /// App type from the registry; fixed at creation
    pub app_id: String,
    /// Display title
    pub title: String,
    /// Top-left corner in viewport coordinates
    pub position: Vec2,
    /// Outer size including chrome
    pub size: Size,
    /// Resize floor for this window
    pub min_size: Size,
    /// Paint order (higher = on top)
    pub z_index: ZIndex,
    /// Current state
    pub state: WindowState,
    /// Embedded backing URL resolved for the workspace, if any
    pub url: Option<String>,
    /// Saved position/size for restore after maximize
    pub(crate) restore_rect: Option<(Vec2, Size)>,
    /// State to return to when un-minimized
    pub(crate) prev_state: Option<WindowState>,
    /// Start time of an in-flight restore animation
    pub(crate) animating_since: Option<f64>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    /// A restore animation is in flight for this window
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating_since.is_some()
    }

    /// Geometry the window returns to from maximized, if maximized
    #[inline]
    pub fn restore_rect(&self) -> Option<Rect> {
        self.restore_rect.map(|(pos, size)| Rect::from_pos_size(pos, size))
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        self.title_button_rect(0)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.title_button_rect(1)
    }

    /// Get the minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        self.title_button_rect(2)
    }

    /// Button `slot` counted from the right edge of the title bar
    fn title_button_rect(&self, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.position.y
            + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }
}
