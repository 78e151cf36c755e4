//! Window region for hit testing

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Panel body
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
    /// North (top) resize edge
    ResizeN,
    /// South (bottom) resize edge
    ResizeS,
    /// East (right) resize edge
    ResizeE,
    /// West (left) resize edge
    ResizeW,
    /// Northeast corner
    ResizeNE,
    /// Northwest corner
    ResizeNW,
    /// Southeast corner
    ResizeSE,
    /// Southwest corner
    ResizeSW,
}

impl WindowRegion {
    /// Parse a compass direction ("n", "se", ...) into a resize region
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(WindowRegion::ResizeN),
            "s" => Some(WindowRegion::ResizeS),
            "e" => Some(WindowRegion::ResizeE),
            "w" => Some(WindowRegion::ResizeW),
            "ne" => Some(WindowRegion::ResizeNE),
            "nw" => Some(WindowRegion::ResizeNW),
            "se" => Some(WindowRegion::ResizeSE),
            "sw" => Some(WindowRegion::ResizeSW),
            _ => None,
        }
    }

    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeN
                | WindowRegion::ResizeS
                | WindowRegion::ResizeE
                | WindowRegion::ResizeW
                | WindowRegion::ResizeNE
                | WindowRegion::ResizeNW
                | WindowRegion::ResizeSE
                | WindowRegion::ResizeSW
        )
    }

    /// Dragging this handle moves the left edge
    #[inline]
    pub fn moves_left_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeW | WindowRegion::ResizeNW | WindowRegion::ResizeSW)
    }

    /// Dragging this handle moves the top edge
    #[inline]
    pub fn moves_top_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeN | WindowRegion::ResizeNE | WindowRegion::ResizeNW)
    }

    /// Dragging this handle moves the right edge
    #[inline]
    pub fn moves_right_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE)
    }

    /// Dragging this handle moves the bottom edge
    #[inline]
    pub fn moves_bottom_edge(&self) -> bool {
        matches!(self, WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::ResizeN | WindowRegion::ResizeS => "ns-resize",
            WindowRegion::ResizeE | WindowRegion::ResizeW => "ew-resize",
            WindowRegion::ResizeNE | WindowRegion::ResizeSW => "nesw-resize",
            WindowRegion::ResizeNW | WindowRegion::ResizeSE => "nwse-resize",
        }
    }
}
