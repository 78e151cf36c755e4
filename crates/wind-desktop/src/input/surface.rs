//! Window surface: pointer gestures over rendered windows

use crate::engine::{WindowView, WorkspaceManager};
use crate::intent::Intent;
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::{DragState, GestureRouter};

/// Projection of the active workspace's windows plus the drag in progress.
///
/// Holds no window state of its own. Every call reads the engine afresh, so
/// rendering is always derived from committed state.
#[derive(Debug, Default)]
pub struct WindowSurface {
    router: GestureRouter,
}

impl WindowSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible windows in paint order (lowest z first)
    pub fn render(&self, manager: &WorkspaceManager) -> Vec<WindowView> {
        manager
            .window_views()
            .into_iter()
            .filter(|view| !view.minimized)
            .collect()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.router.is_dragging()
    }

    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.router.drag_state()
    }

    /// CSS cursor for the pointer at `pos`
    pub fn cursor_at(&self, manager: &WorkspaceManager, pos: Vec2) -> &'static str {
        hit(manager, pos)
            .map(|(_, region)| region.cursor())
            .unwrap_or("default")
    }

    /// Pointer pressed at `pos`.
    ///
    /// Any press on a window focuses it; title bar and resize handles also
    /// start a drag unless the window is maximized.
    pub fn pointer_down(&mut self, manager: &WorkspaceManager, pos: Vec2) -> Vec<Intent> {
        self.router.end_drag();

        let Some((window_id, region)) = hit(manager, pos) else {
            return Vec::new();
        };
        let Some(window) = manager.window(window_id) else {
            return Vec::new();
        };

        match region {
            WindowRegion::CloseButton => vec![Intent::Close { window_id }],
            WindowRegion::MinimizeButton => vec![Intent::Minimize { window_id }],
            WindowRegion::MaximizeButton => vec![
                Intent::Focus { window_id },
                Intent::ToggleMaximize { window_id },
            ],
            WindowRegion::TitleBar => {
                if !window.is_maximized() {
                    self.router.start_window_move(window_id, pos - window.position);
                }
                vec![Intent::Focus { window_id }]
            }
            handle if handle.is_resize() => {
                if !window.is_maximized() {
                    self.router.start_window_resize(
                        window_id,
                        handle,
                        window.position,
                        window.size,
                        pos,
                    );
                }
                vec![Intent::Focus { window_id }]
            }
            _ => vec![Intent::Focus { window_id }],
        }
    }

    /// Double click on a title bar toggles maximize
    pub fn double_click(&mut self, manager: &WorkspaceManager, pos: Vec2) -> Vec<Intent> {
        match hit(manager, pos) {
            Some((window_id, WindowRegion::TitleBar)) => {
                self.router.end_drag();
                vec![Intent::ToggleMaximize { window_id }]
            }
            _ => Vec::new(),
        }
    }

    /// Pointer moved while possibly dragging.
    ///
    /// The drag is dropped if its window has gone away (closed, minimized or
    /// on another workspace).
    pub fn pointer_move(&mut self, manager: &WorkspaceManager, pos: Vec2) -> Vec<Intent> {
        let Some(window_id) = self.router.drag_state().map(DragState::window_id) else {
            return Vec::new();
        };
        let min_size = match manager.window(window_id) {
            Some(window) if !window.is_minimized() => {
                window.min_size.max(manager.config().min_window_size)
            }
            _ => {
                self.router.end_drag();
                return Vec::new();
            }
        };
        self.router.drag_to(pos, min_size)
    }

    pub fn pointer_up(&mut self) {
        self.router.end_drag();
    }
}

fn hit(manager: &WorkspaceManager, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
    manager.active_workspace()?.region_at(pos)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;
    use crate::math::{Size, FRAME_STYLE};
    use crate::window::OpenRequest;

    fn setup() -> (WorkspaceManager, WindowId) {
        let mut m = WorkspaceManager::default();
        let ws = m.create_workspace("Main");
        m.initialize_workspace(ws, HashMap::new()).unwrap();
        let id = m
            .open_window(
                OpenRequest::app("terminal")
                    .at(Vec2::new(100.0, 100.0))
                    .sized(Size::new(600.0, 400.0)),
            )
            .unwrap()
            .window_id;
        (m, id)
    }

    #[test]
    fn test_render_skips_minimized() {
        let (mut m, id) = setup();
        let surface = WindowSurface::new();
        assert_eq!(surface.render(&m).len(), 1);

        m.minimize_window(id).unwrap();
        assert!(surface.render(&m).is_empty());
    }

    #[test]
    fn test_title_drag_moves_window() {
        let (mut m, id) = setup();
        let mut surface = WindowSurface::new();

        let intents = surface.pointer_down(&m, Vec2::new(200.0, 110.0));
        assert_eq!(intents, vec![Intent::Focus { window_id: id }]);
        assert!(surface.is_dragging());

        let intents = surface.pointer_move(&m, Vec2::new(250.0, 160.0));
        m.dispatch_all(intents, 0.0).unwrap();
        assert_eq!(m.window(id).unwrap().position, Vec2::new(150.0, 150.0));

        surface.pointer_up();
        assert!(!surface.is_dragging());
        assert!(surface.pointer_move(&m, Vec2::new(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_corner_drag_resizes_with_clamp() {
        let (mut m, id) = setup();
        let mut surface = WindowSurface::new();

        surface.pointer_down(&m, Vec2::new(698.0, 498.0));
        assert!(surface.drag_state().is_some_and(DragState::is_resize));

        let intents = surface.pointer_move(&m, Vec2::new(0.0, 0.0));
        m.dispatch_all(intents, 0.0).unwrap();
        let window = m.window(id).unwrap();
        assert_eq!(window.size, Size::new(320.0, 200.0));
        assert_eq!(window.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_buttons() {
        let (m, id) = setup();
        let mut surface = WindowSurface::new();
        let window = m.window(id).unwrap();

        let close = window.close_button_rect();
        let center = |r: crate::math::Rect| Vec2::new(r.x + r.width / 2.0, r.y + r.height / 2.0);

        assert_eq!(
            surface.pointer_down(&m, center(close)),
            vec![Intent::Close { window_id: id }]
        );
        assert_eq!(
            surface.pointer_down(&m, center(window.minimize_button_rect())),
            vec![Intent::Minimize { window_id: id }]
        );
        assert_eq!(
            surface.pointer_down(&m, center(window.maximize_button_rect())),
            vec![
                Intent::Focus { window_id: id },
                Intent::ToggleMaximize { window_id: id }
            ]
        );
        assert!(!surface.is_dragging());
    }

    #[test]
    fn test_maximized_title_does_not_drag() {
        let (mut m, id) = setup();
        m.maximize_window(id).unwrap();
        let mut surface = WindowSurface::new();

        let intents = surface.pointer_down(&m, Vec2::new(300.0, FRAME_STYLE.title_bar_height / 2.0));
        assert_eq!(intents, vec![Intent::Focus { window_id: id }]);
        assert!(!surface.is_dragging());
    }

    #[test]
    fn test_double_click_title() {
        let (m, id) = setup();
        let mut surface = WindowSurface::new();

        assert_eq!(
            surface.double_click(&m, Vec2::new(200.0, 110.0)),
            vec![Intent::ToggleMaximize { window_id: id }]
        );
        assert!(surface.double_click(&m, Vec2::new(300.0, 300.0)).is_empty());
    }

    #[test]
    fn test_drag_dropped_when_window_closes() {
        let (mut m, id) = setup();
        let mut surface = WindowSurface::new();

        surface.pointer_down(&m, Vec2::new(200.0, 110.0));
        m.close_window(id).unwrap();

        assert!(surface.pointer_move(&m, Vec2::new(10.0, 10.0)).is_empty());
        assert!(!surface.is_dragging());
    }

    #[test]
    fn test_cursor_and_miss() {
        let (m, _) = setup();
        let mut surface = WindowSurface::new();

        assert_eq!(surface.cursor_at(&m, Vec2::new(200.0, 110.0)), "move");
        assert_eq!(surface.cursor_at(&m, Vec2::new(5.0, 5.0)), "default");
        assert!(surface.pointer_down(&m, Vec2::new(5.0, 5.0)).is_empty());
    }
}
