//! Workspace struct - windows plus z-order and focus bookkeeping

use std::collections::HashMap;
use crate::types::{WindowId, ZIndex};
use crate::window::Window;
use super::WorkspaceId;

/// An isolated collection of windows.
///
/// Render order comes from `z_index`, never from insertion order.
#[derive(Clone, Debug)]
pub struct Workspace {
    /// Unique identifier
    pub id: WorkspaceId,
    /// Human-readable name
    pub name: String,
    /// Windows by ID
    windows: HashMap<WindowId, Window>,
    /// Next z value; only ever increases
    next_z: ZIndex,
    /// The focused window, if any
    active_window_id: Option<WindowId>,
    /// Backing resources have resolved
    initialized: bool,
    /// Per-app embed URLs supplied by the provisioning service
    app_urls: HashMap<String, String>,
}

impl Workspace {
    /// Create an empty, uninitialized workspace
    pub fn new(id: WorkspaceId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            windows: HashMap::new(),
            next_z: 1,
            active_window_id: None,
            initialized: false,
            app_urls: HashMap::new(),
        }
    }

    /// Get a window by ID
    #[inline]
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// All windows, in no particular order
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub(crate) fn windows_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Non-minimized windows, back to front
    pub fn visible_by_z(&self) -> Vec<&Window> {
        self.windows_by_z()
            .into_iter()
            .filter(|w| !w.is_minimized())
            .collect()
    }

    /// Minimized windows, back to front
    pub fn minimized_by_z(&self) -> Vec<&Window> {
        self.windows_by_z()
            .into_iter()
            .filter(|w| w.is_minimized())
            .collect()
    }

    /// The visible window for an app, if one is open
    pub fn visible_for_app(&self, app_id: &str) -> Option<&Window> {
        self.windows
            .values()
            .find(|w| w.app_id == app_id && !w.is_minimized())
    }

    /// The most recently raised minimized window for an app
    pub fn minimized_for_app(&self, app_id: &str) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.app_id == app_id && w.is_minimized())
            .max_by_key(|w| w.z_index)
    }

    /// Get the focused window ID
    #[inline]
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    /// Check whether a window is the focused one
    #[inline]
    pub fn is_focused(&self, id: WindowId) -> bool {
        self.active_window_id == Some(id)
    }

    /// The z value the next raise will receive
    #[inline]
    pub fn next_z_index(&self) -> ZIndex {
        self.next_z
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Backing URL for an app, once resolved
    pub fn app_url(&self, app_id: &str) -> Option<&str> {
        self.app_urls.get(app_id).map(String::as_str)
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Take the next z value
    pub(crate) fn take_z(&mut self) -> ZIndex {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    pub(crate) fn insert(&mut self, window: Window) {
        self.windows.insert(window.id, window);
    }

    /// Remove a window, dropping focus if it held it.
    ///
    /// Remaining windows keep their z values.
    pub(crate) fn remove(&mut self, id: WindowId) -> Option<Window> {
        let removed = self.windows.remove(&id);
        if removed.is_some() && self.active_window_id == Some(id) {
            self.active_window_id = None;
        }
        removed
    }

    pub(crate) fn set_active(&mut self, id: Option<WindowId>) {
        self.active_window_id = id;
    }

    pub(crate) fn mark_initialized(&mut self, app_urls: HashMap<String, String>) {
        self.initialized = true;
        self.app_urls = app_urls;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};
    use crate::window::WindowState;

    fn window(id: WindowId, app_id: &str, z_index: ZIndex) -> Window {
        Window {
            id,
            app_id: app_id.to_string(),
            title: app_id.to_string(),
            position: Vec2::new(10.0, 10.0),
            size: Size::new(400.0, 300.0),
            min_size: Size::new(200.0, 150.0),
            z_index,
            state: WindowState::Normal,
            url: None,
            restore_rect: None,
            prev_state: None,
            animating_since: None,
        }
    }

    #[test]
    fn test_workspace_creation() {
        let ws = Workspace::new(1, "Main");
        assert_eq!(ws.id, 1);
        assert_eq!(ws.name, "Main");
        assert_eq!(ws.count(), 0);
        assert_eq!(ws.next_z_index(), 1);
        assert_eq!(ws.active_window_id(), None);
        assert!(!ws.is_initialized());
    }

    #[test]
    fn test_take_z_is_monotonic() {
        let mut ws = Workspace::new(1, "Main");
        assert_eq!(ws.take_z(), 1);
        assert_eq!(ws.take_z(), 2);
        assert_eq!(ws.next_z_index(), 3);
    }

    #[test]
    fn test_windows_by_z_ignores_insertion_order() {
        let mut ws = Workspace::new(1, "Main");
        ws.insert(window(1, "editor", 5));
        ws.insert(window(2, "terminal", 2));
        ws.insert(window(3, "diff", 9));

        let order: Vec<WindowId> = ws.windows_by_z().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn test_remove_clears_focus() {
        let mut ws = Workspace::new(1, "Main");
        ws.insert(window(1, "editor", 1));
        ws.insert(window(2, "terminal", 2));
        ws.set_active(Some(2));

        ws.remove(1);
        assert_eq!(ws.active_window_id(), Some(2));

        ws.remove(2);
        assert_eq!(ws.active_window_id(), None);
    }

    #[test]
    fn test_lookup_by_app() {
        let mut ws = Workspace::new(1, "Main");
        let mut minimized = window(1, "editor", 1);
        minimized.state = WindowState::Minimized;
        ws.insert(minimized);
        ws.insert(window(2, "terminal", 2));

        assert!(ws.visible_for_app("editor").is_none());
        assert_eq!(ws.minimized_for_app("editor").map(|w| w.id), Some(1));
        assert_eq!(ws.visible_for_app("terminal").map(|w| w.id), Some(2));
    }

    #[test]
    fn test_mark_initialized() {
        let mut ws = Workspace::new(1, "Main");
        let urls = HashMap::from([("editor".to_string(), "https://ws-1.example/editor".to_string())]);
        ws.mark_initialized(urls);

        assert!(ws.is_initialized());
        assert_eq!(ws.app_url("editor"), Some("https://ws-1.example/editor"));
        assert_eq!(ws.app_url("terminal"), None);
    }
}
