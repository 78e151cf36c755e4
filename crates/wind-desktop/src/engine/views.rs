//! Read-only snapshots for the dock and renderer

use serde::Serialize;
use crate::math::Rect;
use crate::types::ZIndex;
use crate::window::{Window, WindowId};
use crate::workspace::Workspace;
use super::WorkspaceManager;

/// Window data handed to the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub app_id: String,
    pub title: String,
    pub url: Option<String>,
    pub rect: Rect,
    pub z_index: ZIndex,
    pub focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub is_animating: bool,
}

impl WindowView {
    fn new(workspace: &Workspace, window: &Window) -> Self {
        Self {
            id: window.id,
            app_id: window.app_id.clone(),
            title: window.title.clone(),
            url: window.url.clone(),
            rect: window.rect(),
            z_index: window.z_index,
            focused: workspace.is_focused(window.id),
            minimized: window.is_minimized(),
            maximized: window.is_maximized(),
            is_animating: window.is_animating(),
        }
    }
}

impl WorkspaceManager {
    /// Visible windows of the active workspace, back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        self.active_workspace()
            .map(Workspace::visible_by_z)
            .unwrap_or_default()
    }

    /// Minimized windows of the active workspace, in dock order
    pub fn minimized_windows(&self) -> Vec<&Window> {
        self.active_workspace()
            .map(Workspace::minimized_by_z)
            .unwrap_or_default()
    }

    /// Look up a window in the active workspace
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.active_workspace().and_then(|ws| ws.get(id))
    }

    /// Snapshot every window of the active workspace, back to front
    pub fn window_views(&self) -> Vec<WindowView> {
        let Some(workspace) = self.active_workspace() else {
            return Vec::new();
        };
        workspace
            .windows_by_z()
            .into_iter()
            .map(|w| WindowView::new(workspace, w))
            .collect()
    }

    /// Window title suffixed with its workspace name, for the browser tab
    pub fn title_with_workspace(&self, id: WindowId) -> Option<String> {
        let workspace = self.active_workspace()?;
        let window = workspace.get(id)?;
        Some(format!("{} - {}", window.title, workspace.name))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;
    use crate::window::OpenRequest;

    fn manager() -> WorkspaceManager {
        let mut m = WorkspaceManager::default();
        let ws = m.create_workspace("Main");
        m.initialize_workspace(ws, HashMap::new()).unwrap();
        m
    }

    #[test]
    fn test_windows_by_z_skips_minimized() {
        let mut m = manager();
        let a = m.open_window(OpenRequest::app("editor")).unwrap().window_id;
        let b = m.open_window(OpenRequest::app("terminal")).unwrap().window_id;
        let c = m.open_window(OpenRequest::app("diff")).unwrap().window_id;
        m.focus_window(a).unwrap();
        m.minimize_window(b).unwrap();

        let ids: Vec<_> = m.windows_by_z().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![c, a]);
        let minimized: Vec<_> = m.minimized_windows().iter().map(|w| w.id).collect();
        assert_eq!(minimized, vec![b]);
    }

    #[test]
    fn test_window_views() {
        let mut m = manager();
        let a = m.open_window(OpenRequest::app("editor")).unwrap().window_id;
        let b = m.open_window(OpenRequest::app("terminal")).unwrap().window_id;
        m.maximize_window(a).unwrap();
        m.minimize_window(b).unwrap();

        let views = m.window_views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, a);
        assert!(views[0].maximized && !views[0].focused);
        assert!(views[1].minimized && !views[1].maximized);

        let json = serde_json::to_value(&views[0]).unwrap();
        assert_eq!(json["appId"], "editor");
        assert_eq!(json["isAnimating"], false);
    }

    #[test]
    fn test_title_with_workspace() {
        let mut m = manager();
        let a = m.open_window(OpenRequest::app("terminal")).unwrap().window_id;

        assert_eq!(m.title_with_workspace(a).as_deref(), Some("Terminal - Main"));
        assert_eq!(m.title_with_workspace(99), None);
    }

    #[test]
    fn test_views_without_workspace() {
        let m = WorkspaceManager::default();
        assert!(m.windows_by_z().is_empty());
        assert!(m.window_views().is_empty());
        assert!(m.window(1).is_none());
    }
}
