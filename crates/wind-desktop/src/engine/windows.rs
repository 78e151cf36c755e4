//! Window lifecycle and transitions

use tracing::{debug, trace, warn};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};
use crate::window::{OpenRequest, Window, WindowId, WindowState};
use super::{placement, Change, OpenKind, OpenOutcome, WorkspaceManager};

impl WorkspaceManager {
    /// Open an app in the active workspace.
    ///
    /// An app has at most one live window per workspace. A visible window is
    /// focused, a minimized one is restored and focused, and only when neither
    /// exists is a new window created.
    pub fn open_window(&mut self, request: OpenRequest) -> DesktopResult<OpenOutcome> {
        let entry = match self.registry.get(&request.app_id) {
            Some(entry) => entry.clone(),
            None => {
                warn!(app_id = %request.app_id, "open rejected: unknown app");
                return Err(DesktopError::UnknownApp(request.app_id));
            }
        };
        if entry.coming_soon {
            warn!(app_id = %entry.id, "open rejected: app is coming soon");
            return Err(DesktopError::ComingSoon(entry.id));
        }

        let workspace = self.active()?;
        let workspace_id = workspace.id;
        if !workspace.is_initialized() {
            warn!(workspace_id, app_id = %entry.id, "open rejected: workspace not initialized");
            return Err(DesktopError::WorkspaceNotInitialized(workspace_id));
        }

        let visible = workspace.visible_for_app(&entry.id).map(|w| w.id);
        let minimized = workspace
            .minimized_for_app(&entry.id)
            .map(|w| (w.id, w.is_animating()));
        let ordinal = workspace.count();
        let url = workspace.app_url(&entry.id).map(str::to_string);

        if let Some(window_id) = visible {
            self.focus_window(window_id)?;
            debug!(window_id, app_id = %entry.id, "open focused existing window");
            return Ok(OpenOutcome { window_id, kind: OpenKind::Focused });
        }

        if let Some((window_id, animating)) = minimized {
            if animating {
                debug!(window_id, app_id = %entry.id, "open deferred: restore animation in flight");
                return Ok(OpenOutcome { window_id, kind: OpenKind::Deferred });
            }
            self.restore_window(window_id)?;
            self.focus_window(window_id)?;
            debug!(window_id, app_id = %entry.id, "open restored minimized window");
            return Ok(OpenOutcome { window_id, kind: OpenKind::Restored });
        }

        let window_id = self.next_window_id;
        let min_size = placement::min_size_for(&entry, &self.config);
        let size = request
            .size
            .filter(|s| s.is_finite())
            .unwrap_or(entry.default_size)
            .at_least(min_size);
        let position = request
            .position
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| {
                placement::initial_position(
                    &entry,
                    size,
                    &self.config,
                    &self.viewport,
                    ordinal,
                    window_id,
                )
            });

        let workspace = self.active_mut()?;
        let z_index = workspace.take_z();
        workspace.insert(Window {
            id: window_id,
            app_id: entry.id.clone(),
            title: entry.display_name.clone(),
            position,
            size,
            min_size,
            z_index,
            state: WindowState::Normal,
            url,
            restore_rect: None,
            prev_state: None,
            animating_since: None,
        });
        workspace.set_active(Some(window_id));
        self.next_window_id += 1;

        debug!(window_id, workspace_id, app_id = %entry.id, z_index, "window created");
        Ok(OpenOutcome { window_id, kind: OpenKind::Created })
    }

    /// Raise a window to the top and make it the active window
    pub fn focus_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let minimized = workspace
            .get(id)
            .map(Window::is_minimized)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if minimized {
            warn!(window_id = id, "focus rejected: window is minimized");
            return Err(DesktopError::WindowMinimized(id));
        }
        if workspace.is_focused(id) {
            return Ok(Change::Unchanged);
        }

        let z_index = workspace.take_z();
        if let Some(window) = workspace.get_mut(id) {
            window.z_index = z_index;
        }
        workspace.set_active(Some(id));
        debug!(window_id = id, z_index, "window focused");
        Ok(Change::Applied)
    }

    /// Hide a window to the dock.
    ///
    /// A focused window loses focus and nothing else is focused in its place.
    pub fn minimize_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if window.is_minimized() {
            return Ok(Change::Unchanged);
        }

        window.prev_state = Some(window.state);
        window.state = WindowState::Minimized;
        if workspace.is_focused(id) {
            workspace.set_active(None);
        }
        debug!(window_id = id, "window minimized");
        Ok(Change::Applied)
    }

    /// Bring a minimized window back to the state it was minimized from.
    ///
    /// Does not focus. Ignored while a restore animation is in flight.
    pub fn restore_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if !window.is_minimized() {
            return Ok(Change::Unchanged);
        }
        if window.is_animating() {
            debug!(window_id = id, "restore ignored: animation in flight");
            return Ok(Change::Unchanged);
        }

        window.state = window.prev_state.take().unwrap_or_default();
        debug!(window_id = id, state = ?window.state, "window restored");
        Ok(Change::Applied)
    }

    /// Fill the work area, remembering the current geometry
    pub fn maximize_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        let area = self.viewport.work_area(self.config.dock_height);
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;

        match window.state {
            WindowState::Minimized => Err(DesktopError::WindowMinimized(id)),
            WindowState::Maximized => Ok(Change::Unchanged),
            WindowState::Normal => {
                window.restore_rect = Some((window.position, window.size));
                window.state = WindowState::Maximized;
                window.position = area.position();
                window.size = area.size().at_least(window.min_size);
                debug!(window_id = id, "window maximized");
                Ok(Change::Applied)
            }
        }
    }

    /// Return a maximized window to its saved geometry
    pub fn restore_size(&mut self, id: WindowId) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;

        match window.state {
            WindowState::Minimized => Err(DesktopError::WindowMinimized(id)),
            WindowState::Normal => Ok(Change::Unchanged),
            WindowState::Maximized => {
                window.state = WindowState::Normal;
                if let Some((position, size)) = window.restore_rect.take() {
                    window.position = position;
                    window.size = size;
                }
                debug!(window_id = id, "window size restored");
                Ok(Change::Applied)
            }
        }
    }

    /// Maximize a normal window or restore a maximized one
    pub fn toggle_maximize(&mut self, id: WindowId) -> DesktopResult<Change> {
        let maximized = self
            .active()?
            .get(id)
            .map(Window::is_maximized)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if maximized {
            self.restore_size(id)
        } else {
            self.maximize_window(id)
        }
    }

    /// Move a window. Position is not constrained to the viewport.
    pub fn move_window(&mut self, id: WindowId, position: Vec2) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if !position.is_finite() || window.position == position {
            return Ok(Change::Unchanged);
        }

        window.position = position;
        trace!(window_id = id, x = position.x, y = position.y, "window moved");
        Ok(Change::Applied)
    }

    /// Resize a window, clamped to its minimum size
    pub fn resize_window(&mut self, id: WindowId, size: Size) -> DesktopResult<Change> {
        let floor = self.config.min_window_size;
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;

        let size = size.at_least(window.min_size.max(floor));
        if !size.is_finite() || window.size == size {
            return Ok(Change::Unchanged);
        }

        window.size = size;
        trace!(window_id = id, width = size.width, height = size.height, "window resized");
        Ok(Change::Applied)
    }

    /// Remove a window.
    ///
    /// Closing the focused window leaves the workspace with no active window.
    pub fn close_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let was_focused = workspace.is_focused(id);
        let window = workspace
            .remove(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        debug!(window_id = id, app_id = %window.app_id, was_focused, "window closed");
        Ok(Change::Applied)
    }

    pub fn set_window_title(&mut self, id: WindowId, title: &str) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        if window.title == title {
            return Ok(Change::Unchanged);
        }
        window.title = title.to_string();
        Ok(Change::Applied)
    }
}
