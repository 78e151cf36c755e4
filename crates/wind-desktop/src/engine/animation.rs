//! Restore-animation guard

use tracing::debug;
use crate::error::{DesktopError, DesktopResult};
use crate::math::Rect;
use crate::transition::RestoreAnimation;
use crate::window::WindowId;
use super::{Change, WorkspaceManager};

impl WorkspaceManager {
    /// Start a restore-from-dock animation for a window that is already
    /// restored.
    ///
    /// `from` is the on-screen rect of the clicked dock icon. Returns `None`
    /// when the window is still minimized or an animation is already in
    /// flight; the state transition stands either way.
    pub fn begin_restore_animation(
        &mut self,
        id: WindowId,
        from: Rect,
        now_ms: f64,
    ) -> DesktopResult<Option<RestoreAnimation>> {
        let duration_ms = self.config.restore_animation_ms;
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;

        if window.is_minimized() || window.is_animating() {
            debug!(window_id = id, "restore animation ignored");
            return Ok(None);
        }

        window.animating_since = Some(now_ms);
        debug!(window_id = id, "restore animation started");
        Ok(Some(RestoreAnimation {
            window_id: id,
            from,
            to: window.rect(),
            start_ms: now_ms,
            duration_ms,
        }))
    }

    /// Completion signal from the animation layer
    pub fn finish_animation(&mut self, id: WindowId) -> DesktopResult<Change> {
        let workspace = self.active_mut()?;
        let window = workspace
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        Ok(Change::from_applied(window.animating_since.take().is_some()))
    }

    /// Clear animation flags that outlived `animation_timeout_ms`.
    ///
    /// Covers every workspace, since an animation can be abandoned by
    /// switching away mid-flight. Returns the number of flags cleared.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let timeout = self.config.animation_timeout_ms;
        let mut cleared = 0;

        for workspace in self.workspaces.values_mut() {
            for window in workspace.windows_mut() {
                let expired = window
                    .animating_since
                    .is_some_and(|start| now_ms - start >= timeout);
                if expired {
                    window.animating_since = None;
                    cleared += 1;
                    debug!(window_id = window.id, "restore animation timed out");
                }
            }
        }
        cleared
    }
}
