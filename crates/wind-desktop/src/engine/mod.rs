//! Workspace engine coordinating all window state
//!
//! This module is split into focused submodules:
//! - `windows`: Window transitions (open, focus, minimize, maximize, ...)
//! - `workspaces`: Workspace lifecycle and switching
//! - `placement`: Default geometry for new windows
//! - `animation`: Restore-animation guard and timeout
//! - `views`: Read-only snapshots for the dock and renderer
//! - `dispatch`: Applying [`Intent`](crate::Intent) values

mod animation;
mod dispatch;
mod placement;
mod views;
mod windows;
mod workspaces;

use std::collections::BTreeMap;
use serde::Serialize;
use crate::config::EngineConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::registry::AppRegistry;
use crate::types::{WindowId, WorkspaceId};
use crate::viewport::Viewport;
use crate::workspace::Workspace;

pub use views::WindowView;

/// Whether an operation changed state.
///
/// Redundant requests (minimizing a minimized window, focusing the focused
/// window) return `Unchanged` rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    Applied,
    Unchanged,
}

impl Change {
    #[inline]
    pub fn is_applied(self) -> bool {
        self == Change::Applied
    }

    #[inline]
    pub(crate) fn from_applied(applied: bool) -> Self {
        if applied {
            Change::Applied
        } else {
            Change::Unchanged
        }
    }
}

/// How an open request was satisfied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenKind {
    /// A new window was created
    Created,
    /// An existing visible window was focused
    Focused,
    /// A minimized window was restored and focused
    Restored,
    /// A minimized window exists but its restore animation is still in flight
    Deferred,
}

/// Result of [`WorkspaceManager::open_window`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOutcome {
    pub window_id: WindowId,
    pub kind: OpenKind,
}

/// Single source of truth for workspaces and their windows.
///
/// All mutation goes through the operations on this type. The dock,
/// launcher and window surface read from it and hand back
/// [`Intent`](crate::Intent)s for the host to apply.
pub struct WorkspaceManager {
    /// App catalog used by open
    pub(crate) registry: AppRegistry,
    /// Engine tunables
    pub(crate) config: EngineConfig,
    /// Current host viewport
    pub(crate) viewport: Viewport,
    /// Workspaces by ID (ids are monotonic, so this is creation order)
    pub(crate) workspaces: BTreeMap<WorkspaceId, Workspace>,
    /// Workspace currently rendered
    pub(crate) active_workspace: Option<WorkspaceId>,
    /// Next window ID, shared by all workspaces
    pub(crate) next_window_id: WindowId,
    /// Next workspace ID
    pub(crate) next_workspace_id: WorkspaceId,
}

impl Default for WorkspaceManager {
    fn default() -> Self {
        Self::new(AppRegistry::builtin(), EngineConfig::default())
    }
}

impl WorkspaceManager {
    /// Create an engine with no workspaces
    pub fn new(registry: AppRegistry, config: EngineConfig) -> Self {
        Self {
            registry,
            config,
            viewport: Viewport::default(),
            workspaces: BTreeMap::new(),
            active_workspace: None,
            next_window_id: 1,
            next_workspace_id: 1,
        }
    }

    #[inline]
    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport after the host page resizes
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Resolve the active workspace
    pub(crate) fn active(&self) -> DesktopResult<&Workspace> {
        let id = self.active_workspace.ok_or(DesktopError::NoActiveWorkspace)?;
        self.workspaces
            .get(&id)
            .ok_or(DesktopError::WorkspaceNotFound(id))
    }

    pub(crate) fn active_mut(&mut self) -> DesktopResult<&mut Workspace> {
        let id = self.active_workspace.ok_or(DesktopError::NoActiveWorkspace)?;
        self.workspaces
            .get_mut(&id)
            .ok_or(DesktopError::WorkspaceNotFound(id))
    }
}
