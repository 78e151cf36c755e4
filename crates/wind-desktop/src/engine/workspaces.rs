//! Workspace lifecycle and switching

use std::collections::HashMap;
use tracing::{debug, info};
use crate::error::{DesktopError, DesktopResult};
use crate::types::WorkspaceId;
use crate::workspace::Workspace;
use super::{Change, WorkspaceManager};

impl WorkspaceManager {
    /// Create a workspace.
    ///
    /// The first workspace created while none is active becomes active.
    pub fn create_workspace(&mut self, name: &str) -> WorkspaceId {
        let id = self.next_workspace_id;
        self.next_workspace_id += 1;
        self.workspaces.insert(id, Workspace::new(id, name));

        if self.active_workspace.is_none() {
            self.active_workspace = Some(id);
        }
        debug!(workspace_id = id, name, "workspace created");
        id
    }

    /// Make another workspace the rendered one.
    ///
    /// Window state of the previous workspace is kept as-is.
    pub fn switch_workspace(&mut self, id: WorkspaceId) -> DesktopResult<Change> {
        if !self.workspaces.contains_key(&id) {
            return Err(DesktopError::WorkspaceNotFound(id));
        }
        if self.active_workspace == Some(id) {
            return Ok(Change::Unchanged);
        }
        self.active_workspace = Some(id);
        debug!(workspace_id = id, "workspace switched");
        Ok(Change::Applied)
    }

    /// Record that a workspace's backing resources have resolved.
    ///
    /// Replaces the per-app URL map. Windows already open keep the URL they
    /// were created with.
    pub fn initialize_workspace(
        &mut self,
        id: WorkspaceId,
        app_urls: HashMap<String, String>,
    ) -> DesktopResult<()> {
        let workspace = self
            .workspaces
            .get_mut(&id)
            .ok_or(DesktopError::WorkspaceNotFound(id))?;
        info!(workspace_id = id, apps = app_urls.len(), "workspace initialized");
        workspace.mark_initialized(app_urls);
        Ok(())
    }

    pub fn rename_workspace(&mut self, id: WorkspaceId, name: &str) -> DesktopResult<Change> {
        let workspace = self
            .workspaces
            .get_mut(&id)
            .ok_or(DesktopError::WorkspaceNotFound(id))?;
        if workspace.name == name {
            return Ok(Change::Unchanged);
        }
        workspace.name = name.to_string();
        Ok(Change::Applied)
    }

    /// Delete a workspace and all of its windows.
    ///
    /// Removing the active workspace leaves none active; the host picks the
    /// next one with [`switch_workspace`](Self::switch_workspace).
    pub fn remove_workspace(&mut self, id: WorkspaceId) -> DesktopResult<Workspace> {
        let workspace = self
            .workspaces
            .remove(&id)
            .ok_or(DesktopError::WorkspaceNotFound(id))?;
        if self.active_workspace == Some(id) {
            self.active_workspace = None;
        }
        debug!(workspace_id = id, windows = workspace.count(), "workspace removed");
        Ok(workspace)
    }

    /// The workspace currently rendered
    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.active().ok()
    }

    #[inline]
    pub fn active_workspace_id(&self) -> Option<WorkspaceId> {
        self.active_workspace
    }

    pub fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.get(&id)
    }

    /// All workspaces in creation order
    pub fn workspaces(&self) -> impl Iterator<Item = &Workspace> {
        self.workspaces.values()
    }
}
