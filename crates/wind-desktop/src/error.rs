//! Error types for the workspace engine
//!
//! Errors fall into two groups: invalid references (the targeted window or
//! workspace does not exist) and policy rejections (the request is valid
//! but not allowed in the current state). Redundant requests are not errors;
//! they return [`Change::Unchanged`](crate::Change::Unchanged).

use thiserror::Error;
use crate::types::{WindowId, WorkspaceId};

/// Errors that can occur in workspace engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesktopError {
    /// Window with the given ID was not found in the active workspace
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),

    /// Workspace with the given ID was not found
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    /// No workspace is currently active
    #[error("no active workspace")]
    NoActiveWorkspace,

    /// App type is not in the registry
    #[error("unknown app: {0}")]
    UnknownApp(String),

    /// App is registered but not yet available
    #[error("app is coming soon: {0}")]
    ComingSoon(String),

    /// Workspace backing resources have not resolved yet
    #[error("workspace {0} is not initialized")]
    WorkspaceNotInitialized(WorkspaceId),

    /// Operation requires a visible window
    #[error("window {0} is minimized")]
    WindowMinimized(WindowId),

    /// Registry or engine configuration could not be loaded
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DesktopError {
    /// The operation targeted something that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WindowNotFound(_) | Self::WorkspaceNotFound(_) | Self::NoActiveWorkspace
        )
    }

    /// The operation was refused by policy; state is unchanged
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnknownApp(_)
                | Self::ComingSoon(_)
                | Self::WorkspaceNotInitialized(_)
                | Self::WindowMinimized(_)
        )
    }
}

/// Result type alias for workspace engine operations
pub type DesktopResult<T> = Result<T, DesktopError>;
