//! Engine requests as data
//!
//! The dock, launcher and window surface never mutate the engine directly.
//! They return [`Intent`]s which the host applies in order with
//! [`WorkspaceManager::dispatch`](crate::WorkspaceManager::dispatch).

use serde::{Deserialize, Serialize};
use crate::engine::{Change, OpenKind};
use crate::math::{Rect, Size, Vec2};
use crate::transition::RestoreAnimation;
use crate::types::{WindowId, WorkspaceId};

/// One requested state transition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    Open {
        app_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Vec2>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Size>,
    },
    Focus { window_id: WindowId },
    Minimize { window_id: WindowId },
    Restore { window_id: WindowId },
    Maximize { window_id: WindowId },
    RestoreSize { window_id: WindowId },
    ToggleMaximize { window_id: WindowId },
    Move { window_id: WindowId, position: Vec2 },
    Resize { window_id: WindowId, size: Size },
    Close { window_id: WindowId },
    /// Presentational hint: animate a restored window out of its dock icon
    AnimateRestore { window_id: WindowId, from: Rect },
    SwitchWorkspace { workspace_id: WorkspaceId },
}

impl Intent {
    /// Open an app with registry defaults
    pub fn open(app_id: &str) -> Self {
        Intent::Open {
            app_id: app_id.to_string(),
            position: None,
            size: None,
        }
    }

    /// The window this intent targets, if any
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Intent::Focus { window_id }
            | Intent::Minimize { window_id }
            | Intent::Restore { window_id }
            | Intent::Maximize { window_id }
            | Intent::RestoreSize { window_id }
            | Intent::ToggleMaximize { window_id }
            | Intent::Move { window_id, .. }
            | Intent::Resize { window_id, .. }
            | Intent::Close { window_id }
            | Intent::AnimateRestore { window_id, .. } => Some(*window_id),
            Intent::Open { .. } | Intent::SwitchWorkspace { .. } => None,
        }
    }
}

/// Result of applying an [`Intent`]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Opened { window_id: WindowId, kind: OpenKind },
    Applied,
    Unchanged,
    /// A restore animation the renderer should play
    Animation { animation: RestoreAnimation },
}

impl From<Change> for Outcome {
    fn from(change: Change) -> Self {
        match change {
            Change::Applied => Outcome::Applied,
            Change::Unchanged => Outcome::Unchanged,
        }
    }
}

impl Outcome {
    /// Whether engine state changed
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}
