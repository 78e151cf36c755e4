//! Open request for creating or surfacing a window

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Request to open an app in the active workspace
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenRequest {
    /// App type to open
    pub app_id: String,
    /// Explicit position (None = app placement policy)
    #[serde(default)]
    pub position: Option<Vec2>,
    /// Explicit size (None = app default size)
    #[serde(default)]
    pub size: Option<Size>,
}

impl OpenRequest {
    /// Open with the app's default placement and size
    pub fn app(app_id: &str) -> Self {
        Self {
            app_id: app_id.to_string(),
            ..Default::default()
        }
    }

    /// Override the initial position
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Override the initial size
    pub fn sized(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}
