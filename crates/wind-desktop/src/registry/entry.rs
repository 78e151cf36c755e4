//! Registry entry describing one openable app

use serde::{Deserialize, Serialize};
use crate::math::Size;

/// How a new window is positioned when the caller gives no position
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlacementPolicy {
    /// Centered in the viewport work area
    #[default]
    Center,
    /// Staggered from a base point so repeated opens don't stack exactly
    Cascade,
    /// Always at the given position
    Fixed { x: f32, y: f32 },
}

/// Grouping used by the launcher's category filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    #[default]
    Productivity,
    Development,
    Communication,
    System,
}

/// Immutable description of an app type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// App-type identifier, unique across the registry
    pub id: String,
    pub display_name: String,
    /// Icon handle resolved by the renderer
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: AppCategory,
    pub default_size: Size,
    #[serde(default)]
    pub placement: PlacementPolicy,
    /// App-specific resize floor, on top of the engine-wide one
    #[serde(default)]
    pub min_size: Option<Size>,
    /// Listed but not openable yet
    #[serde(default)]
    pub coming_soon: bool,
}

impl AppEntry {
    /// Create an entry with center placement and no extras
    pub fn new(id: &str, display_name: &str, icon: &str, default_size: Size) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            icon: icon.to_string(),
            description: String::new(),
            category: AppCategory::default(),
            default_size,
            placement: PlacementPolicy::default(),
            min_size: None,
            coming_soon: false,
        }
    }

    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_category(mut self, category: AppCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn coming_soon(mut self) -> Self {
        self.coming_soon = true;
        self
    }

    /// Whether open requests for this app are accepted
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.coming_soon
    }

    /// Case-insensitive match against id, display name and description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.id.to_lowercase().contains(needle)
            || self.display_name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
