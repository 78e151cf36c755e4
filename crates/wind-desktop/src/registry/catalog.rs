//! Registry table and lookups

use std::collections::HashSet;
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use super::{AppCategory, AppEntry, PlacementPolicy};

/// Ordered, immutable catalog of app entries
#[derive(Clone, Debug)]
pub struct AppRegistry {
    entries: Vec<AppEntry>,
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AppRegistry {
    /// Build a registry from entries, validating ids and default sizes
    pub fn new(entries: Vec<AppEntry>) -> DesktopResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(DesktopError::InvalidConfig("app id must not be empty".to_string()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(DesktopError::InvalidConfig(format!(
                    "duplicate app id: {}",
                    entry.id
                )));
            }
            if entry.default_size.is_empty() {
                return Err(DesktopError::InvalidConfig(format!(
                    "app {} has a non-positive default size",
                    entry.id
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Load a registry from a JSON array of entries
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let entries: Vec<AppEntry> =
            serde_json::from_str(json).map_err(|e| DesktopError::InvalidConfig(e.to_string()))?;
        Self::new(entries)
    }

    /// The shell's default catalog
    pub fn builtin() -> Self {
        let entries = vec![
            AppEntry::new("editor", "Editor", "code", Size::new(1100.0, 720.0))
                .with_category(AppCategory::Development)
                .with_description("Code editor attached to the workspace")
                .with_min_size(Size::new(480.0, 320.0)),
            AppEntry::new("terminal", "Terminal", "terminal", Size::new(900.0, 600.0))
                .with_placement(PlacementPolicy::Cascade)
                .with_category(AppCategory::Development)
                .with_description("Shell session in the workspace container")
                .with_min_size(Size::new(320.0, 200.0)),
            AppEntry::new("diff", "Diff Viewer", "git-compare", Size::new(1000.0, 680.0))
                .with_placement(PlacementPolicy::Cascade)
                .with_category(AppCategory::Development)
                .with_description("Review pending changes side by side"),
            AppEntry::new("settings", "Settings", "settings", Size::new(720.0, 540.0))
                .with_placement(PlacementPolicy::Fixed { x: 120.0, y: 96.0 })
                .with_category(AppCategory::System)
                .with_description("Workspace and account preferences"),
            AppEntry::new("email", "Mail", "mail", Size::new(960.0, 640.0))
                .with_placement(PlacementPolicy::Cascade)
                .with_category(AppCategory::Communication)
                .with_description("Inbox, compose and folders")
                .coming_soon(),
            AppEntry::new("social", "Social", "users", Size::new(880.0, 640.0))
                .with_placement(PlacementPolicy::Cascade)
                .with_category(AppCategory::Communication)
                .with_description("Feed and direct messages")
                .coming_soon(),
        ];
        Self { entries }
    }

    /// Look up an entry by app id
    pub fn get(&self, app_id: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|e| e.id == app_id)
    }

    /// Check if an app id is registered
    #[inline]
    pub fn contains(&self, app_id: &str) -> bool {
        self.get(app_id).is_some()
    }

    /// All entries in declaration order
    #[inline]
    pub fn all(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Entries of one category, in declaration order
    pub fn by_category(&self, category: AppCategory) -> impl Iterator<Item = &AppEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let registry = AppRegistry::builtin();
        let ids: Vec<&str> = registry.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["editor", "terminal", "diff", "settings", "email", "social"]);
    }

    #[test]
    fn test_builtin_is_valid() {
        let registry = AppRegistry::builtin();
        assert!(AppRegistry::new(registry.all().to_vec()).is_ok());
    }

    #[test]
    fn test_get_and_contains() {
        let registry = AppRegistry::builtin();
        assert_eq!(registry.get("terminal").unwrap().display_name, "Terminal");
        assert!(registry.contains("email"));
        assert!(!registry.contains("browser"));
        assert!(registry.get("email").unwrap().coming_soon);
    }

    #[test]
    fn test_by_category() {
        let registry = AppRegistry::builtin();
        let comms: Vec<&str> = registry
            .by_category(AppCategory::Communication)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(comms, ["email", "social"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let entries = vec![
            AppEntry::new("editor", "Editor", "code", Size::new(800.0, 600.0)),
            AppEntry::new("editor", "Editor 2", "code", Size::new(800.0, 600.0)),
        ];
        let err = AppRegistry::new(entries).unwrap_err();
        assert_eq!(err, DesktopError::InvalidConfig("duplicate app id: editor".to_string()));
    }

    #[test]
    fn test_empty_default_size_rejected() {
        let entries = vec![AppEntry::new("editor", "Editor", "code", Size::new(0.0, 600.0))];
        assert!(AppRegistry::new(entries).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "notes",
                "displayName": "Notes",
                "icon": "notebook",
                "defaultSize": { "width": 640, "height": 480 },
                "placement": { "kind": "cascade" }
            },
            {
                "id": "calendar",
                "displayName": "Calendar",
                "icon": "calendar",
                "defaultSize": { "width": 800, "height": 600 },
                "comingSoon": true
            }
        ]"#;

        let registry = AppRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("notes").unwrap().placement, PlacementPolicy::Cascade);
        assert_eq!(registry.get("calendar").unwrap().placement, PlacementPolicy::Center);
        assert!(registry.get("calendar").unwrap().coming_soon);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            AppRegistry::from_json(r#"[{ "id": "x" }]"#),
            Err(DesktopError::InvalidConfig(_))
        ));
    }
}
