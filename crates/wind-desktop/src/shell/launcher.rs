//! Launcher: searchable app list

use serde::Serialize;
use crate::engine::WorkspaceManager;
use crate::intent::Intent;
use crate::registry::{AppCategory, AppEntry};

/// One row in the launcher overlay
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherItem {
    pub app_id: String,
    pub display_name: String,
    pub icon: String,
    pub description: String,
    pub category: AppCategory,
    /// False for coming-soon apps
    pub enabled: bool,
    /// The active workspace already has a window of this app
    pub open: bool,
}

/// Derived, filterable view over the app registry
pub struct Launcher<'a> {
    manager: &'a WorkspaceManager,
}

impl<'a> Launcher<'a> {
    pub fn new(manager: &'a WorkspaceManager) -> Self {
        Self { manager }
    }

    /// Apps matching `query` in registry order.
    ///
    /// The query is a case-insensitive substring of id, name or description;
    /// an empty query matches everything.
    pub fn results(&self, query: &str, category: Option<AppCategory>) -> Vec<LauncherItem> {
        let needle = query.trim().to_lowercase();
        self.manager
            .registry()
            .all()
            .iter()
            .filter(|entry| category.map_or(true, |c| entry.category == c))
            .filter(|entry| entry.matches(&needle))
            .map(|entry| self.item(entry))
            .collect()
    }

    /// Intents for choosing an app; coming-soon and unknown apps yield none
    pub fn select(&self, app_id: &str) -> Vec<Intent> {
        match self.manager.registry().get(app_id) {
            Some(entry) if entry.is_available() => vec![Intent::open(app_id)],
            _ => Vec::new(),
        }
    }

    fn item(&self, entry: &AppEntry) -> LauncherItem {
        let open = self
            .manager
            .active_workspace()
            .is_some_and(|ws| ws.windows().any(|w| w.app_id == entry.id));
        LauncherItem {
            app_id: entry.id.clone(),
            display_name: entry.display_name.clone(),
            icon: entry.icon.clone(),
            description: entry.description.clone(),
            category: entry.category,
            enabled: entry.is_available(),
            open,
        }
    }
}
