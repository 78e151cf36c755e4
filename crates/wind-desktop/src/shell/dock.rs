//! Dock: app icons plus minimized windows

use serde::Serialize;
use crate::engine::WorkspaceManager;
use crate::intent::Intent;
use crate::math::Rect;
use crate::window::WindowId;

/// One icon in the dock
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DockItem {
    /// Registered app, in registry order
    App {
        app_id: String,
        name: String,
        icon: String,
        /// Coming-soon apps are shown but not clickable
        disabled: bool,
        /// A visible window of this app is open
        running: bool,
        /// A window of this app is minimized
        minimized: bool,
    },
    /// Minimized window of the active workspace
    Minimized {
        window_id: WindowId,
        app_id: String,
        title: String,
        icon: String,
    },
}

impl DockItem {
    #[inline]
    pub fn is_minimized_window(&self) -> bool {
        matches!(self, DockItem::Minimized { .. })
    }
}

/// Derived dock view over the engine. Recomputed on every call.
pub struct Dock<'a> {
    manager: &'a WorkspaceManager,
}

impl<'a> Dock<'a> {
    pub fn new(manager: &'a WorkspaceManager) -> Self {
        Self { manager }
    }

    /// App icons, then minimized windows in z order
    pub fn items(&self) -> Vec<DockItem> {
        let workspace = self.manager.active_workspace();
        let registry = self.manager.registry();

        let mut items: Vec<DockItem> = registry
            .all()
            .iter()
            .map(|entry| DockItem::App {
                app_id: entry.id.clone(),
                name: entry.display_name.clone(),
                icon: entry.icon.clone(),
                disabled: entry.coming_soon,
                running: workspace.is_some_and(|ws| ws.visible_for_app(&entry.id).is_some()),
                minimized: workspace.is_some_and(|ws| ws.minimized_for_app(&entry.id).is_some()),
            })
            .collect();

        items.extend(self.manager.minimized_windows().into_iter().map(|window| {
            DockItem::Minimized {
                window_id: window.id,
                app_id: window.app_id.clone(),
                title: window.title.clone(),
                icon: registry
                    .get(&window.app_id)
                    .map(|entry| entry.icon.clone())
                    .unwrap_or_default(),
            }
        }));
        items
    }

    /// Rendered width of the dock strip
    pub fn width(&self) -> f32 {
        let config = self.manager.config();
        let apps = self.manager.registry().len();
        let minimized = self.manager.minimized_windows().len();
        let count = apps + minimized;

        let mut width = config.dock_padding * 2.0;
        if count > 0 {
            width += count as f32 * config.dock_icon_size;
            width += (count - 1) as f32 * config.dock_icon_gap;
        }
        if minimized > 0 {
            width += config.dock_separator;
        }
        width
    }

    /// Intents for a click on an app icon
    pub fn click_app(&self, app_id: &str) -> Vec<Intent> {
        match self.manager.registry().get(app_id) {
            Some(entry) if entry.is_available() => {}
            _ => return Vec::new(),
        }
        let Some(workspace) = self.manager.active_workspace() else {
            return vec![Intent::open(app_id)];
        };

        if let Some(window) = workspace.visible_for_app(app_id) {
            return vec![Intent::Focus { window_id: window.id }];
        }
        match workspace.minimized_for_app(app_id) {
            Some(window) if window.is_animating() => Vec::new(),
            Some(window) => vec![
                Intent::Restore { window_id: window.id },
                Intent::Focus { window_id: window.id },
            ],
            None => vec![Intent::open(app_id)],
        }
    }

    /// Intents for a click on a minimized-window icon.
    ///
    /// `icon_rect` is where the clicked icon is on screen, if the host could
    /// measure it; it only adds the animation hint.
    pub fn click_minimized(&self, window_id: WindowId, icon_rect: Option<Rect>) -> Vec<Intent> {
        match self.manager.window(window_id) {
            Some(window) if window.is_minimized() && !window.is_animating() => {}
            _ => return Vec::new(),
        }

        let mut intents = vec![Intent::Restore { window_id }, Intent::Focus { window_id }];
        if let Some(from) = icon_rect {
            intents.push(Intent::AnimateRestore { window_id, from });
        }
        intents
    }
}
