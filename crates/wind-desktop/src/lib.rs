//! Window and workspace engine for the Wind cloud desktop
//!
//! This crate owns the state behind the desktop shell:
//! - Workspaces, each an isolated set of windows with its own focus and z-order
//! - Window transitions (open, focus, minimize, restore, maximize, close)
//! - The app registry and default placement policies
//! - Dock and launcher views derived from engine state
//! - Pointer gesture translation for the window surface
//!
//! ## Architecture
//!
//! - [`WorkspaceManager`] is the single writer. Every mutation goes through it.
//! - [`shell`] and [`input`] only read engine state and return [`Intent`]s,
//!   which the host applies with [`WorkspaceManager::dispatch`].
//! - [`transition`] carries presentation hints for the animation layer; the
//!   state change they describe is already committed.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use wind_desktop::{Dock, OpenKind, OpenRequest, WorkspaceManager};
//!
//! let mut manager = WorkspaceManager::default();
//! let main = manager.create_workspace("Main");
//! manager.initialize_workspace(main, HashMap::new()).unwrap();
//!
//! let opened = manager.open_window(OpenRequest::app("terminal")).unwrap();
//! assert_eq!(opened.kind, OpenKind::Created);
//!
//! manager.minimize_window(opened.window_id).unwrap();
//! let intents = Dock::new(&manager).click_app("terminal");
//! manager.dispatch_all(intents, 0.0).unwrap();
//!
//! let ws = manager.active_workspace().unwrap();
//! assert_eq!(ws.active_window_id(), Some(opened.window_id));
//! ```

pub mod input;
pub mod math;
pub mod registry;
pub mod shell;
pub mod transition;
pub mod window;
pub mod workspace;

mod config;
mod engine;
mod error;
mod intent;
mod types;
mod viewport;

pub use config::EngineConfig;
pub use engine::{Change, OpenKind, OpenOutcome, WindowView, WorkspaceManager};
pub use error::{DesktopError, DesktopResult};
pub use input::{calculate_resize, DragState, GestureRouter, WindowSurface};
pub use intent::{Intent, Outcome};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use registry::{AppCategory, AppEntry, AppRegistry, PlacementPolicy};
pub use shell::{Dock, DockItem, Launcher, LauncherItem};
pub use transition::RestoreAnimation;
pub use types::{WindowId, WorkspaceId, ZIndex};
pub use viewport::Viewport;
pub use window::{OpenRequest, Window, WindowRegion, WindowState};
pub use workspace::Workspace;
