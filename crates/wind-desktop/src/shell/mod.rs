//! Shell surfaces derived from engine state
//!
//! The dock and launcher borrow the engine read-only and translate clicks
//! into [`Intent`](crate::Intent)s.

mod dock;
mod launcher;

pub use dock::{Dock, DockItem};
pub use launcher::{Launcher, LauncherItem};
