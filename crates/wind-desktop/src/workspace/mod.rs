//! Workspace module
//!
//! A workspace is an isolated set of windows with its own z-order counter
//! and focus pointer, analogous to a virtual desktop.

#[allow(clippy::module_inception)]
mod workspace;

pub use workspace::Workspace;

pub use crate::types::WorkspaceId;
