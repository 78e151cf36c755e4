//! Core type definitions for the workspace engine
//!
//! This module centralizes identifier aliases used throughout the crate.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// Window IDs are unique across every workspace of a `WorkspaceManager`
/// and are never reused, even after the window is closed.
pub type WindowId = u64;

/// Unique workspace identifier
///
/// Workspaces are identified by a monotonically increasing 32-bit integer.
pub type WorkspaceId = u32;

/// Paint order value; higher paints on top
pub type ZIndex = u64;
