//! App registry
//!
//! Static catalog of the panel types the shell can open. The registry is
//! fixed after construction; the Dock and Launcher render it in declaration
//! order.

mod catalog;
mod entry;

pub use catalog::AppRegistry;
pub use entry::{AppCategory, AppEntry, PlacementPolicy};
