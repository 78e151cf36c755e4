//! Window model
//!
//! Provides the window entity, its visibility state, open requests, and
//! chrome regions for hit testing.

mod region;
mod request;
#[allow(clippy::module_inception)]
mod window;

pub use region::WindowRegion;
pub use request::OpenRequest;
pub use window::{Window, WindowState};

pub use crate::types::WindowId;
