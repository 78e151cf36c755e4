//! Core geometry types for the desktop shell
//!
//! Positions and sizes are in logical pixels of the browser viewport.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
