//! Presentation hints for visual transitions
//!
//! The engine never animates anything itself. It hands the animation layer
//! start/end geometry for a transition that has already been committed.

mod restore;

pub use restore::RestoreAnimation;
