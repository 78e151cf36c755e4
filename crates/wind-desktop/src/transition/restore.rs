//! Restore-from-dock animation hint

use serde::Serialize;
use crate::math::Rect;
use crate::types::WindowId;

/// Geometry and timing for animating a window out of its dock icon.
///
/// `from` is the on-screen rect of the clicked dock icon and `to` is the
/// window's committed rect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreAnimation {
    pub window_id: WindowId,
    pub from: Rect,
    pub to: Rect,
    /// Start time (ms timestamp)
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl RestoreAnimation {
    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms) / self.duration_ms;
        elapsed.clamp(0.0, 1.0) as f32
    }

    /// Check if the nominal duration has elapsed
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation() -> RestoreAnimation {
        RestoreAnimation {
            window_id: 1,
            from: Rect::new(600.0, 1040.0, 48.0, 48.0),
            to: Rect::new(100.0, 100.0, 800.0, 600.0),
            start_ms: 1000.0,
            duration_ms: 300.0,
        }
    }

    #[test]
    fn test_restore_progress() {
        let anim = animation();

        assert!((anim.progress(1000.0) - 0.0).abs() < 0.001);
        assert!((anim.progress(1150.0) - 0.5).abs() < 0.001);
        assert!(anim.progress(1300.0) >= 1.0);
        assert!(anim.is_complete(1300.0));
        assert!(!anim.is_complete(1299.0));
    }

    #[test]
    fn test_progress_before_start_clamps() {
        assert!((animation().progress(0.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let anim = RestoreAnimation { duration_ms: 0.0, ..animation() };
        assert!(anim.is_complete(anim.start_ms));
    }
}
