//! Engine configuration
//!
//! All fields have defaults so a host can override only what it needs:
//!
//! ```
//! use wind_desktop::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "dock_height": 96 }"#).unwrap();
//! assert_eq!(config.dock_height, 96.0);
//! assert_eq!(config.cascade_slots, 8);
//! ```

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Tunables for placement, clamping, dock metrics and animation timeouts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Global floor applied to every resize
    pub min_window_size: Size,
    /// Base point for cascade placement
    pub cascade_origin: Vec2,
    /// Offset added per cascaded window
    pub cascade_step: f32,
    /// Cascade wraps back to the origin after this many steps
    pub cascade_slots: u32,
    /// Extra pseudo-random offset in `[0, cascade_jitter)`
    pub cascade_jitter: f32,
    /// Height reserved for the dock at the bottom of the viewport
    pub dock_height: f32,
    /// Nominal length of a restore-from-dock animation
    pub restore_animation_ms: f64,
    /// After this long an unfinished animation is considered abandoned
    pub animation_timeout_ms: f64,
    pub dock_icon_size: f32,
    pub dock_icon_gap: f32,
    pub dock_padding: f32,
    /// Gap between app icons and minimized-window icons
    pub dock_separator: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_window_size: Size::new(200.0, 150.0),
            cascade_origin: Vec2::new(80.0, 60.0),
            cascade_step: 32.0,
            cascade_slots: 8,
            cascade_jitter: 24.0,
            dock_height: 72.0,
            restore_animation_ms: 320.0,
            animation_timeout_ms: 1500.0,
            dock_icon_size: 48.0,
            dock_icon_gap: 8.0,
            dock_padding: 12.0,
            dock_separator: 16.0,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| DesktopError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DesktopResult<()> {
        if self.min_window_size.is_empty() {
            return Err(DesktopError::InvalidConfig(
                "min_window_size must be positive".to_string(),
            ));
        }
        if self.cascade_slots == 0 {
            return Err(DesktopError::InvalidConfig(
                "cascade_slots must be at least 1".to_string(),
            ));
        }
        if self.animation_timeout_ms < 0.0 {
            return Err(DesktopError::InvalidConfig(
                "animation_timeout_ms must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
