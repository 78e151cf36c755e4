//! Default geometry for new windows

use crate::config::EngineConfig;
use crate::math::{Size, Vec2};
use crate::registry::{AppEntry, PlacementPolicy};
use crate::types::WindowId;
use crate::viewport::Viewport;

/// Position for a new window when the caller gave none.
///
/// `ordinal` is the number of windows already in the workspace.
pub(crate) fn initial_position(
    entry: &AppEntry,
    size: Size,
    config: &EngineConfig,
    viewport: &Viewport,
    ordinal: usize,
    window_id: WindowId,
) -> Vec2 {
    match entry.placement {
        PlacementPolicy::Center => viewport.centered(size, config.dock_height),
        PlacementPolicy::Fixed { x, y } => Vec2::new(x, y),
        PlacementPolicy::Cascade => cascade_position(config, ordinal, window_id),
    }
}

/// Smallest size any window may take, whatever the configuration says
const ABSOLUTE_MIN_SIZE: Size = Size::new(1.0, 1.0);

/// Size floor for an app: the engine-wide floor raised by the app's own minimum
pub(crate) fn min_size_for(entry: &AppEntry, config: &EngineConfig) -> Size {
    let floor = config.min_window_size.max(ABSOLUTE_MIN_SIZE);
    match entry.min_size {
        Some(min) => min.max(floor),
        None => floor,
    }
}

/// Stagger from the cascade origin, wrapping after `cascade_slots` steps
fn cascade_position(config: &EngineConfig, ordinal: usize, window_id: WindowId) -> Vec2 {
    let slots = config.cascade_slots.max(1) as usize;
    let offset = (ordinal % slots) as f32 * config.cascade_step;
    config.cascade_origin + Vec2::new(offset, offset) + jitter(window_id, config.cascade_jitter)
}

/// Per-axis offset in `[0, range)` derived from the window id
fn jitter(window_id: WindowId, range: f32) -> Vec2 {
    if range <= 0.0 {
        return Vec2::ZERO;
    }
    let h = splitmix64(window_id);
    let fx = (h & 0xFFFF) as f32 / 65536.0;
    let fy = ((h >> 16) & 0xFFFF) as f32 / 65536.0;
    Vec2::new(fx * range, fy * range)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(placement: PlacementPolicy) -> AppEntry {
        AppEntry::new("app", "App", "app", Size::new(800.0, 600.0)).with_placement(placement)
    }

    #[test]
    fn test_center_placement() {
        let config = EngineConfig::default();
        let viewport = Viewport::new(1920.0, 1080.0);
        let pos = initial_position(
            &entry(PlacementPolicy::Center),
            Size::new(800.0, 600.0),
            &config,
            &viewport,
            0,
            1,
        );

        assert!((pos.x - 560.0).abs() < 0.001);
        assert!((pos.y - (1080.0 - config.dock_height - 600.0) / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_fixed_placement() {
        let pos = initial_position(
            &entry(PlacementPolicy::Fixed { x: 12.0, y: 34.0 }),
            Size::new(800.0, 600.0),
            &EngineConfig::default(),
            &Viewport::default(),
            5,
            9,
        );
        assert_eq!(pos, Vec2::new(12.0, 34.0));
    }

    #[test]
    fn test_cascade_staggers_and_stays_in_range() {
        let config = EngineConfig::default();
        let viewport = Viewport::default();
        let cascade = entry(PlacementPolicy::Cascade);

        let first = initial_position(&cascade, Size::new(800.0, 600.0), &config, &viewport, 0, 1);
        let second = initial_position(&cascade, Size::new(800.0, 600.0), &config, &viewport, 1, 2);

        for (ordinal, pos) in [(0.0, first), (1.0, second)] {
            let base = config.cascade_origin.x + ordinal * config.cascade_step;
            assert!(pos.x >= base && pos.x < base + config.cascade_jitter);
            let base = config.cascade_origin.y + ordinal * config.cascade_step;
            assert!(pos.y >= base && pos.y < base + config.cascade_jitter);
        }
    }

    #[test]
    fn test_cascade_wraps() {
        let config = EngineConfig {
            cascade_jitter: 0.0,
            ..EngineConfig::default()
        };
        let cascade = entry(PlacementPolicy::Cascade);
        let size = Size::new(800.0, 600.0);
        let viewport = Viewport::default();

        let first = initial_position(&cascade, size, &config, &viewport, 0, 1);
        let wrapped = initial_position(&cascade, size, &config, &viewport, config.cascade_slots as usize, 2);
        assert_eq!(first, wrapped);
        assert_eq!(first, config.cascade_origin);
    }

    #[test]
    fn test_jitter_is_deterministic() {
        assert_eq!(jitter(42, 24.0), jitter(42, 24.0));
        assert_eq!(jitter(42, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_min_size_for() {
        let config = EngineConfig::default();
        let plain = entry(PlacementPolicy::Center);
        assert_eq!(min_size_for(&plain, &config), config.min_window_size);

        let larger = plain.clone().with_min_size(Size::new(480.0, 100.0));
        assert_eq!(min_size_for(&larger, &config), Size::new(480.0, 150.0));
    }

    #[test]
    fn test_min_size_never_zero() {
        let config = EngineConfig {
            min_window_size: Size::ZERO,
            ..EngineConfig::default()
        };
        let floor = min_size_for(&entry(PlacementPolicy::Center), &config);
        assert!(!floor.is_empty());
    }
}
