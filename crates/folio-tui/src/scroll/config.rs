//! L4 Atomic Layer: Configuration helpers for smooth scrolling

use std::time::Duration;

pub use folio_core::ScrollConfig;

use super::easing::{CubicBezier, Easing};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Duration of animated `scroll_to` commands
    fn animation_duration(&self) -> Duration;

    /// Tick duration while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;

    /// Easing for navigation scrolls (bezier when configured, preset otherwise)
    fn nav_easing(&self) -> Easing;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.smoothing > 0.0
    }

    fn nav_easing(&self) -> Easing {
        match self.nav_bezier {
            Some(points) => Easing::Bezier(CubicBezier::from_points(points)),
            None => Easing::Preset(self.easing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::EasingType;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.is_smooth());
        assert_eq!(config.animation_duration(), Duration::from_millis(800));
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
        assert!(matches!(config.nav_easing(), Easing::Bezier(_)));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.smoothing = 0.0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_preset_easing_without_bezier() {
        let config = ScrollConfig {
            nav_bezier: None,
            easing: EasingType::Quintic,
            ..Default::default()
        };
        assert_eq!(config.nav_easing(), Easing::Preset(EasingType::Quintic));
    }
}
