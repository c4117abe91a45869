//! L3 Molecular Layer: Scroll animation controller
//!
//! Combines easing functions and timing utilities. User scrolling is inertial
//! (each frame closes a fixed fraction of the remaining distance); targeted
//! scrolls run for a fixed duration along an easing curve.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::Easing;
use super::timing::{damping_factor, is_complete_at, lerp, progress_at};

/// Distance below which an inertial scroll snaps onto its target
const SETTLE_EPSILON: f64 = 0.01;

const FRAME: Duration = Duration::from_micros(16_667);

/// Fixed-duration animation toward a target
#[derive(Debug, Clone, Copy)]
struct TimedAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
}

impl TimedAnimation {
    fn position_at(&self, now: Instant) -> f64 {
        let t = progress_at(self.start, now, self.duration);
        lerp(self.from, self.to, self.easing.apply(t))
    }
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Inertial { target: f64 },
    Timed(TimedAnimation),
}

/// Scroll position animator
///
/// Feed it `scroll_by()` deltas and `animate_to()` commands, then call
/// `update()` every frame to advance the interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    motion: Option<Motion>,
    config: ScrollConfig,
    current: f64,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: f64,
    last_update: Option<Instant>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            motion: None,
            config,
            current: 0.0,
            pending_delta: 0.0,
            last_update: None,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.motion.is_some() || self.pending_delta != 0.0
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Final position once the running motion settles
    pub fn target(&self) -> f64 {
        match self.motion {
            Some(Motion::Inertial { target }) => target,
            Some(Motion::Timed(anim)) => anim.to,
            None => self.current,
        }
    }

    /// Set the position immediately, dropping any motion
    pub fn set_position(&mut self, position: f64) {
        self.cancel();
        self.current = position;
    }

    /// Queue a relative scroll, batched until the next `update()`
    pub fn scroll_by(&mut self, delta: f64, limit: f64) {
        if !self.config.is_smooth() {
            self.cancel();
            self.current = (self.current + delta).clamp(0.0, limit.max(0.0));
            return;
        }
        self.pending_delta += delta;
    }

    /// Start a timed animation toward `to`
    ///
    /// A running motion is sampled at `now` first, so a restarted animation
    /// begins where the previous one currently is.
    pub fn animate_to(&mut self, to: f64, duration: Duration, easing: Easing, now: Instant) {
        if let Some(Motion::Timed(anim)) = self.motion {
            self.current = anim.position_at(now);
        }
        self.pending_delta = 0.0;

        let instant = !self.config.smooth_enabled || duration.is_zero();
        if instant || (to - self.current).abs() < SETTLE_EPSILON {
            self.motion = None;
            self.last_update = None;
            self.current = to;
            return;
        }

        self.motion = Some(Motion::Timed(TimedAnimation {
            start: now,
            from: self.current,
            to,
            duration,
            easing,
        }));
    }

    /// Advance the motion to `now` and return the current position
    pub fn update(&mut self, now: Instant, limit: f64) -> f64 {
        let limit = limit.max(0.0);

        if self.pending_delta != 0.0 {
            let target = (self.target() + self.pending_delta).clamp(0.0, limit);
            self.pending_delta = 0.0;
            // User input takes over from a timed scroll
            self.motion = Some(Motion::Inertial { target });
        }

        let dt = self
            .last_update
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(FRAME);

        match self.motion {
            Some(Motion::Inertial { target }) => {
                let target = target.clamp(0.0, limit);
                let factor = damping_factor(self.config.smoothing, dt);
                self.current = lerp(self.current, target, factor);
                if (target - self.current).abs() < SETTLE_EPSILON {
                    self.current = target;
                    self.motion = None;
                }
            }
            Some(Motion::Timed(anim)) => {
                if is_complete_at(anim.start, now, anim.duration) {
                    self.current = anim.to;
                    self.motion = None;
                } else {
                    self.current = anim.position_at(now);
                }
            }
            None => {}
        }

        self.current = self.current.clamp(0.0, limit);
        self.last_update = self.motion.is_some().then_some(now);
        self.current
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.motion = None;
        self.pending_delta = 0.0;
        self.last_update = None;
    }
}
