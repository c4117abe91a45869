//! L4 Atomic Layer: Time calculation utilities for scroll animations

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation started at `start`
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has finished by `now`
#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Frame-rate independent lerp factor
///
/// `smoothing` is the fraction of the remaining distance covered per 60 Hz
/// frame; longer frames cover proportionally more.
#[inline]
pub fn damping_factor(smoothing: f64, dt: Duration) -> f64 {
    let smoothing = smoothing.clamp(0.0, 1.0);
    if smoothing >= 1.0 {
        return 1.0;
    }
    let frames = dt.as_secs_f64() * 60.0;
    1.0 - (1.0 - smoothing).powf(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress_at(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_clamped() {
        let start = Instant::now();
        let duration = Duration::from_millis(800);
        let mid = progress_at(start, start + Duration::from_millis(400), duration);
        assert!((mid - 0.5).abs() < 1e-9);
        assert_eq!(progress_at(start, start + Duration::from_secs(5), duration), 1.0);
        assert!(is_complete_at(start, start + duration, duration));
    }

    #[test]
    fn test_damping_one_frame_matches_smoothing() {
        let factor = damping_factor(0.1, Duration::from_secs_f64(1.0 / 60.0));
        assert!((factor - 0.1).abs() < 1e-9);
        assert_eq!(damping_factor(0.1, Duration::ZERO), 0.0);
    }
}
