//! L4 Atomic Layer: Scroll position snapshot published to subscribers

/// Offset past which the page counts as scrolled (navbar styling)
pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// Current and maximum scroll offset, in rows
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub limit: f64,
}

impl ScrollState {
    pub fn new(offset: f64, limit: f64) -> Self {
        Self { offset, limit }
    }

    /// Scroll progress in percent, always within [0, 100]
    ///
    /// An empty or non-finite range yields 0.
    pub fn progress(&self) -> f64 {
        if !self.limit.is_finite() || !self.offset.is_finite() || self.limit <= 0.0 {
            return 0.0;
        }
        (self.offset / self.limit * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    /// Scroll offset rounded to the row that is drawn
    pub fn row(&self) -> u16 {
        if !self.offset.is_finite() || self.offset <= 0.0 {
            0
        } else {
            self.offset.round().min(u16::MAX as f64) as u16
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_has_zero_progress() {
        assert_eq!(ScrollState::new(0.0, 0.0).progress(), 0.0);
        assert_eq!(ScrollState::new(25.0, 0.0).progress(), 0.0);
        assert_eq!(ScrollState::new(5.0, f64::NAN).progress(), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let limit = 137.0;
        let mut prev = 0.0;
        for step in 0..=274 {
            let offset = step as f64 * 0.5;
            let p = ScrollState::new(offset, limit).progress();
            assert!((0.0..=100.0).contains(&p));
            assert!(p >= prev, "progress decreased at offset {}", offset);
            prev = p;
        }
        assert_eq!(prev, 100.0);
    }

    #[test]
    fn test_progress_clamps_overscroll() {
        assert_eq!(ScrollState::new(-4.0, 50.0).progress(), 0.0);
        assert_eq!(ScrollState::new(80.0, 50.0).progress(), 100.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!ScrollState::new(10.0, 100.0).is_scrolled());
        assert!(ScrollState::new(10.5, 100.0).is_scrolled());
    }

    #[test]
    fn test_row_rounding() {
        assert_eq!(ScrollState::new(3.6, 10.0).row(), 4);
        assert_eq!(ScrollState::new(-1.0, 10.0).row(), 0);
    }
}
