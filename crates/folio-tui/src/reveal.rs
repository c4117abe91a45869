//! One-shot staggered entrance of section children

use std::collections::HashMap;
use std::time::Instant;

use folio_core::{SectionId, StaggerSpec};

#[derive(Debug, Clone, Default)]
pub struct RevealScheduler {
    revealed: HashMap<SectionId, Instant>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report how much of `section` is visible (0.0-1.0)
    ///
    /// Returns true on the observation that reveals the section. Later
    /// observations never hide or restart it.
    pub fn observe(&mut self, section: SectionId, visible_fraction: f64, now: Instant) -> bool {
        if self.revealed.contains_key(&section) {
            return false;
        }
        if !crosses_threshold(section.stagger(), visible_fraction) {
            return false;
        }
        tracing::debug!(?section, visible_fraction, "Section revealed");
        self.revealed.insert(section, now);
        true
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains_key(&section)
    }

    /// Entrance progress of child `index` in [0, 1]
    pub fn child_progress(&self, section: SectionId, index: usize, now: Instant) -> f64 {
        let Some(&revealed_at) = self.revealed.get(&section) else {
            return 0.0;
        };
        let spec = section.stagger();
        let Some(since_start) = now
            .saturating_duration_since(revealed_at)
            .checked_sub(spec.child_start(index))
        else {
            return 0.0;
        };
        if spec.item_duration.is_zero() {
            return 1.0;
        }
        (since_start.as_secs_f64() / spec.item_duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_child_visible(&self, section: SectionId, index: usize, now: Instant) -> bool {
        self.child_progress(section, index, now) > 0.0
    }

    /// True once every child of the section has fully appeared
    pub fn is_settled(&self, section: SectionId, children: usize, now: Instant) -> bool {
        self.is_revealed(section)
            && (0..children).all(|i| self.child_progress(section, i, now) >= 1.0)
    }

    /// True while some revealed section still has children animating in
    pub fn is_animating(&self, children: impl Fn(SectionId) -> usize, now: Instant) -> bool {
        self.revealed
            .keys()
            .any(|&section| !self.is_settled(section, children(section), now))
    }
}

fn crosses_threshold(spec: StaggerSpec, visible_fraction: f64) -> bool {
    if !visible_fraction.is_finite() {
        return false;
    }
    if spec.threshold <= 0.0 {
        visible_fraction > 0.0
    } else {
        visible_fraction >= spec.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reveals_once_threshold_reached() {
        let mut reveal = RevealScheduler::new();
        let now = Instant::now();
        assert!(!reveal.observe(SectionId::Contact, 0.29, now));
        assert!(reveal.observe(SectionId::Contact, 0.3, now));
        assert!(!reveal.observe(SectionId::Contact, 1.0, now));
    }

    #[test]
    fn test_home_reveals_on_any_visibility() {
        let mut reveal = RevealScheduler::new();
        let now = Instant::now();
        assert!(!reveal.observe(SectionId::Home, 0.0, now));
        assert!(reveal.observe(SectionId::Home, 0.01, now));
    }

    #[test]
    fn test_never_reverses() {
        let mut reveal = RevealScheduler::new();
        let now = Instant::now();
        reveal.observe(SectionId::About, 0.5, now);
        reveal.observe(SectionId::About, 0.0, now + Duration::from_secs(1));
        assert!(reveal.is_revealed(SectionId::About));
        assert_eq!(
            reveal.child_progress(SectionId::About, 0, now + Duration::from_secs(5)),
            1.0
        );
    }

    #[test]
    fn test_children_stagger_in_order() {
        let mut reveal = RevealScheduler::new();
        let start = Instant::now();
        reveal.observe(SectionId::Projects, 0.5, start);

        // delay 300ms, stagger 150ms, each 500ms
        let at = |ms| start + Duration::from_millis(ms);
        assert_eq!(reveal.child_progress(SectionId::Projects, 0, at(300)), 0.0);
        assert!((reveal.child_progress(SectionId::Projects, 0, at(550)) - 0.5).abs() < 1e-9);
        assert_eq!(reveal.child_progress(SectionId::Projects, 1, at(450)), 0.0);
        assert!(reveal.is_child_visible(SectionId::Projects, 1, at(451)));
        assert_eq!(reveal.child_progress(SectionId::Projects, 2, at(1100)), 1.0);
    }

    #[test]
    fn test_settled() {
        let mut reveal = RevealScheduler::new();
        let start = Instant::now();
        assert!(!reveal.is_settled(SectionId::Certificates, 3, start));
        reveal.observe(SectionId::Certificates, 0.2, start);
        // no delay, stagger 100ms, 400ms each: last child done at 600ms
        assert!(!reveal.is_settled(SectionId::Certificates, 3, start + Duration::from_millis(599)));
        assert!(reveal.is_settled(SectionId::Certificates, 3, start + Duration::from_millis(600)));
        assert!(!reveal.is_animating(|_| 3, start + Duration::from_millis(600)));
    }

    #[test]
    fn test_unrevealed_children_hidden() {
        let reveal = RevealScheduler::new();
        assert_eq!(reveal.child_progress(SectionId::Footer, 0, Instant::now()), 0.0);
    }
}
