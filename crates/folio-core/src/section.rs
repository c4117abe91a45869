//! Page sections and their entrance timing

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sections of the page, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Certificates,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Certificates,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Fragment identifier the section is addressed by (without '#')
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Certificates => "certificates",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Entrance timing for the section's children
    pub fn stagger(&self) -> StaggerSpec {
        match self {
            SectionId::Home => StaggerSpec::new(0.0, 300, 200, 500),
            SectionId::About => StaggerSpec::new(0.2, 300, 100, 600),
            SectionId::Certificates => StaggerSpec::new(0.2, 0, 100, 400),
            SectionId::Projects => StaggerSpec::new(0.2, 300, 150, 500),
            SectionId::Contact => StaggerSpec::new(0.3, 300, 200, 600),
            SectionId::Footer => StaggerSpec::new(0.1, 300, 100, 600),
        }
    }
}

/// One-shot staggered entrance parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerSpec {
    /// Visible fraction (0.0-1.0) that triggers the reveal
    pub threshold: f64,
    pub delay_children: Duration,
    pub stagger: Duration,
    pub item_duration: Duration,
}

impl StaggerSpec {
    pub const fn new(threshold: f64, delay_ms: u64, stagger_ms: u64, item_ms: u64) -> Self {
        Self {
            threshold,
            delay_children: Duration::from_millis(delay_ms),
            stagger: Duration::from_millis(stagger_ms),
            item_duration: Duration::from_millis(item_ms),
        }
    }

    /// Offset from the reveal instant at which child `index` starts appearing
    pub fn child_start(&self, index: usize) -> Duration {
        self.delay_children + self.stagger * index as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#projects"), Some(SectionId::Projects));
        assert_eq!(SectionId::from_anchor("#certificate"), None);
    }

    #[test]
    fn test_child_start_is_staggered() {
        let spec = SectionId::Projects.stagger();
        assert_eq!(spec.child_start(0), Duration::from_millis(300));
        assert_eq!(spec.child_start(2), Duration::from_millis(600));
    }
}
