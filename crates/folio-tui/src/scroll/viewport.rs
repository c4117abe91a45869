//! L4 Atomic Layer: Measured page layout the scroll controller moves over

/// Named position inside the scrollable page
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: String,
    /// Row offset of the anchor from the top of the page
    pub top: f64,
}

/// Height of the visible region, total page height, and the anchors in it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub content_height: f64,
    anchors: Vec<Anchor>,
}

impl Viewport {
    pub fn new(height: f64, content_height: f64) -> Self {
        Self {
            height: height.max(0.0),
            content_height: content_height.max(0.0),
            anchors: Vec::new(),
        }
    }

    pub fn with_anchor(mut self, id: impl Into<String>, top: f64) -> Self {
        self.add_anchor(id, top);
        self
    }

    /// Register an anchor; a repeated id replaces the earlier position
    pub fn add_anchor(&mut self, id: impl Into<String>, top: f64) {
        let id = id.into();
        match self.anchors.iter_mut().find(|a| a.id == id) {
            Some(anchor) => anchor.top = top,
            None => self.anchors.push(Anchor { id, top }),
        }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Largest reachable scroll offset
    #[inline]
    pub fn limit(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }

    /// Top of the anchor named `id` (a leading '#' is ignored)
    pub fn resolve(&self, id: &str) -> Option<f64> {
        let id = id.trim_start_matches('#');
        self.anchors.iter().find(|a| a.id == id).map(|a| a.top)
    }

    /// Anchor whose top is nearest at or above `offset`
    pub fn anchor_at(&self, offset: f64) -> Option<&Anchor> {
        self.anchors
            .iter()
            .filter(|a| a.top <= offset + 0.5)
            .max_by(|a, b| a.top.total_cmp(&b.top))
            .or_else(|| self.anchors.iter().min_by(|a, b| a.top.total_cmp(&b.top)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Viewport {
        Viewport::new(20.0, 120.0)
            .with_anchor("home", 0.0)
            .with_anchor("about", 30.0)
            .with_anchor("projects", 70.0)
    }

    #[test]
    fn test_limit() {
        assert_eq!(page().limit(), 100.0);
        assert_eq!(Viewport::new(50.0, 10.0).limit(), 0.0);
    }

    #[test]
    fn test_resolve_with_and_without_hash() {
        let viewport = page();
        assert_eq!(viewport.resolve("about"), Some(30.0));
        assert_eq!(viewport.resolve("#projects"), Some(70.0));
        assert_eq!(viewport.resolve("missing"), None);
    }

    #[test]
    fn test_anchor_at() {
        let viewport = page();
        assert_eq!(viewport.anchor_at(0.0).map(|a| a.id.as_str()), Some("home"));
        assert_eq!(viewport.anchor_at(45.0).map(|a| a.id.as_str()), Some("about"));
        assert_eq!(viewport.anchor_at(100.0).map(|a| a.id.as_str()), Some("projects"));
    }

    #[test]
    fn test_repeated_anchor_replaces() {
        let mut viewport = page();
        viewport.add_anchor("about", 35.0);
        assert_eq!(viewport.anchors().len(), 3);
        assert_eq!(viewport.resolve("about"), Some(35.0));
    }
}
