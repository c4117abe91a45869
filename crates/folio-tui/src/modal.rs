//! Single-item preview overlay with scroll lock

/// Page scrolling as seen by an overlay that freezes it
pub trait ScrollLock {
    fn scroll_offset(&self) -> f64;
    fn lock(&mut self);
    fn unlock(&mut self);
    /// Move back to `offset` immediately
    fn restore(&mut self, offset: f64);
}

/// Holds at most one open item
#[derive(Debug, Clone)]
pub struct ModalController<T> {
    active: Option<T>,
    saved_offset: f64,
}

impl<T> Default for ModalController<T> {
    fn default() -> Self {
        Self {
            active: None,
            saved_offset: 0.0,
        }
    }
}

impl<T> ModalController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }

    /// Show `item`, replacing whatever is open
    ///
    /// The offset recorded by the first open is kept until `close`.
    pub fn open(&mut self, item: T, scroll: &mut impl ScrollLock) {
        if self.active.is_none() {
            self.saved_offset = scroll.scroll_offset();
            scroll.lock();
        }
        self.active = Some(item);
    }

    /// Clear the item, unlock scrolling and restore the recorded offset
    ///
    /// Returns the closed item; closing an empty modal is a no-op.
    pub fn close(&mut self, scroll: &mut impl ScrollLock) -> Option<T> {
        let item = self.active.take()?;
        scroll.unlock();
        scroll.restore(self.saved_offset);
        Some(item)
    }

    /// Escape key handling; true when something was closed
    pub fn escape(&mut self, scroll: &mut impl ScrollLock) -> bool {
        self.close(scroll).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeScroll {
        offset: f64,
        locked: bool,
        locks: usize,
        unlocks: usize,
        restores: Vec<f64>,
    }

    impl ScrollLock for FakeScroll {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }
        fn lock(&mut self) {
            self.locked = true;
            self.locks += 1;
        }
        fn unlock(&mut self) {
            self.locked = false;
            self.unlocks += 1;
        }
        fn restore(&mut self, offset: f64) {
            self.offset = offset;
            self.restores.push(offset);
        }
    }

    #[test]
    fn test_open_replaces_active_item() {
        let mut scroll = FakeScroll::default();
        let mut modal = ModalController::new();
        modal.open("A", &mut scroll);
        modal.open("B", &mut scroll);
        assert_eq!(modal.active(), Some(&"B"));
        assert_eq!(scroll.locks, 1);
        assert_eq!(scroll.unlocks, 0);
    }

    #[test]
    fn test_escape_closes_exactly_once() {
        let mut scroll = FakeScroll::default();
        let mut modal = ModalController::new();
        modal.open(1, &mut scroll);

        assert!(modal.escape(&mut scroll));
        assert!(!modal.is_open());
        assert!(!modal.escape(&mut scroll));
        assert_eq!(scroll.unlocks, 1);
        assert_eq!(scroll.restores.len(), 1);
    }

    #[test]
    fn test_close_restores_first_recorded_offset() {
        let mut scroll = FakeScroll {
            offset: 42.0,
            ..Default::default()
        };
        let mut modal = ModalController::new();
        modal.open(1, &mut scroll);
        scroll.offset = 0.0;
        modal.open(2, &mut scroll);

        assert_eq!(modal.close(&mut scroll), Some(2));
        assert!(!scroll.locked);
        assert_eq!(scroll.offset, 42.0);
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let mut scroll = FakeScroll::default();
        let mut modal: ModalController<u32> = ModalController::new();
        assert!(!modal.escape(&mut scroll));
        assert_eq!(scroll.unlocks, 0);
        assert!(scroll.restores.is_empty());
    }
}
