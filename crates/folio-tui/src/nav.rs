//! Navigation bar state: scroll subscription, language switcher, mobile menu

use std::cell::Cell;
use std::rc::Rc;

use folio_core::SectionId;

use crate::scroll::{ListenerId, ScrollState, SmoothScroll};

/// Terminal width below which nav links collapse behind the menu toggle
pub const COLLAPSE_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Id => "Indonesia",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Id,
            Language::Id => Language::En,
        }
    }
}

#[derive(Debug, Default)]
pub struct NavState {
    /// Latest position published by the scroll controller
    scroll: Rc<Cell<ScrollState>>,
    subscription: Option<ListenerId>,
    pub language: Language,
    pub menu_open: bool,
    pub language_open: bool,
    /// Section the viewport is currently in
    pub active: Option<SectionId>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the page's scroll controller
    pub fn attach(&mut self, scroll: &mut SmoothScroll) {
        if let Some(id) = self.subscription.take() {
            scroll.off(id);
        }
        let cell = self.scroll.clone();
        cell.set(scroll.state());
        self.subscription = Some(scroll.on_scroll(move |state| cell.set(*state)));
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll.get()
    }

    pub fn progress(&self) -> f64 {
        self.scroll.get().progress()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.get().is_scrolled()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.language_open = false;
        tracing::debug!(language = self.language.code(), "Language switched");
    }

    /// Close the mobile menu and language dropdown (after a nav link is used)
    pub fn close_menus(&mut self) {
        self.menu_open = false;
        self.language_open = false;
    }

    pub fn is_collapsed(width: u16) -> bool {
        width < COLLAPSE_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{ScrollOptions, ScrollToOptions, Viewport};
    use folio_core::ScrollConfig;
    use std::time::{Duration, Instant};

    #[test]
    fn test_tracks_controller_position() {
        let mut scroll = SmoothScroll::new(ScrollConfig::default());
        let mut nav = NavState::new();
        nav.attach(&mut scroll);
        scroll.initialize(
            Some(Viewport::new(10.0, 110.0).with_anchor("contact", 100.0)),
            ScrollOptions::default(),
        );

        let options = ScrollToOptions {
            duration: Some(Duration::ZERO),
            ..Default::default()
        };
        scroll.scroll_to("contact", options, Instant::now());
        assert_eq!(nav.progress(), 100.0);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_reattach_replaces_subscription() {
        let mut scroll = SmoothScroll::new(ScrollConfig::default());
        let mut nav = NavState::new();
        nav.attach(&mut scroll);
        let first = nav.subscription;
        nav.attach(&mut scroll);
        assert_ne!(first, nav.subscription);
        assert!(!scroll.off(first.unwrap()));
    }

    #[test]
    fn test_language_and_menus() {
        let mut nav = NavState::new();
        nav.toggle_language();
        assert_eq!(nav.language, Language::Id);
        nav.toggle_menu();
        nav.language_open = true;
        nav.close_menus();
        assert!(!nav.menu_open && !nav.language_open);
    }

    #[test]
    fn test_collapse_width() {
        assert!(NavState::is_collapsed(79));
        assert!(!NavState::is_collapsed(80));
    }
}
