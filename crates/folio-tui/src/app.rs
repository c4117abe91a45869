use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::{AppConfig, ContentRegistry, GradientSampler, ProjectFilter, SectionId};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use url::Url;

use crate::assets::AssetCache;
use crate::event::ImageLoadResult;
use crate::input::Action;
use crate::modal::ModalController;
use crate::nav::NavState;
use crate::page::{Document, LinkAction, PageContext, PageLink};
use crate::reveal::RevealScheduler;
use crate::scroll::{
    AnchorOutcome, Lifecycle, ScrollOptions, ScrollTarget, ScrollToOptions, SmoothScroll,
};
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::typewriter::Typewriter;
use crate::widgets::{self, CertificateModalWidget, NavHit, NavbarLayout, NAVBAR_HEIGHT};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub content: ContentRegistry,
    pub theme: Theme,

    /// The page's single scroll controller
    pub scroll: SmoothScroll,
    pub nav: NavState,
    /// Shared with a scroll subscription that feeds it the offset
    pub gradient: Rc<RefCell<GradientSampler>>,
    pub typewriter: Typewriter,
    pub reveal: RevealScheduler,
    /// Certificate preview, keyed by certificate id
    pub modal: ModalController<u32>,
    pub assets: AssetCache,
    pub filter: ProjectFilter,
    /// Index into `document.links`
    pub focused_link: Option<usize>,

    pub mode: Mode,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub status_message: Option<String>,

    /// Page laid out at the current width
    pub document: Document,
    screen: Rect,
    page_area: Rect,
    last_tick: Option<Instant>,
    /// External links activated since the last `take_external_opens`
    pending_external: Vec<Url>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, content: ContentRegistry) -> Self {
        let theme = load_theme(&config.ui.theme);
        let mut scroll = SmoothScroll::new(config.ui.scroll.clone());

        let mut nav = NavState::new();
        nav.attach(&mut scroll);

        let gradient = Rc::new(RefCell::new(GradientSampler::new()));
        let sampler = gradient.clone();
        scroll.on_scroll(move |state| sampler.borrow_mut().set_scroll(state.offset));

        let typewriter = Typewriter::from_config(&config.typewriter);

        Self {
            config,
            content,
            theme,
            scroll,
            nav,
            gradient,
            typewriter,
            reveal: RevealScheduler::new(),
            modal: ModalController::new(),
            assets: AssetCache::new(),
            filter: ProjectFilter::All,
            focused_link: None,
            mode: Mode::Normal,
            pending_key: None,
            should_quit: false,
            status_message: None,
            document: Document::default(),
            screen: Rect::default(),
            page_area: Rect::default(),
            last_tick: None,
            pending_external: Vec::new(),
        }
    }

    /// Navbar, page and status line areas of `screen`
    pub fn split(screen: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(screen)
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn page_area(&self) -> Rect {
        self.page_area
    }

    /// Lay the page out for `screen` and hand the measured layout to the scroll controller
    ///
    /// The first call initializes the controller; later calls only refresh
    /// its viewport.
    pub fn layout(&mut self, screen: Rect, now: Instant) {
        self.screen = screen;
        let [_, page, _] = Self::split(screen);
        self.page_area = page;

        self.rebuild(now);
        let viewport = self.document.viewport(page.height);
        match self.scroll.lifecycle() {
            Lifecycle::Uninitialized => {
                let options = ScrollOptions::from(&self.config.ui.scroll);
                self.scroll.initialize(Some(viewport), options);
            }
            Lifecycle::Active => self.scroll.set_viewport(viewport),
            Lifecycle::Destroyed => {}
        }

        self.prepare_thumbnails();
    }

    fn rebuild(&mut self, now: Instant) {
        let ctx = PageContext {
            content: &self.content,
            theme: &self.theme,
            reveal: &self.reveal,
            now,
            typed: self.typewriter.text(),
            filter: self.filter,
            viewport_height: self.page_area.height,
        };
        self.document = widgets::build_document(&ctx, self.page_area.width, self.focused_link);

        if self.focused_link.is_some_and(|i| i >= self.document.links.len()) {
            self.focused_link = None;
        }
    }

    fn prepare_thumbnails(&mut self) {
        for slot in self.document.images.iter().filter(|s| s.visible) {
            self.assets.prepare_thumbnail(&slot.asset, slot.width, slot.height);
        }
        if let Some(cert) = self.modal.active().and_then(|&id| self.content.certificate(id)) {
            let area = CertificateModalWidget::image_area(self.screen);
            self.assets.prepare_thumbnail(&cert.image, area.width, area.height);
        }
    }

    /// Advance every time-driven piece of state to `now`
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);

        self.typewriter.advance(dt);
        self.scroll.update(now);
        self.observe_sections(now);
    }

    fn observe_sections(&mut self, now: Instant) {
        let offset = self.scroll.offset();
        let height = self.page_area.height;
        for section in SectionId::ALL {
            let fraction = self.document.visible_fraction(section, offset, height);
            self.reveal.observe(section, fraction, now);
        }

        self.nav.active = self
            .scroll
            .viewport()
            .and_then(|v| v.anchor_at(offset))
            .and_then(|anchor| SectionId::from_anchor(&anchor.id));
    }

    /// True while scrolling or entrance animations want a high frame rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.scroll.needs_update()
            || self.reveal.is_animating(
                |section| widgets::child_count(section, &self.content, self.filter),
                now,
            )
    }

    pub fn focused(&self) -> Option<&PageLink> {
        self.focused_link.and_then(|i| self.document.links.get(i))
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action == Action::PendingG {
            self.pending_key = Some('g');
            return;
        }
        self.pending_key = None;
        self.status_message = None;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_lines(1),
            Action::ScrollUp => self.scroll.scroll_lines(-1),
            Action::ScrollHalfPageDown => self.scroll.scroll_half_page(true),
            Action::ScrollHalfPageUp => self.scroll.scroll_half_page(false),
            Action::JumpToTop => {
                self.scroll.scroll_to(ScrollTarget::Top, ScrollToOptions::default(), now);
            }
            Action::JumpToBottom => {
                self.scroll.scroll_to(ScrollTarget::Bottom, ScrollToOptions::default(), now);
            }
            Action::JumpToNav(index) => self.follow_nav_link(index, now),
            Action::NextLink => self.move_focus(1, now),
            Action::PrevLink => self.move_focus(-1, now),
            Action::Activate => {
                if let Some(action) = self.focused().map(|link| link.action.clone()) {
                    self.activate(action, now);
                }
            }
            Action::CycleFilter => self.set_filter(self.filter.cycle()),
            Action::ToggleLanguage => self.nav.toggle_language(),
            Action::ToggleMenu => self.nav.toggle_menu(),
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => self.exit_mode(),
            Action::PendingG | Action::None => {}
        }
    }

    /// Close the innermost open layer
    fn exit_mode(&mut self) {
        if self.modal.is_open() {
            self.close_modal();
        } else if self.mode == Mode::Help {
            self.mode = Mode::Normal;
        } else if self.nav.menu_open || self.nav.language_open {
            self.nav.close_menus();
        } else {
            self.focused_link = None;
        }
    }

    fn follow_nav_link(&mut self, index: usize, now: Instant) {
        let Some(href) = self.content.nav_links.get(index).map(|l| l.href.clone()) else {
            return;
        };
        self.follow(&href, now);
    }

    /// Route `href` through the scroll controller
    pub fn follow(&mut self, href: &str, now: Instant) {
        match self.scroll.handle_anchor(href, now) {
            AnchorOutcome::External(url) => {
                self.status_message = Some(format!("Opening {}", url));
                self.pending_external.push(url);
            }
            AnchorOutcome::Unresolved => {
                self.status_message = Some(format!("Nothing at {}", href));
            }
            AnchorOutcome::Scrolled
            | AnchorOutcome::Jumped
            | AnchorOutcome::Deferred
            | AnchorOutcome::Inert => {}
        }
        self.nav.close_menus();
    }

    pub fn activate(&mut self, action: LinkAction, now: Instant) {
        match action {
            LinkAction::Href(href) => self.follow(&href, now),
            LinkAction::OpenCertificate(id) => self.open_certificate(id),
            LinkAction::SetFilter(filter) => self.set_filter(filter),
        }
    }

    pub fn open_certificate(&mut self, id: u32) {
        if self.content.certificate(id).is_none() {
            tracing::warn!(id, "Unknown certificate");
            return;
        }
        self.modal.open(id, &mut self.scroll);
    }

    pub fn close_modal(&mut self) {
        self.modal.close(&mut self.scroll);
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        if self.filter != filter {
            tracing::debug!(filter = filter.label(), "Project filter changed");
            self.filter = filter;
        }
    }

    fn move_focus(&mut self, step: isize, now: Instant) {
        let count = self.document.links.len();
        if count == 0 {
            return;
        }
        let next = match self.focused_link {
            Some(i) => (i as isize + step).rem_euclid(count as isize) as usize,
            None if step >= 0 => self.first_link_in_view().unwrap_or(0),
            None => count - 1,
        };
        self.focused_link = Some(next);
        self.reveal_row(self.document.links[next].row, now);
    }

    fn first_link_in_view(&self) -> Option<usize> {
        let top = self.scroll.state().row();
        self.document.links.iter().position(|link| link.row >= top)
    }

    /// Scroll so `row` sits inside the page, about a third from the top
    fn reveal_row(&mut self, row: u16, now: Instant) {
        let top = self.scroll.offset();
        let height = self.page_area.height as f64;
        let row = row as f64;
        if row >= top && row < top + height {
            return;
        }
        let target = (row - (height / 3.0).floor()).max(0.0);
        self.scroll
            .scroll_to(ScrollTarget::Offset(target), ScrollToOptions::default(), now);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll.scroll_lines(1),
            MouseEventKind::ScrollUp => self.scroll.scroll_lines(-1),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.gradient.borrow_mut().set_pointer(
                    mouse.column,
                    mouse.row,
                    self.screen.width,
                    self.screen.height,
                );
            }
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row, now),
            _ => {}
        }
    }

    fn click(&mut self, col: u16, row: u16, now: Instant) {
        self.status_message = None;
        if self.mode == Mode::Help {
            self.mode = Mode::Normal;
            return;
        }

        // Overlay click closes the preview
        if self.modal.is_open() {
            if !CertificateModalWidget::area(self.screen).contains(Position::new(col, row)) {
                self.close_modal();
            }
            return;
        }

        let [navbar, page, _] = Self::split(self.screen);
        let layout = NavbarLayout::compute(navbar, &self.content, &self.nav);
        if let Some(hit) = layout.hit(col, row) {
            self.nav_hit(hit, now);
            return;
        }
        if self.nav.menu_open || self.nav.language_open {
            self.nav.close_menus();
            return;
        }

        if !page.contains(Position::new(col, row)) {
            return;
        }
        let doc_row = self.scroll.state().row().saturating_add(row - page.y);
        if let Some(index) = self.document.link_at(doc_row, col - page.x) {
            self.focused_link = Some(index);
            let action = self.document.links[index].action.clone();
            self.activate(action, now);
        }
    }

    fn nav_hit(&mut self, hit: NavHit, now: Instant) {
        match hit {
            NavHit::Link(index) => self.follow_nav_link(index, now),
            NavHit::Cta => self.follow(widgets::CTA_HREF, now),
            NavHit::Language => self.nav.language_open = !self.nav.language_open,
            NavHit::LanguageOption(language) => {
                self.nav.language = language;
                self.nav.language_open = false;
            }
            NavHit::MenuToggle => self.nav.toggle_menu(),
        }
    }

    /// External URLs activated since the last call
    pub fn take_external_opens(&mut self) -> Vec<Url> {
        std::mem::take(&mut self.pending_external)
    }

    /// Images needed now that were never requested, with their resolved paths
    ///
    /// Project images load once their slot is within a screen of the viewport,
    /// certificate images once their preview opens.
    pub fn assets_to_load(&mut self) -> Vec<(String, PathBuf)> {
        let top = self.scroll.state().row();
        let height = self.page_area.height.max(1);
        let near = top.saturating_sub(height)..top.saturating_add(height * 2);

        let mut wanted: Vec<String> = self
            .document
            .images
            .iter()
            .filter(|slot| near.contains(&slot.row) || near.contains(&(slot.row + slot.height)))
            .map(|slot| slot.asset.clone())
            .collect();
        if let Some(cert) = self.modal.active().and_then(|&id| self.content.certificate(id)) {
            wanted.push(cert.image.clone());
        }

        wanted
            .into_iter()
            .filter(|asset| self.assets.start_loading(asset))
            .map(|asset| {
                let path = self.config.asset_path(&asset);
                (asset, path)
            })
            .collect()
    }

    pub fn apply_image(&mut self, result: ImageLoadResult) {
        self.assets.apply(result);
    }

    /// Stop animations and release the scroll controller
    pub fn teardown(&mut self) {
        self.typewriter.stop();
        if self.scroll.destroy() {
            tracing::info!("Page torn down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{HelpWidget, NavbarWidget, PageWidget, StatusBarWidget};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        // Instant scrolling keeps positions deterministic
        config.ui.scroll.smooth_enabled = false;
        config
    }

    /// App laid out with the hero fully revealed
    fn app_with(config: AppConfig) -> (App, Instant) {
        let mut app = App::new(Arc::new(config), ContentRegistry::builtin());
        let start = Instant::now();
        app.layout(SCREEN, start);
        app.tick(start);

        let settled = start + Duration::from_secs(3);
        app.tick(settled);
        app.layout(SCREEN, settled);
        (app, settled)
    }

    fn app() -> (App, Instant) {
        app_with(config())
    }

    fn click(app: &mut App, col: u16, row: u16, now: Instant) {
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: col,
                row,
                modifiers: KeyModifiers::NONE,
            },
            now,
        );
    }

    #[test]
    fn test_layout_initializes_scroll() {
        let (app, _) = app();
        assert!(app.scroll.is_active());
        assert_eq!(app.page_area().height, 27);
        let viewport = app.scroll.viewport().unwrap();
        assert!(viewport.resolve("contact").is_some());
        assert_eq!(app.nav.active, Some(SectionId::Home));
        assert!(app.reveal.is_revealed(SectionId::Home));
    }

    #[test]
    fn test_nav_link_scrolls_to_section() {
        let (mut app, now) = app();
        app.handle_action(Action::JumpToNav(3), now);
        let top = app.document.section(SectionId::Projects).unwrap().top as f64;
        assert_eq!(app.scroll.offset(), top.min(app.scroll.limit()));

        app.tick(now);
        assert_eq!(app.nav.active, Some(SectionId::Projects));
        assert!(app.nav.is_scrolled());
    }

    #[test]
    fn test_smooth_nav_link_animates() {
        let (mut app, now) = app_with(AppConfig::default());
        app.handle_action(Action::JumpToNav(1), now);
        assert!(app.needs_fast_update(now));

        let later = now + Duration::from_millis(400);
        app.tick(later);
        let top = app.document.section(SectionId::About).unwrap().top as f64;
        assert!(app.scroll.offset() > 0.0 && app.scroll.offset() < top);

        app.tick(now + Duration::from_millis(900));
        assert_eq!(app.scroll.offset(), top);
    }

    #[test]
    fn test_certificate_modal_locks_and_restores() {
        let (mut app, now) = app();
        app.handle_action(Action::JumpToNav(2), now);
        let before = app.scroll.offset();

        app.activate(LinkAction::OpenCertificate(2), now);
        assert!(app.modal.is_open());
        app.handle_action(Action::ScrollDown, now);
        app.handle_action(Action::JumpToBottom, now);
        assert_eq!(app.scroll.offset(), before);

        app.handle_action(Action::ExitMode, now);
        assert!(!app.modal.is_open());
        assert_eq!(app.scroll.offset(), before);
        app.handle_action(Action::ScrollDown, now);
        assert!(app.scroll.offset() > before);
    }

    #[test]
    fn test_unknown_certificate_ignored() {
        let (mut app, now) = app();
        app.activate(LinkAction::OpenCertificate(42), now);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_overlay_click_closes_modal() {
        let (mut app, now) = app();
        app.open_certificate(1);
        assert!(app.scroll.is_locked());
        click(&mut app, 50, 15, now);
        assert!(app.modal.is_open());
        click(&mut app, 0, 0, now);
        assert!(!app.modal.is_open());
        assert!(!app.scroll.is_locked());
    }

    #[test]
    fn test_external_link_is_queued() {
        let (mut app, now) = app();
        app.follow("https://github.com/Iiboyy", now);
        let opens = app.take_external_opens();
        assert_eq!(opens.len(), 1);
        assert_eq!(opens[0].host_str(), Some("github.com"));
        assert!(app.take_external_opens().is_empty());
        assert_eq!(app.scroll.offset(), 0.0);
    }

    #[test]
    fn test_bare_hash_is_inert() {
        let (mut app, now) = app();
        app.handle_action(Action::JumpToNav(4), now);
        let offset = app.scroll.offset();
        app.follow("#", now);
        assert_eq!(app.scroll.offset(), offset);
        assert!(app.take_external_opens().is_empty());
    }

    #[test]
    fn test_tab_focus_and_activate() {
        let (mut app, now) = app();
        app.handle_action(Action::NextLink, now);
        // Hero's only link
        assert_eq!(
            app.focused().map(|l| l.action.clone()),
            Some(LinkAction::Href("#about".into()))
        );
        app.handle_action(Action::Activate, now);
        let about = app.document.section(SectionId::About).unwrap().top as f64;
        assert_eq!(app.scroll.offset(), about);
    }

    #[test]
    fn test_filter_cycles() {
        let (mut app, now) = app();
        app.handle_action(Action::CycleFilter, now);
        assert_ne!(app.filter, ProjectFilter::All);
        app.handle_action(Action::CycleFilter, now);
        app.handle_action(Action::CycleFilter, now);
        assert_eq!(app.filter, ProjectFilter::All);
    }

    #[test]
    fn test_exit_mode_layers() {
        let (mut app, now) = app();
        app.handle_action(Action::Help, now);
        app.handle_action(Action::ToggleMenu, now);
        app.handle_action(Action::ExitMode, now);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.nav.menu_open);
        app.handle_action(Action::ExitMode, now);
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn test_pending_g() {
        let (mut app, now) = app();
        app.handle_action(Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::JumpToTop, now);
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_navbar_click_follows_link() {
        let (mut app, now) = app();
        let [navbar, _, _] = App::split(SCREEN);
        let layout = NavbarLayout::compute(navbar, &app.content, &app.nav);
        let (rect, _) = *layout
            .items
            .iter()
            .find(|(_, hit)| *hit == NavHit::Link(4))
            .unwrap();

        click(&mut app, rect.x + 1, rect.y, now);
        let contact = app.document.section(SectionId::Contact).unwrap().top as f64;
        assert_eq!(app.scroll.offset(), contact.min(app.scroll.limit()));
    }

    #[test]
    fn test_pointer_feeds_gradient() {
        let (mut app, now) = app();
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Moved,
                column: 100,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
            now,
        );
        let pointer = app.gradient.borrow().pointer();
        assert_eq!((pointer.x, pointer.y), (100.0, 0.0));
    }

    #[test]
    fn test_scroll_feeds_gradient() {
        let (mut app, now) = app();
        app.handle_action(Action::JumpToBottom, now);
        assert_eq!(app.gradient.borrow().scroll_y(), app.scroll.limit());
    }

    #[test]
    fn test_assets_requested_once() {
        let (mut app, now) = app();
        app.handle_action(Action::JumpToNav(3), now);
        app.tick(now);
        let first = app.assets_to_load();
        assert!(!first.is_empty());
        assert!(first.iter().all(|(asset, path)| path.ends_with(asset)));
        assert!(app.assets_to_load().is_empty());
    }

    #[test]
    fn test_teardown_stops_scrolling() {
        let (mut app, now) = app();
        app.teardown();
        assert_eq!(app.scroll.lifecycle(), Lifecycle::Destroyed);
        assert!(!app.typewriter.is_running());
        app.handle_action(Action::JumpToNav(1), now);
        assert_eq!(app.scroll.offset(), 0.0);
        app.teardown();
    }

    #[test]
    fn test_renders_page() {
        let (app, _) = app();
        let backend = TestBackend::new(SCREEN.width, SCREEN.height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let [navbar, page, status] = App::split(frame.area());
                PageWidget::render(frame, page, &app);
                NavbarWidget::render(frame, navbar, &app);
                StatusBarWidget::render(frame, status, &app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..SCREEN.height)
            .flat_map(|y| (0..SCREEN.width).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("IQBAL PRATAMA"));
        assert!(text.contains("Projects"));
        assert!(text.contains("ABOUT ME"));
    }

    fn draw_full_frame(app: &mut App, width: u16, height: u16, now: Instant) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let size = frame.area();
                app.layout(size, now);
                let app: &App = app;

                let [navbar, page, status] = App::split(size);
                PageWidget::render(frame, page, app);
                NavbarWidget::render(frame, navbar, app);
                StatusBarWidget::render(frame, status, app);
                if let Some(cert) = app.modal.active().and_then(|&id| app.content.certificate(id)) {
                    CertificateModalWidget::render(frame, size, cert, app);
                }
                if app.mode == Mode::Help {
                    HelpWidget::render(frame, size, app);
                }
            })
            .unwrap();
    }

    #[test]
    fn test_tiny_terminals_render_without_panicking() {
        let (mut app, now) = app();
        app.nav.menu_open = true;
        app.nav.language_open = true;
        app.open_certificate(1);
        app.mode = Mode::Help;

        for (width, height) in [(1, 1), (2, 10), (3, 10), (1, 60), (4, 40), (5, 3), (40, 2)] {
            draw_full_frame(&mut app, width, height, now);
        }
    }

    #[test]
    fn test_navbar_items_stay_inside_narrow_bar() {
        let content = ContentRegistry::builtin();
        let mut nav = NavState::new();
        nav.menu_open = true;
        nav.language_open = true;

        for width in 1..=3 {
            let area = Rect::new(0, 0, width, NAVBAR_HEIGHT);
            let layout = NavbarLayout::compute(area, &content, &nav);
            for (rect, hit) in &layout.items {
                assert!(!rect.is_empty(), "{:?} empty at width {}", hit, width);
                assert!(rect.x + rect.width <= width, "{:?} overflows width {}", hit, width);
            }
        }
    }

    #[test]
    fn test_resizing_keeps_one_thumbnail_per_asset() {
        let (mut app, now) = app();
        let asset = app.content.certificate(1).unwrap().image.clone();
        app.apply_image(ImageLoadResult::Success {
            asset: asset.clone(),
            image: Arc::new(image::DynamicImage::new_rgb8(64, 48)),
        });
        app.open_certificate(1);

        for width in 60..160 {
            app.layout(Rect::new(0, 0, width, 30), now);
        }
        assert_eq!(app.assets.thumbnail_count(), 1);
        let area = CertificateModalWidget::image_area(app.screen());
        assert!(app.assets.thumbnail(&asset, area.width, area.height).is_some());
    }
}
