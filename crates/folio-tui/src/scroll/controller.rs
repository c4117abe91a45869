//! L2 Organism Layer: The page's single smooth-scroll controller
//!
//! Owns the scroll position of the page viewport. Every other component
//! reads the position through `on_scroll` subscriptions and requests changes
//! through `scroll_to`, `scroll_by` or `handle_anchor`.

use std::time::{Duration, Instant};

use folio_core::LinkTarget;
use url::Url;

use super::animation::ScrollAnimator;
use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::Easing;
use super::state::ScrollState;
use super::viewport::Viewport;
use crate::modal::ScrollLock;

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Active,
    Destroyed,
}

/// Options applied by `initialize`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOptions {
    /// Share of the remaining distance covered per frame (lerp)
    pub smoothing: f64,
    /// Scale applied to line and wheel scrolling
    pub multiplier: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self::from(&ScrollConfig::default())
    }
}

impl From<&ScrollConfig> for ScrollOptions {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            smoothing: config.smoothing,
            multiplier: config.multiplier,
        }
    }
}

/// Where a `scroll_to` should land
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    Offset(f64),
    Anchor(String),
    Top,
    Bottom,
}

impl From<f64> for ScrollTarget {
    fn from(offset: f64) -> Self {
        ScrollTarget::Offset(offset)
    }
}

impl From<&str> for ScrollTarget {
    fn from(anchor: &str) -> Self {
        ScrollTarget::Anchor(anchor.trim_start_matches('#').to_string())
    }
}

/// Per-call options of `scroll_to`; unset fields fall back to the config
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollToOptions {
    /// Rows added to the resolved target
    pub offset: f64,
    pub duration: Option<Duration>,
    pub easing: Option<Easing>,
}

/// Result of routing a link activation through the controller
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorOutcome {
    /// Fragment resolved; an animated scroll is running
    Scrolled,
    /// Controller not active; jumped straight to the section
    Jumped,
    /// Layout not measured yet; the jump happens once it is
    Deferred,
    /// Fragment names no section; nothing happened
    Unresolved,
    /// Not an in-page link; the caller hands it to the OS opener
    External(Url),
    /// Bare "#" or unparseable link
    Inert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ScrollState)>;

pub struct SmoothScroll {
    config: ScrollConfig,
    lifecycle: Lifecycle,
    viewport: Option<Viewport>,
    animator: ScrollAnimator,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    last_emitted: Option<ScrollState>,
    pending_anchor: Option<String>,
    locked: bool,
}

impl std::fmt::Debug for SmoothScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothScroll")
            .field("lifecycle", &self.lifecycle)
            .field("offset", &self.animator.current())
            .field("listeners", &self.listeners.len())
            .field("locked", &self.locked)
            .finish()
    }
}

impl SmoothScroll {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animator: ScrollAnimator::new(config.clone()),
            config,
            lifecycle: Lifecycle::Uninitialized,
            viewport: None,
            listeners: Vec::new(),
            next_listener: 0,
            last_emitted: None,
            pending_anchor: None,
            locked: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn offset(&self) -> f64 {
        self.animator.current()
    }

    pub fn limit(&self) -> f64 {
        self.viewport.as_ref().map(Viewport::limit).unwrap_or(0.0)
    }

    pub fn state(&self) -> ScrollState {
        ScrollState::new(self.offset(), self.limit())
    }

    /// True while a frame is needed to advance a motion
    pub fn needs_update(&self) -> bool {
        self.is_active() && self.animator.needs_update()
    }

    /// Bind to the measured page viewport
    ///
    /// Returns false when nothing changed: the viewport is missing or the
    /// controller is already active.
    pub fn initialize(&mut self, viewport: Option<Viewport>, options: ScrollOptions) -> bool {
        if self.is_active() {
            tracing::debug!("Smooth scroll already initialized");
            return false;
        }
        let Some(viewport) = viewport else {
            tracing::debug!("No viewport to bind smooth scroll to");
            return false;
        };

        self.config.smoothing = options.smoothing;
        self.config.multiplier = options.multiplier;
        let position = self.animator.current().clamp(0.0, viewport.limit());
        self.animator = ScrollAnimator::new(self.config.clone());
        self.animator.set_position(position);
        self.viewport = Some(viewport);
        self.lifecycle = Lifecycle::Active;
        tracing::info!(
            smoothing = options.smoothing,
            multiplier = options.multiplier,
            "Smooth scroll initialized"
        );

        self.apply_pending_anchor();
        self.emit_if_changed();
        true
    }

    /// Replace the measured layout (resize, content change)
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let limit = viewport.limit();
        self.viewport = Some(viewport);
        if self.animator.current() > limit {
            self.animator.set_position(limit);
        }
        self.apply_pending_anchor();
        self.emit_if_changed();
    }

    /// Release listeners and the running animation
    ///
    /// Returns true only for the call that performed the teardown.
    pub fn destroy(&mut self) -> bool {
        if self.lifecycle == Lifecycle::Destroyed {
            tracing::debug!("Smooth scroll already destroyed");
            return false;
        }
        self.animator.cancel();
        self.listeners.clear();
        self.pending_anchor = None;
        self.last_emitted = None;
        self.locked = false;
        self.lifecycle = Lifecycle::Destroyed;
        tracing::info!("Smooth scroll destroyed");
        true
    }

    /// Subscribe to position updates
    pub fn on_scroll(&mut self, listener: impl FnMut(&ScrollState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Resolve `target` to a clamped offset, if it names something
    pub fn resolve(&self, target: &ScrollTarget) -> Option<f64> {
        let viewport = self.viewport.as_ref()?;
        let base = match target {
            ScrollTarget::Offset(offset) => *offset,
            ScrollTarget::Anchor(id) => viewport.resolve(id)?,
            ScrollTarget::Top => 0.0,
            ScrollTarget::Bottom => viewport.limit(),
        };
        Some(base)
    }

    /// Animate the viewport toward `target`
    ///
    /// Returns false (and leaves the position untouched) when the controller
    /// is not active, scrolling is locked, or the target does not resolve.
    pub fn scroll_to(
        &mut self,
        target: impl Into<ScrollTarget>,
        options: ScrollToOptions,
        now: Instant,
    ) -> bool {
        let target = target.into();
        if !self.is_active() {
            tracing::debug!(?target, lifecycle = ?self.lifecycle, "scroll_to ignored");
            return false;
        }
        if self.locked {
            tracing::debug!(?target, "scroll_to ignored while locked");
            return false;
        }
        let Some(base) = self.resolve(&target) else {
            tracing::debug!(?target, "scroll_to target not found");
            return false;
        };

        let destination = (base + options.offset).clamp(0.0, self.limit());
        let duration = options
            .duration
            .unwrap_or_else(|| self.config.animation_duration());
        let easing = options.easing.unwrap_or_else(|| self.config.nav_easing());
        tracing::debug!(?target, destination, "Scrolling");
        self.animator.animate_to(destination, duration, easing, now);
        self.emit_if_changed();
        true
    }

    /// Relative scroll in rows
    ///
    /// Inertial while active; an immediate jump otherwise.
    pub fn scroll_by(&mut self, delta: f64) {
        if self.locked || self.viewport.is_none() {
            return;
        }
        let limit = self.limit();
        if self.is_active() {
            self.animator.scroll_by(delta, limit);
        } else {
            let position = (self.animator.current() + delta).clamp(0.0, limit);
            self.animator.set_position(position);
            self.emit_if_changed();
        }
    }

    /// Scroll by `lines` steps of the configured line count
    pub fn scroll_lines(&mut self, lines: i32) {
        let delta = lines as f64 * self.config.scroll_lines as f64 * self.config.multiplier;
        self.scroll_by(delta);
    }

    pub fn scroll_half_page(&mut self, down: bool) {
        let half = self
            .viewport
            .as_ref()
            .map(|v| (v.height / 2.0).floor().max(1.0))
            .unwrap_or(1.0);
        self.scroll_by(if down { half } else { -half });
    }

    /// Route a link activation
    ///
    /// In-page fragments become animated scrolls (or instant jumps before
    /// initialization); everything else is reported back to the caller.
    pub fn handle_anchor(&mut self, href: &str, now: Instant) -> AnchorOutcome {
        let id = match LinkTarget::parse(href) {
            LinkTarget::Fragment(id) => id,
            LinkTarget::External(url) => return AnchorOutcome::External(url),
            LinkTarget::Inert => return AnchorOutcome::Inert,
        };

        if self.is_active() {
            let options = ScrollToOptions {
                offset: self.config.nav_offset as f64,
                ..Default::default()
            };
            if self.scroll_to(ScrollTarget::Anchor(id.clone()), options, now) {
                return AnchorOutcome::Scrolled;
            }
            if self.locked {
                return AnchorOutcome::Inert;
            }
            tracing::debug!(anchor = %id, "Anchor target not found");
            return AnchorOutcome::Unresolved;
        }

        match &self.viewport {
            None => {
                tracing::debug!(anchor = %id, "Layout not measured, deferring jump");
                self.pending_anchor = Some(id);
                AnchorOutcome::Deferred
            }
            Some(_) => {
                if self.jump_to_anchor(&id) {
                    AnchorOutcome::Jumped
                } else {
                    tracing::debug!(anchor = %id, "Anchor target not found");
                    AnchorOutcome::Unresolved
                }
            }
        }
    }

    /// Advance the running motion and notify subscribers
    pub fn update(&mut self, now: Instant) -> ScrollState {
        if self.is_active() {
            let limit = self.limit();
            self.animator.update(now, limit);
        }
        self.emit_if_changed();
        self.state()
    }

    fn jump_to_anchor(&mut self, id: &str) -> bool {
        let Some(top) = self.viewport.as_ref().and_then(|v| v.resolve(id)) else {
            return false;
        };
        let position = (top + self.config.nav_offset as f64).clamp(0.0, self.limit());
        self.animator.set_position(position);
        self.emit_if_changed();
        true
    }

    fn apply_pending_anchor(&mut self) {
        if let Some(id) = self.pending_anchor.take() {
            if !self.jump_to_anchor(&id) {
                tracing::debug!(anchor = %id, "Deferred anchor target not found");
            }
        }
    }

    fn emit_if_changed(&mut self) {
        if self.viewport.is_none() {
            return;
        }
        let state = self.state();
        if self.last_emitted == Some(state) {
            return;
        }
        self.last_emitted = Some(state);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
    }
}

impl ScrollLock for SmoothScroll {
    fn scroll_offset(&self) -> f64 {
        self.offset()
    }

    fn lock(&mut self) {
        self.animator.cancel();
        self.locked = true;
    }

    fn unlock(&mut self) {
        self.locked = false;
    }

    fn restore(&mut self, offset: f64) {
        let position = offset.clamp(0.0, self.limit());
        self.animator.set_position(position);
        self.emit_if_changed();
    }
}
