//! Smooth scrolling for the portfolio page
//!
//! One `SmoothScroll` controller owns the page offset. Keys and the mouse
//! wheel feed it inertial deltas, navigation links become eased `scroll_to`
//! animations, and subscribers (the navbar, the gradient background) receive
//! a `ScrollState` whenever the position changes.
//!
//! # Layers
//!
//! ## L4 Atomic Layer
//! - `easing` - Preset curves and cubic bezier
//! - `timing` - Progress, interpolation and frame damping
//! - `config` - Configuration helpers (types re-exported from folio-core)
//! - `viewport` - Measured page height and section anchors
//! - `state` - Offset/limit snapshot with clamped progress
//!
//! ## L3 Molecular Layer
//! - `animation` - Inertial and timed motion
//!
//! ## L2 Organism Layer
//! - `controller` - Lifecycle, anchor routing and subscriptions
//!
//! # Usage
//!
//! ```ignore
//! use folio_tui::scroll::{ScrollOptions, SmoothScroll, Viewport};
//!
//! let mut scroll = SmoothScroll::new(config.ui.scroll.clone());
//! scroll.on_scroll(|state| println!("{:.0}%", state.progress()));
//! scroll.initialize(Some(Viewport::new(40.0, 300.0)), ScrollOptions::default());
//!
//! scroll.handle_anchor("#projects", Instant::now());
//! // every frame
//! scroll.update(Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod state;
pub mod timing;
pub mod viewport;

// L3 Molecular Layer
pub mod animation;

// L2 Organism Layer
pub mod controller;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use controller::{
    AnchorOutcome, Lifecycle, ListenerId, ScrollOptions, ScrollTarget, ScrollToOptions,
    SmoothScroll,
};
pub use easing::{CubicBezier, Easing, EasingType, EasingTypeExt};
pub use state::ScrollState;
pub use viewport::{Anchor, Viewport};
