use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use folio_core::config::UiConfig;
use image::DynamicImage;

use crate::scroll::ScrollConfigExt;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll timeout while something is animating
    animation_tick: Duration,
}

/// Result of a background image decode
#[derive(Debug)]
pub enum ImageLoadResult {
    Success {
        /// Asset reference as written in the content
        asset: String,
        image: Arc<DynamicImage>,
    },
    Failure {
        asset: String,
        error: String,
    },
}

impl EventHandler {
    /// Idle and animation poll timeouts taken from `[ui]`
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            tick_rate: Duration::from_millis(ui.tick_rate_ms),
            animation_tick: ui.scroll.animation_tick_duration(),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the short animation timeout
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        let event = match event::read()? {
            // Ignore release/repeat reports some terminals send
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        };
        Ok(event)
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Nothing happened within the poll timeout
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeouts_follow_config() {
        let mut ui = UiConfig::default();
        ui.tick_rate_ms = 250;
        ui.scroll.animation_fps = 50;

        let handler = EventHandler::from_config(&ui);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
        assert_eq!(handler.animation_tick, Duration::from_millis(20));

        ui.scroll.animation_fps = 0;
        let handler = EventHandler::from_config(&ui);
        assert_eq!(handler.animation_tick, Duration::from_millis(16));
    }
}
