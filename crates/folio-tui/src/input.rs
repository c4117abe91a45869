use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    /// Activate the nth navbar link
    JumpToNav(usize),
    NextLink,
    PrevLink,
    Activate,
    CycleFilter,
    ToggleLanguage,
    ToggleMenu,
    Help,
    /// Close the modal, help, or menu
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = KeyBinding::from_event(&key);

    if app.mode == Mode::Help {
        // Any key leaves help, Ctrl+C still quits
        return match keymap.get(&binding) {
            Some(Action::Quit) if key.code != KeyCode::Char('q') => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    if app.modal.is_open() {
        return match keymap.get(&binding) {
            Some(Action::Quit) if key.code == KeyCode::Char('q') => Action::ExitMode,
            Some(Action::Quit) => Action::Quit,
            Some(Action::ExitMode) => Action::ExitMode,
            // Page scrolling is locked underneath the modal
            _ => Action::None,
        };
    }

    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap.get_pending_g_action().cloned().unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}
