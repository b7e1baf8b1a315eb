//! Keyboard routing.
//!
//! Pure mapping from crossterm key events to `NavAction`s so the binding
//! table is testable without a terminal.

use crate::core::actions::NavAction;
use crossterm::event::{KeyCode, KeyModifiers};

/// Resolve a key press to a semantic action
pub fn route_key(code: KeyCode, modifiers: KeyModifiers) -> NavAction {
    // Ctrl+C always quits, regardless of other bindings
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return NavAction::Quit;
    }

    match code {
        KeyCode::Tab | KeyCode::Right => NavAction::NextTab,
        KeyCode::BackTab | KeyCode::Left => NavAction::PrevTab,
        KeyCode::Char(c @ '1'..='9') => NavAction::SelectTab(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => NavAction::SelectionUp,
        KeyCode::Down | KeyCode::Char('j') => NavAction::SelectionDown,
        KeyCode::Enter => NavAction::Activate,
        KeyCode::Esc | KeyCode::Backspace => NavAction::Back,
        KeyCode::Home => NavAction::Home,
        KeyCode::Char('t') => NavAction::CycleTheme,
        KeyCode::Char('q') => NavAction::Quit,
        _ => NavAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys() {
        assert_eq!(route_key(KeyCode::Tab, KeyModifiers::NONE), NavAction::NextTab);
        assert_eq!(
            route_key(KeyCode::BackTab, KeyModifiers::SHIFT),
            NavAction::PrevTab
        );
        assert_eq!(
            route_key(KeyCode::Char('2'), KeyModifiers::NONE),
            NavAction::SelectTab(1)
        );
    }

    #[test]
    fn test_selection_and_back_keys() {
        assert_eq!(route_key(KeyCode::Up, KeyModifiers::NONE), NavAction::SelectionUp);
        assert_eq!(
            route_key(KeyCode::Char('j'), KeyModifiers::NONE),
            NavAction::SelectionDown
        );
        assert_eq!(route_key(KeyCode::Enter, KeyModifiers::NONE), NavAction::Activate);
        assert_eq!(route_key(KeyCode::Esc, KeyModifiers::NONE), NavAction::Back);
        assert_eq!(route_key(KeyCode::Home, KeyModifiers::NONE), NavAction::Home);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(route_key(KeyCode::Char('q'), KeyModifiers::NONE), NavAction::Quit);
        assert_eq!(
            route_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            NavAction::Quit
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(route_key(KeyCode::Char('x'), KeyModifiers::NONE), NavAction::None);
        assert_eq!(route_key(KeyCode::F(5), KeyModifiers::NONE), NavAction::None);
    }
}
