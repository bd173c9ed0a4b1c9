//! Key mapping

use crossterm::event::{KeyCode, KeyModifiers};

/// Map a key press to an action, vim-style keys included
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Some(Action::Up),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('s') => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (Ctrl+C always quits)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        }
    } else {
        key_to_action(key)
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Selection
    Select,
    Submit,
    Back,

    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_h_maps_to_left() {
        assert_eq!(key_to_action(KeyCode::Char('h')), Some(Action::Left));
    }

    #[test]
    fn space_and_enter_select() {
        assert_eq!(key_to_action(KeyCode::Enter), Some(Action::Select));
        assert_eq!(key_to_action(KeyCode::Char(' ')), Some(Action::Select));
    }

    #[test]
    fn s_submits() {
        assert_eq!(key_to_action(KeyCode::Char('s')), Some(Action::Submit));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn no_modifier_uses_plain_keys() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('k'), KeyModifiers::NONE),
            Some(Action::Up)
        );
    }
}
