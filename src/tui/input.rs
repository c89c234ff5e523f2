//! Key bindings for the interactive widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move through the length presets.
    Step(isize),
    /// Jump to the preset at this index.
    Preset(usize),
    ToggleNumbers,
    ToggleSymbols,
    Regenerate,
    Copy,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Step(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Step(1)),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Preset(c as usize - '1' as usize)),
        KeyCode::Char('n') => Some(Action::ToggleNumbers),
        KeyCode::Char('s') => Some(Action::ToggleSymbols),
        KeyCode::Char('r') | KeyCode::Char(' ') => Some(Action::Regenerate),
        KeyCode::Char('c') | KeyCode::Enter => Some(Action::Copy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn bindings() {
        assert_eq!(action_for(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Left)), Some(Action::Step(-1)));
        assert_eq!(action_for(key(KeyCode::Char('l'))), Some(Action::Step(1)));
        assert_eq!(action_for(key(KeyCode::Char('1'))), Some(Action::Preset(0)));
        assert_eq!(action_for(key(KeyCode::Char('5'))), Some(Action::Preset(4)));
        assert_eq!(action_for(key(KeyCode::Char('n'))), Some(Action::ToggleNumbers));
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Copy));
        assert_eq!(action_for(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_but_c_copies() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char('c'))), Some(Action::Copy));
    }
}
