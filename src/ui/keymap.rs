use crossterm::event::KeyCode;

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    /// Open the highlighted character, or close it if it is already open.
    Confirm,
}

impl Action {
    /// Map a key to an action. Letters are case-sensitive; unmapped keys yield
    /// `None` and are ignored by the session.
    pub fn from_key(code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('w') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('s') => Some(Action::Down),
            KeyCode::Enter
            | KeyCode::Char(' ')
            | KeyCode::Left
            | KeyCode::Char('a')
            | KeyCode::Right
            | KeyCode::Char('d') => Some(Action::Confirm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bound_key() {
        let cases = [
            (KeyCode::Char('q'), Action::Quit),
            (KeyCode::Esc, Action::Quit),
            (KeyCode::Up, Action::Up),
            (KeyCode::Char('w'), Action::Up),
            (KeyCode::Down, Action::Down),
            (KeyCode::Char('s'), Action::Down),
            (KeyCode::Enter, Action::Confirm),
            (KeyCode::Char(' '), Action::Confirm),
            (KeyCode::Left, Action::Confirm),
            (KeyCode::Char('a'), Action::Confirm),
            (KeyCode::Right, Action::Confirm),
            (KeyCode::Char('d'), Action::Confirm),
        ];
        for (code, action) in cases {
            assert_eq!(Action::from_key(code), Some(action), "{code:?}");
        }
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(Action::from_key(KeyCode::Char('x')), None);
        assert_eq!(Action::from_key(KeyCode::Char('Q')), None);
        assert_eq!(Action::from_key(KeyCode::Char('W')), None);
        assert_eq!(Action::from_key(KeyCode::Tab), None);
        assert_eq!(Action::from_key(KeyCode::PageDown), None);
    }
}
