use crossterm::event::KeyCode;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::models::Entry;
use crate::roster::Roster;
use crate::symbols::SymbolTable;

use super::helpers::expand_tabs;
use super::keymap::Action;
use super::render::render_body;

/// Window title while nothing is open.
const APP_TITLE: &str = "Characters";
/// Separates the app title from the open character in the window title.
const TITLE_SEPARATOR: &str = " | ";

/// Whether the loop should keep reading keys after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session state: a cursor over the roster plus the character that is open.
#[derive(Debug, Clone)]
pub struct App {
    pub(crate) roster: Roster,
    pub(crate) symbols: SymbolTable,
    pub(crate) cursor: usize,
    pub(crate) selected: usize,
    pub(crate) chosen: bool,
    pub(crate) current: Entry,
}

impl App {
    pub fn new(roster: Roster, symbols: SymbolTable) -> Self {
        Self {
            roster,
            symbols,
            cursor: 0,
            selected: 0,
            chosen: false,
            current: Entry::default(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_chosen(&self) -> bool {
        self.chosen
    }

    pub fn current(&self) -> &Entry {
        &self.current
    }

    /// Handle a raw key press. Returns `true` once the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match Action::from_key(code) {
            Some(action) => self.apply(action) == Flow::Quit,
            None => {
                log::trace!("ignoring key {:?}", code);
                false
            }
        }
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::Up => self.move_cursor_up(),
            Action::Down => self.move_cursor_down(),
            Action::Confirm => self.toggle_current(),
        }
        log::debug!(
            "{:?}: cursor={} selected={} chosen={}",
            action,
            self.cursor,
            self.selected,
            self.chosen
        );
        Flow::Continue
    }

    fn move_cursor_up(&mut self) {
        self.cursor = if self.cursor > 0 {
            self.cursor - 1
        } else {
            self.roster.len() - 1
        };
    }

    fn move_cursor_down(&mut self) {
        self.cursor = if self.cursor + 1 < self.roster.len() {
            self.cursor + 1
        } else {
            0
        };
    }

    /// Confirming the character that is already open closes it; anything else
    /// opens the character under the cursor, replacing whatever was open.
    fn toggle_current(&mut self) {
        if self.selected == self.cursor && self.current.exists() {
            self.chosen = !self.chosen;
            self.current = Entry::default();
        } else {
            self.chosen = true;
            self.selected = self.cursor;
            self.current = self.roster[self.cursor].clone();
        }
    }

    /// Window title for the current state.
    pub fn title(&self) -> String {
        if self.chosen {
            format!(
                "{}{}{}{}",
                APP_TITLE,
                TITLE_SEPARATOR,
                self.current.sex_symbol(&self.symbols),
                self.current.display_name()
            )
        } else {
            APP_TITLE.to_string()
        }
    }

    /// The full text body, tabs included.
    pub fn body(&self) -> String {
        render_body(self)
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let text = expand_tabs(&self.body());
        frame.render_widget(Paragraph::new(text), frame.area());
    }
}
