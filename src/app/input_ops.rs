use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::command::Command;
use crate::controller::PageMode;
use crate::error::AppResult;
use crate::input::{count_digit, map_key_to_command_with_preset};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        mode: PageMode,
        session: &mut impl TerminalSurface,
        needs_redraw: &mut bool,
    ) -> AppResult<Option<Command>> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                *needs_redraw = true;
                Ok(self.handle_key_event(key, mode))
            }
            Event::Resize(_, _) => {
                session.clear()?;
                *needs_redraw = true;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Folds a typed count into `g`/`G`, so `12G` becomes a jump to page 12.
    /// Any other key drops the pending count.
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent, mode: PageMode) -> Option<Command> {
        if let Some(digit) = count_digit(key, self.keymap) {
            self.state.push_count_digit(digit);
            return None;
        }

        let count = self.state.take_count();
        let command = map_key_to_command_with_preset(key, mode, self.keymap)?;
        Some(match (command, count) {
            (Command::FirstPage | Command::LastPage, Some(page)) => Command::GotoPage { page },
            (command, _) => command,
        })
    }
}
