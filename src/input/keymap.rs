use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::controller::PageMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, mode: PageMode) -> Option<Command> {
    map_key_to_command_with_preset(key, mode, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    mode: PageMode,
    preset: KeymapPreset,
) -> Option<Command> {
    let command = match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Emacs => map_key_emacs(key),
    }?;

    match command {
        Command::MovePageEarlier | Command::MovePageLater if mode == PageMode::Normal => None,
        command => Some(command),
    }
}

/// Digit keys typed ahead of `g`/`G` form a page count. Only the default
/// preset reads counts.
pub fn count_digit(key: KeyEvent, preset: KeymapPreset) -> Option<u32> {
    if preset != KeymapPreset::Default
        || key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => ch.to_digit(10),
        _ => None,
    }
}

fn map_key_default(key: KeyEvent) -> Option<Command> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Right | KeyCode::PageDown => Some(Command::NextPage),
        KeyCode::Char('k') | KeyCode::Left | KeyCode::PageUp => Some(Command::PrevPage),
        KeyCode::Char('g') | KeyCode::Home => Some(Command::FirstPage),
        KeyCode::Char('G') | KeyCode::End => Some(Command::LastPage),
        KeyCode::Char('r') => Some(Command::ToggleReorderMode),
        KeyCode::Char('J') => Some(Command::MovePageLater),
        KeyCode::Char('K') => Some(Command::MovePageEarlier),
        KeyCode::Char('D') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_key_emacs(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('<') => Some(Command::FirstPage),
            KeyCode::Char('>') => Some(Command::LastPage),
            KeyCode::Char('n') => Some(Command::MovePageLater),
            KeyCode::Char('p') => Some(Command::MovePageEarlier),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Command::NextPage),
            KeyCode::Char('p') => Some(Command::PrevPage),
            KeyCode::Char('r') => Some(Command::ToggleReorderMode),
            KeyCode::Char('g') => Some(Command::Cancel),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    map_key_default(key)
}
