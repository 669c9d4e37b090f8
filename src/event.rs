use crossterm::event::Event;

use crate::command::Command;
use crate::model::PageSnapshot;

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    /// Relayed from the page model's notification channel.
    ModelChanged(PageSnapshot),
}
