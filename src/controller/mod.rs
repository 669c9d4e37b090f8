mod core;
mod presentation;
mod surface;

#[cfg(test)]
mod tests;

pub use core::{MoveDirection, NavOutcome, PageController};
pub use presentation::{ContentView, PageMode, Position, Presentation, page_label_text};
pub use surface::PresentationSurface;
