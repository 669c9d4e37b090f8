use tracing::{debug, trace};

use crate::error::{AppError, AppResult};
use crate::model::{PageModel, PageSnapshot};

use super::presentation::{PageMode, Position, Presentation};
use super::surface::PresentationSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A request went to the model. It may not have been applied yet.
    Requested,
    Noop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Earlier,
    Later,
}

/// Binds one page model to one presentation surface.
///
/// Gestures only ever become model requests. The surface is written by
/// [`refresh`](Self::refresh) and nothing else, so what is on screen is always
/// derived from the model's published state.
pub struct PageController<M, S> {
    model: M,
    surface: S,
    reorder_mode_active: bool,
}

impl<M: PageModel, S: PresentationSurface> PageController<M, S> {
    pub fn new(model: M, surface: S) -> Self {
        let mut controller = Self {
            model,
            surface,
            reorder_mode_active: false,
        };
        controller.refresh();
        controller
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// For the model's owner. Changes made here reach the surface through the
    /// model's notifications like any other.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn reorder_mode_active(&self) -> bool {
        self.reorder_mode_active
    }

    pub fn page_mode(&self) -> PageMode {
        PageMode::from_reorderable(self.reorder_mode_active)
    }

    pub fn position(&self) -> Position {
        Position::of(self.model.snapshot())
    }

    pub fn go_to_previous_page(&mut self) -> NavOutcome {
        let snapshot = self.model.snapshot();
        if !snapshot.can_go_previous() {
            debug!(?snapshot, "previous page unavailable");
            return NavOutcome::Noop;
        }
        self.model.previous_page();
        NavOutcome::Requested
    }

    pub fn go_to_next_page(&mut self) -> NavOutcome {
        let snapshot = self.model.snapshot();
        if !snapshot.can_go_next() {
            debug!(?snapshot, "next page unavailable");
            return NavOutcome::Noop;
        }
        self.model.next_page();
        NavOutcome::Requested
    }

    pub fn go_to_first_page(&mut self) -> NavOutcome {
        let snapshot = self.model.snapshot();
        if !snapshot.can_go_previous() {
            return NavOutcome::Noop;
        }
        self.model.go_to_page(0);
        NavOutcome::Requested
    }

    pub fn go_to_last_page(&mut self) -> NavOutcome {
        let snapshot = self.model.snapshot();
        if !snapshot.can_go_next() {
            return NavOutcome::Noop;
        }
        self.model.go_to_page(snapshot.page_count - 1);
        NavOutcome::Requested
    }

    pub fn go_to_page(&mut self, index: usize) -> AppResult<NavOutcome> {
        let snapshot = self.model.snapshot();
        if index >= snapshot.page_count {
            return Err(AppError::invalid_argument(format!(
                "page {} is outside 1..={}",
                index + 1,
                snapshot.page_count
            )));
        }
        if index == snapshot.clamped_index() {
            return Ok(NavOutcome::Noop);
        }
        self.model.go_to_page(index);
        Ok(NavOutcome::Requested)
    }

    /// Asks the model for the opposite of the mode currently shown. The shown
    /// mode only changes once the model notifies.
    pub fn toggle_reorder_mode(&mut self) -> NavOutcome {
        let requested = !self.reorder_mode_active;
        debug!(requested, "requesting reorder mode change");
        self.model.set_reorderable(requested);
        NavOutcome::Requested
    }

    pub fn move_current_page(&mut self, direction: MoveDirection) -> NavOutcome {
        if !self.reorder_mode_active {
            debug!(?direction, "page move ignored outside reorder mode");
            return NavOutcome::Noop;
        }
        let snapshot = self.model.snapshot();
        let from = snapshot.clamped_index();
        let to = match direction {
            MoveDirection::Earlier if snapshot.can_go_previous() => from - 1,
            MoveDirection::Later if snapshot.can_go_next() => from + 1,
            _ => return NavOutcome::Noop,
        };
        self.model.move_page(from, to);
        NavOutcome::Requested
    }

    pub fn on_model_changed(&mut self, notice: PageSnapshot) {
        trace!(?notice, "page model notification");
        self.refresh();
    }

    /// Rewrites every surface element from the model's current state.
    pub fn refresh(&mut self) -> Presentation {
        let (snapshot, pages) = self.model.published();
        self.reorder_mode_active = snapshot.reorderable;
        let presentation = Presentation::derive(snapshot, pages);
        self.surface.apply(&presentation);
        presentation
    }
}
