use crate::app::AppState;
use crate::controller::{MoveDirection, NavOutcome, PageController, PresentationSurface};
use crate::error::{AppError, AppResult};
use crate::model::PageModel;

use super::types::{ActionId, CommandOutcome};

fn requested(outcome: NavOutcome) -> CommandOutcome {
    match outcome {
        NavOutcome::Requested => CommandOutcome::Requested,
        NavOutcome::Noop => CommandOutcome::Noop,
    }
}

pub(crate) fn next_page<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
) -> CommandOutcome {
    let snapshot = controller.model().snapshot();
    let outcome = controller.go_to_next_page();
    let message = match outcome {
        NavOutcome::Requested => format!(
            "requested page {}/{}",
            snapshot.clamped_index() + 2,
            snapshot.page_count
        ),
        NavOutcome::Noop if snapshot.is_empty() => "document has no pages".to_string(),
        NavOutcome::Noop => format!(
            "already at last page ({}/{})",
            snapshot.page_count, snapshot.page_count
        ),
    };
    app.status.record(ActionId::NextPage, message);
    requested(outcome)
}

pub(crate) fn prev_page<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
) -> CommandOutcome {
    let snapshot = controller.model().snapshot();
    let outcome = controller.go_to_previous_page();
    let message = match outcome {
        NavOutcome::Requested => {
            format!(
                "requested page {}/{}",
                snapshot.clamped_index(),
                snapshot.page_count
            )
        }
        NavOutcome::Noop if snapshot.is_empty() => "document has no pages".to_string(),
        NavOutcome::Noop => "already at first page (1)".to_string(),
    };
    app.status.record(ActionId::PrevPage, message);
    requested(outcome)
}

pub(crate) fn first_page<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
) -> CommandOutcome {
    let snapshot = controller.model().snapshot();
    let outcome = controller.go_to_first_page();
    let message = match outcome {
        NavOutcome::Requested => format!("requested page 1/{}", snapshot.page_count),
        NavOutcome::Noop if snapshot.is_empty() => "document has no pages".to_string(),
        NavOutcome::Noop => "already at first page (1)".to_string(),
    };
    app.status.record(ActionId::FirstPage, message);
    requested(outcome)
}

pub(crate) fn last_page<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
) -> CommandOutcome {
    let snapshot = controller.model().snapshot();
    let outcome = controller.go_to_last_page();
    let count = snapshot.page_count;
    let message = match outcome {
        NavOutcome::Requested => format!("requested page {count}/{count}"),
        NavOutcome::Noop if snapshot.is_empty() => "document has no pages".to_string(),
        NavOutcome::Noop => format!("already at last page ({count}/{count})"),
    };
    app.status.record(ActionId::LastPage, message);
    requested(outcome)
}

pub(crate) fn goto_page<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
    page: usize,
) -> AppResult<CommandOutcome> {
    app.status.last_action_id = Some(ActionId::GotoPage);
    if page < 1 {
        return Err(AppError::invalid_argument("page number must be >= 1"));
    }
    let count = controller.model().snapshot().page_count;
    let outcome = controller.go_to_page(page - 1)?;
    let message = match outcome {
        NavOutcome::Requested => format!("requested page {page}/{count}"),
        NavOutcome::Noop => format!("already at page {page}/{count}"),
    };
    app.status.record(ActionId::GotoPage, message);
    Ok(requested(outcome))
}

pub(crate) fn toggle_reorder_mode<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
) -> CommandOutcome {
    let target = if controller.reorder_mode_active() {
        "off"
    } else {
        "on"
    };
    let outcome = controller.toggle_reorder_mode();
    app.status.record(
        ActionId::ToggleReorderMode,
        format!("reorder mode requested: {target}"),
    );
    requested(outcome)
}

pub(crate) fn leave_reorder_mode<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
) -> CommandOutcome {
    app.pending_count = None;
    if !controller.reorder_mode_active() {
        app.status.record(ActionId::Cancel, "nothing to cancel");
        return CommandOutcome::Noop;
    }
    let outcome = controller.toggle_reorder_mode();
    app.status
        .record(ActionId::Cancel, "reorder mode requested: off");
    requested(outcome)
}

pub(crate) fn move_current_page<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
    direction: MoveDirection,
) -> CommandOutcome {
    let action_id = match direction {
        MoveDirection::Earlier => ActionId::MovePageEarlier,
        MoveDirection::Later => ActionId::MovePageLater,
    };
    let was_reordering = controller.reorder_mode_active();
    let outcome = controller.move_current_page(direction);
    let message = match (outcome, was_reordering) {
        (NavOutcome::Requested, _) => match direction {
            MoveDirection::Earlier => "moving page earlier".to_string(),
            MoveDirection::Later => "moving page later".to_string(),
        },
        (NavOutcome::Noop, false) => "pages can only be moved in reorder mode".to_string(),
        (NavOutcome::Noop, true) => "page is already at the edge".to_string(),
    };
    app.status.record(action_id, message);
    requested(outcome)
}

pub(crate) fn toggle_debug_status(app: &mut AppState) -> CommandOutcome {
    app.debug_status_visible = !app.debug_status_visible;
    let state = if app.debug_status_visible { "on" } else { "off" };
    app.status
        .record(ActionId::DebugStatusToggle, format!("debug status: {state}"));
    CommandOutcome::Applied
}
