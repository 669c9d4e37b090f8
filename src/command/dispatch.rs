use tracing::debug;

use crate::app::AppState;
use crate::controller::{MoveDirection, PageController, PresentationSurface};
use crate::error::AppResult;
use crate::model::PageModel;

use super::core::{
    first_page, goto_page, last_page, leave_reorder_mode, move_current_page, next_page,
    prev_page, toggle_debug_status, toggle_reorder_mode,
};
use super::types::{ActionId, Command, CommandOutcome};

pub fn dispatch<M: PageModel, S: PresentationSurface>(
    app: &mut AppState,
    controller: &mut PageController<M, S>,
    cmd: Command,
) -> AppResult<CommandOutcome> {
    let action_id = cmd.action_id();
    let outcome = match cmd {
        Command::NextPage => next_page(app, controller),
        Command::PrevPage => prev_page(app, controller),
        Command::FirstPage => first_page(app, controller),
        Command::LastPage => last_page(app, controller),
        Command::GotoPage { page } => goto_page(app, controller, page)?,
        Command::ToggleReorderMode => toggle_reorder_mode(app, controller),
        Command::MovePageEarlier => move_current_page(app, controller, MoveDirection::Earlier),
        Command::MovePageLater => move_current_page(app, controller, MoveDirection::Later),
        Command::DebugStatusToggle => toggle_debug_status(app),
        Command::Cancel => leave_reorder_mode(app, controller),
        Command::Quit => {
            app.status.record(ActionId::Quit, "quit requested");
            CommandOutcome::QuitRequested
        }
    };
    debug!(action = action_id.as_str(), ?outcome, "command dispatched");
    Ok(outcome)
}
