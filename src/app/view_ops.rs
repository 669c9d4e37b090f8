use crate::controller::PageController;
use crate::error::AppResult;
use crate::model::PageModel;
use crate::ui::{PagePanel, draw_page_panel};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame<M: PageModel>(
        &self,
        session: &mut impl TerminalSurface,
        controller: &PageController<M, PagePanel>,
    ) -> AppResult<()> {
        let backend_name = self.backend_name();

        session.draw(|frame| {
            draw_page_panel(frame, controller.surface(), &self.state, backend_name);
        })?;
        Ok(())
    }
}
