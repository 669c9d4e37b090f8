use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::command::{ActionId, CommandOutcome, dispatch};
use crate::controller::PageController;
use crate::error::{AppError, AppResult};
use crate::event::DomainEvent;
use crate::model::{ModelNotices, PageModel};
use crate::ui::PagePanel;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    session: TerminalSession,
    needs_redraw: bool,
    loop_event_tx: UnboundedSender<DomainEvent>,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Break,
}

impl App {
    pub async fn run<M: PageModel>(&mut self, model: M, notices: ModelNotices) -> AppResult<()> {
        let mut controller = PageController::new(model, PagePanel::default());
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn(notices);
        let mut runtime = LoopRuntime {
            session,
            needs_redraw: true,
            loop_event_tx,
            loop_event_rx,
            loop_event_runtime,
        };
        info!(backend = self.backend_name(), "event loop started");

        let result = self.drive(&mut controller, &mut runtime).await;

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        info!("event loop stopped");
        result
    }

    async fn drive<M: PageModel>(
        &mut self,
        controller: &mut PageController<M, PagePanel>,
        runtime: &mut LoopRuntime,
    ) -> AppResult<()> {
        loop {
            if runtime.needs_redraw {
                self.render_frame(&mut runtime.session, controller)?;
                runtime.needs_redraw = false;
            }

            let Some(event) = runtime.loop_event_rx.recv().await else {
                return Ok(());
            };
            let control = self.handle_domain_event(
                event,
                controller,
                &mut runtime.session,
                &runtime.loop_event_tx,
                &mut runtime.needs_redraw,
            )?;
            if control == LoopControl::Break {
                return Ok(());
            }
        }
    }

    pub(crate) fn handle_domain_event<M: PageModel>(
        &mut self,
        event: DomainEvent,
        controller: &mut PageController<M, PagePanel>,
        session: &mut impl TerminalSurface,
        loop_event_tx: &UnboundedSender<DomainEvent>,
        needs_redraw: &mut bool,
    ) -> AppResult<LoopControl> {
        match event {
            DomainEvent::Input(event) => {
                let mode = controller.page_mode();
                if let Some(command) = self.handle_input_event(event, mode, session, needs_redraw)? {
                    let _ = loop_event_tx.send(DomainEvent::Command(command));
                }
            }
            DomainEvent::InputError(message) => {
                self.state
                    .status
                    .record(ActionId::Input, format!("input error: {message}"));
                *needs_redraw = true;
            }
            DomainEvent::Command(command) => {
                match dispatch(&mut self.state, controller, command) {
                    Ok(CommandOutcome::QuitRequested) => return Ok(LoopControl::Break),
                    Ok(_) => {}
                    Err(AppError::InvalidArgument(message)) => {
                        self.state.status.message = message;
                    }
                    Err(err) => return Err(err),
                }
                *needs_redraw = true;
            }
            DomainEvent::ModelChanged(snapshot) => {
                controller.on_model_changed(snapshot);
                // The message stays with the command that caused the change.
                self.state.status.last_action_id = Some(ActionId::ModelChanged);
                self.state.notices_seen += 1;
                debug!(notices = self.state.notices_seen, "model change applied");
                *needs_redraw = true;
            }
        }
        Ok(LoopControl::Continue)
    }
}
