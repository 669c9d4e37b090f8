use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

use super::memory::InMemoryPageModel;
use super::traits::{ModelNotifier, Page, PageModel, PageSnapshot};

#[derive(Debug, Clone, PartialEq)]
enum ModelOp {
    PreviousPage,
    NextPage,
    GoToPage(usize),
    SetReorderable(bool),
    MovePage { from: usize, to: usize },
    OpenDocument(Vec<Page>),
}

#[derive(Debug, Clone, PartialEq)]
enum ModelRequest {
    Apply(ModelOp),
    Shutdown,
}

#[derive(Debug, Clone)]
struct PublishedState {
    snapshot: PageSnapshot,
    pages: Arc<[Page]>,
}

impl PublishedState {
    fn capture(model: &InMemoryPageModel) -> Self {
        Self {
            snapshot: model.snapshot(),
            pages: model.pages().into(),
        }
    }
}

/// Page model that lives on its own task.
///
/// Requests are queued and applied in order, after `latency` each. Queries see
/// the last state the task published, which is always at least as new as the
/// last notification sent.
pub struct ActorPageModel {
    request_tx: UnboundedSender<ModelRequest>,
    state_rx: watch::Receiver<PublishedState>,
    task: Option<JoinHandle<()>>,
}

impl ActorPageModel {
    pub fn spawn(
        model: InMemoryPageModel,
        latency: Duration,
        notifier: ModelNotifier,
    ) -> AppResult<Self> {
        let handle = Handle::try_current()
            .map_err(|_| AppError::unsupported("actor page model requires a tokio runtime"))?;
        let (request_tx, request_rx) = unbounded_channel();
        let (state_tx, state_rx) = watch::channel(PublishedState::capture(&model));
        let task = handle.spawn(model_actor_main(
            model, latency, request_rx, state_tx, notifier,
        ));
        info!(latency_ms = latency.as_millis() as u64, "page model actor started");

        Ok(Self {
            request_tx,
            state_rx,
            task: Some(task),
        })
    }

    /// Completes once every request sent so far has been applied or the actor
    /// is gone.
    pub async fn shutdown(mut self) -> AppResult<()> {
        let _ = self.request_tx.send(ModelRequest::Shutdown);
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        task.await
            .map_err(|err| AppError::model_unavailable(format!("page model actor failed: {err}")))
    }

    /// Queues a document load, applied after every earlier request.
    pub fn open_document(&self, pages: Vec<Page>) {
        self.request(ModelOp::OpenDocument(pages));
    }

    fn request(&self, op: ModelOp) {
        if let Err(err) = self.request_tx.send(ModelRequest::Apply(op)) {
            warn!(request = ?err.0, "page model actor is gone, request dropped");
        }
    }
}

impl PageModel for ActorPageModel {
    fn snapshot(&self) -> PageSnapshot {
        self.state_rx.borrow().snapshot
    }

    fn pages(&self) -> Vec<Page> {
        self.state_rx.borrow().pages.to_vec()
    }

    fn published(&self) -> (PageSnapshot, Vec<Page>) {
        let state = self.state_rx.borrow();
        (state.snapshot, state.pages.to_vec())
    }

    fn previous_page(&mut self) {
        self.request(ModelOp::PreviousPage);
    }

    fn next_page(&mut self) {
        self.request(ModelOp::NextPage);
    }

    fn go_to_page(&mut self, index: usize) {
        self.request(ModelOp::GoToPage(index));
    }

    fn set_reorderable(&mut self, reorderable: bool) {
        self.request(ModelOp::SetReorderable(reorderable));
    }

    fn move_page(&mut self, from: usize, to: usize) {
        self.request(ModelOp::MovePage { from, to });
    }
}

impl Drop for ActorPageModel {
    fn drop(&mut self) {
        let _ = self.request_tx.send(ModelRequest::Shutdown);
    }
}

async fn model_actor_main(
    mut model: InMemoryPageModel,
    latency: Duration,
    mut request_rx: UnboundedReceiver<ModelRequest>,
    state_tx: watch::Sender<PublishedState>,
    notifier: ModelNotifier,
) {
    while let Some(request) = request_rx.recv().await {
        let ModelRequest::Apply(op) = request else {
            break;
        };
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let revision = model.revision();
        match &op {
            ModelOp::PreviousPage => model.previous_page(),
            ModelOp::NextPage => model.next_page(),
            ModelOp::GoToPage(index) => model.go_to_page(*index),
            ModelOp::SetReorderable(reorderable) => model.set_reorderable(*reorderable),
            ModelOp::MovePage { from, to } => model.move_page(*from, *to),
            ModelOp::OpenDocument(pages) => model.open_document(pages.clone()),
        }
        if model.revision() == revision {
            debug!(?op, "page model request left state unchanged");
            continue;
        }

        let published = PublishedState::capture(&model);
        let snapshot = published.snapshot;
        state_tx.send_replace(published);
        if notifier.send(snapshot).is_err() {
            debug!("page model subscriber dropped, stopping actor");
            break;
        }
    }
    info!("page model actor stopped");
}
