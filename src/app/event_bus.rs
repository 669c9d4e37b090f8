use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::event::DomainEvent;
use crate::model::ModelNotices;

pub(crate) struct EventBusRuntime {
    tasks: Vec<JoinHandle<()>>,
}

impl EventBusRuntime {
    pub(crate) fn spawn(
        notices: ModelNotices,
    ) -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let tasks = vec![
            spawn_input_task(tx.clone()),
            spawn_notice_relay(notices, tx.clone()),
        ];
        (tx, rx, Self { tasks })
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for EventBusRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}

/// Forwards model notifications onto the loop bus in arrival order.
pub(crate) fn spawn_notice_relay(
    mut notices: ModelNotices,
    tx: UnboundedSender<DomainEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(snapshot) = notices.recv().await {
            if tx.send(DomainEvent::ModelChanged(snapshot)).is_err() {
                return;
            }
        }
        warn!("page model notification channel closed");
    })
}
