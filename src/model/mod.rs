use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::config::ModelConfig;
use crate::error::AppResult;

mod actor;
mod memory;
mod traits;

pub use actor::ActorPageModel;
pub use memory::{InMemoryPageModel, ReorderPolicy};
pub use traits::{
    ModelNotices, ModelNotifier, Page, PageId, PageModel, PageSize, PageSnapshot,
    notification_channel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    #[default]
    Local,
    Actor,
}

impl ModelBackend {
    pub fn id(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Actor => "actor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Labels(Vec<String>),
    Numbered(usize),
}

impl PageSource {
    fn into_model(self, policy: ReorderPolicy) -> InMemoryPageModel {
        match self {
            Self::Labels(labels) => InMemoryPageModel::from_labels(labels, policy),
            Self::Numbered(count) => InMemoryPageModel::numbered(count, policy),
        }
    }
}

pub fn open_model(
    source: PageSource,
    start_index: usize,
    config: &ModelConfig,
    notifier: ModelNotifier,
) -> AppResult<Box<dyn PageModel>> {
    let policy = ReorderPolicy {
        min_pages: config.min_pages_for_reorder,
    };
    let model = source.into_model(policy).with_current_index(start_index);
    info!(
        backend = config.backend.id(),
        page_count = model.snapshot().page_count,
        "opening page model"
    );

    match config.backend {
        ModelBackend::Local => Ok(Box::new(model.with_notifier(notifier))),
        ModelBackend::Actor => {
            let latency = Duration::from_millis(config.latency_ms);
            ActorPageModel::spawn(model, latency, notifier)
                .map(|model| Box::new(model) as Box<dyn PageModel>)
        }
    }
}
