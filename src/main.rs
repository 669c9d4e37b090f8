use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use pagenav::app::App;
use pagenav::config::Config;
use pagenav::error::{AppError, AppResult};
use pagenav::logging::init_logging;
use pagenav::model::{ModelBackend, PageSource, notification_channel, open_model};

/// Step through an ordered set of pages in the terminal.
#[derive(Debug, Parser)]
#[command(name = "pagenav", version)]
struct Cli {
    /// Page labels, in order
    labels: Vec<String>,

    /// Generate `Page 1..Page N` instead of taking labels
    #[arg(short = 'n', long = "pages", value_name = "N")]
    pages: Option<usize>,

    /// 1-based page to start on
    #[arg(short, long, value_name = "PAGE", default_value_t = 1)]
    start: usize,

    /// Page model backend (overrides the config file)
    #[arg(long, value_enum)]
    backend: Option<ModelBackend>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn page_source(&self) -> AppResult<PageSource> {
        match (self.pages, self.labels.is_empty()) {
            (Some(_), false) => Err(AppError::invalid_argument(
                "--pages cannot be combined with page labels",
            )),
            (Some(count), true) => Ok(PageSource::Numbered(count)),
            (None, _) => Ok(PageSource::Labels(self.labels.clone())),
        }
    }

    fn start_index(&self) -> usize {
        self.start.saturating_sub(1)
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        error!(error = %err, "pagenav exited with an error");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let mut config = match cli.config.as_ref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(backend) = cli.backend {
        config.model.backend = backend;
    }
    if init_logging(&config.log)? {
        info!(backend = config.model.backend.id(), "logging initialized");
    }

    let source = cli.page_source()?;
    let (notifier, notices) = notification_channel();
    let model = open_model(source, cli.start_index(), &config.model, notifier)?;

    let mut app = App::new_with_config(config);
    app.run(model, notices).await
}
