use crate::config::Config;
use crate::error::AppResult;
use crate::input::KeymapPreset;

use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub config: Config,
    pub(super) keymap: KeymapPreset,
}

impl App {
    pub fn new() -> AppResult<Self> {
        let config = Config::load()?;
        Ok(Self::new_with_config(config))
    }

    pub fn new_with_config(config: Config) -> Self {
        let state = AppState {
            debug_status_visible: config.ui.debug_status,
            ..AppState::default()
        };
        let keymap = KeymapPreset::parse(&config.keymap.preset);
        Self {
            state,
            config,
            keymap,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.config.model.backend.id()
    }
}
