use crate::command::ActionId;

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

impl StatusState {
    pub fn record(&mut self, action_id: ActionId, message: impl Into<String>) {
        self.last_action_id = Some(action_id);
        self.message = message.into();
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub debug_status_visible: bool,
    /// Digits typed ahead of a jump key, e.g. `12` in `12G`.
    pub pending_count: Option<usize>,
    pub notices_seen: u64,
    pub status: StatusState,
}

impl AppState {
    pub fn push_count_digit(&mut self, digit: u32) {
        let current = self.pending_count.unwrap_or(0);
        self.pending_count = Some(
            current
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }

    pub fn take_count(&mut self) -> Option<usize> {
        self.pending_count.take()
    }
}
