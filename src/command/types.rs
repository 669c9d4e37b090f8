#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// 1-based, as typed.
    GotoPage {
        page: usize,
    },
    ToggleReorderMode,
    MovePageEarlier,
    MovePageLater,
    DebugStatusToggle,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    GotoPage,
    ToggleReorderMode,
    MovePageEarlier,
    MovePageLater,
    DebugStatusToggle,
    Cancel,
    Quit,
    Input,
    ModelChanged,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NextPage => "next-page",
            Self::PrevPage => "prev-page",
            Self::FirstPage => "first-page",
            Self::LastPage => "last-page",
            Self::GotoPage => "goto-page",
            Self::ToggleReorderMode => "toggle-reorder-mode",
            Self::MovePageEarlier => "move-page-earlier",
            Self::MovePageLater => "move-page-later",
            Self::DebugStatusToggle => "debug-status-toggle",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::ModelChanged => "model-changed",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::NextPage => ActionId::NextPage,
            Self::PrevPage => ActionId::PrevPage,
            Self::FirstPage => ActionId::FirstPage,
            Self::LastPage => ActionId::LastPage,
            Self::GotoPage { .. } => ActionId::GotoPage,
            Self::ToggleReorderMode => ActionId::ToggleReorderMode,
            Self::MovePageEarlier => ActionId::MovePageEarlier,
            Self::MovePageLater => ActionId::MovePageLater,
            Self::DebugStatusToggle => ActionId::DebugStatusToggle,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Requested,
    Applied,
    Noop,
    QuitRequested,
}
