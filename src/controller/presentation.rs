use crate::model::{Page, PageSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Empty,
    First,
    Middle,
    Last,
}

impl Position {
    /// A single page counts as `First`.
    pub fn of(snapshot: PageSnapshot) -> Self {
        if snapshot.is_empty() {
            return Self::Empty;
        }
        let index = snapshot.clamped_index();
        if index == 0 {
            Self::First
        } else if index + 1 == snapshot.page_count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Normal,
    Reorder,
}

impl PageMode {
    pub fn from_reorderable(reorderable: bool) -> Self {
        if reorderable {
            Self::Reorder
        } else {
            Self::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Reorder => "REORDER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentView {
    #[default]
    Page,
    Reorder,
}

impl ContentView {
    pub fn for_mode(mode: PageMode) -> Self {
        match mode {
            PageMode::Normal => Self::Page,
            PageMode::Reorder => Self::Reorder,
        }
    }
}

pub fn page_label_text(current_index: usize, page_count: usize) -> String {
    if page_count == 0 {
        return "No pages".to_string();
    }
    let page_now = current_index.min(page_count - 1) + 1;
    format!("Page {page_now} of {page_count}")
}

/// Everything a refresh writes to the surface, derived from one published
/// state. The page list travels with the label so a frame never mixes reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub reorder_pressed: bool,
    pub content_view: ContentView,
    pub current_index: usize,
    pub pages: Vec<Page>,
}

impl Presentation {
    pub fn derive(snapshot: PageSnapshot, pages: Vec<Page>) -> Self {
        let mode = PageMode::from_reorderable(snapshot.reorderable);
        let current_index = snapshot
            .clamped_index()
            .min(pages.len().saturating_sub(1));
        Self {
            label: page_label_text(snapshot.current_index, snapshot.page_count),
            previous_enabled: snapshot.can_go_previous(),
            next_enabled: snapshot.can_go_next(),
            reorder_pressed: snapshot.reorderable,
            content_view: ContentView::for_mode(mode),
            current_index,
            pages,
        }
    }
}
