use std::fmt;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// US Letter.
    pub const DEFAULT: Self = Self::new(612.0, 792.0);

    pub const fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }

    /// Height over width. Degenerate sizes fall back to the default page.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width_pt > 0.0 && self.height_pt > 0.0 {
            self.height_pt / self.width_pt
        } else {
            Self::DEFAULT.height_pt / Self::DEFAULT.width_pt
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub label: String,
    pub size: PageSize,
}

impl Page {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: PageId(id),
            label: label.into(),
            size: PageSize::DEFAULT,
        }
    }

    pub fn with_size(mut self, width_pt: f32, height_pt: f32) -> Self {
        self.size = PageSize::new(width_pt, height_pt);
        self
    }
}

/// Published state of a page model.
///
/// `current_index` is always 0 for an empty model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    pub current_index: usize,
    pub page_count: usize,
    pub reorderable: bool,
}

impl PageSnapshot {
    pub fn new(current_index: usize, page_count: usize, reorderable: bool) -> Self {
        Self {
            current_index,
            page_count,
            reorderable,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Current index forced into `[0, page_count)`.
    pub fn clamped_index(&self) -> usize {
        self.current_index.min(self.page_count.saturating_sub(1))
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_empty() && self.clamped_index() > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_empty() && self.clamped_index() + 1 < self.page_count
    }
}

pub type ModelNotifier = UnboundedSender<PageSnapshot>;
pub type ModelNotices = UnboundedReceiver<PageSnapshot>;

pub fn notification_channel() -> (ModelNotifier, ModelNotices) {
    unbounded_channel()
}

/// The authoritative owner of pages, the current page and the reorder flag.
///
/// Mutations are requests. An implementation may apply them later, clamp them,
/// or reject them outright; callers learn the result from the next
/// notification, never from the call itself.
pub trait PageModel {
    fn snapshot(&self) -> PageSnapshot;

    fn pages(&self) -> Vec<Page>;

    /// Snapshot and pages read together, so both describe the same state.
    fn published(&self) -> (PageSnapshot, Vec<Page>) {
        (self.snapshot(), self.pages())
    }

    fn previous_page(&mut self);

    fn next_page(&mut self);

    fn go_to_page(&mut self, index: usize);

    fn set_reorderable(&mut self, reorderable: bool);

    fn move_page(&mut self, from: usize, to: usize);
}

impl<M: PageModel + ?Sized> PageModel for Box<M> {
    fn snapshot(&self) -> PageSnapshot {
        (**self).snapshot()
    }

    fn pages(&self) -> Vec<Page> {
        (**self).pages()
    }

    fn published(&self) -> (PageSnapshot, Vec<Page>) {
        (**self).published()
    }

    fn previous_page(&mut self) {
        (**self).previous_page();
    }

    fn next_page(&mut self) {
        (**self).next_page();
    }

    fn go_to_page(&mut self, index: usize) {
        (**self).go_to_page(index);
    }

    fn set_reorderable(&mut self, reorderable: bool) {
        (**self).set_reorderable(reorderable);
    }

    fn move_page(&mut self, from: usize, to: usize) {
        (**self).move_page(from, to);
    }
}
