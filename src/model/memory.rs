use tracing::{debug, trace};

use super::traits::{ModelNotifier, Page, PageModel, PageSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderPolicy {
    pub min_pages: usize,
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self { min_pages: 2 }
    }
}

impl ReorderPolicy {
    pub fn allows(&self, page_count: usize) -> bool {
        page_count >= self.min_pages.max(1)
    }
}

pub struct InMemoryPageModel {
    pages: Vec<Page>,
    current_index: usize,
    reorderable: bool,
    policy: ReorderPolicy,
    revision: u64,
    notifier: Option<ModelNotifier>,
}

impl InMemoryPageModel {
    pub fn new(pages: Vec<Page>, policy: ReorderPolicy) -> Self {
        Self {
            pages,
            current_index: 0,
            reorderable: false,
            policy,
            revision: 0,
            notifier: None,
        }
    }

    /// `Page 1 .. Page count`.
    pub fn numbered(count: usize, policy: ReorderPolicy) -> Self {
        let pages = (0..count)
            .map(|idx| Page::new(idx as u32, format!("Page {}", idx + 1)))
            .collect();
        Self::new(pages, policy)
    }

    pub fn from_labels<I, S>(labels: I, policy: ReorderPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| Page::new(idx as u32, label))
            .collect();
        Self::new(pages, policy)
    }

    pub fn with_notifier(mut self, notifier: ModelNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_current_index(mut self, index: usize) -> Self {
        self.current_index = index.min(self.pages.len().saturating_sub(1));
        self
    }

    pub fn policy(&self) -> ReorderPolicy {
        self.policy
    }

    /// Bumped on every accepted change, including page order.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swaps the whole page set, as the owning document would after a reload.
    ///
    /// The index is clamped and reorder mode is dropped when the new set is too
    /// small for it.
    pub fn replace_pages(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        self.current_index = self.current_index.min(self.pages.len().saturating_sub(1));
        if self.reorderable && !self.policy.allows(self.pages.len()) {
            debug!(
                page_count = self.pages.len(),
                "page set too small, leaving reorder mode"
            );
            self.reorderable = false;
        }
        self.changed();
    }

    /// Loads a different document: its pages, page 1, normal mode.
    ///
    /// Always notifies, even when the new pages equal the old ones.
    pub fn open_document(&mut self, pages: Vec<Page>) {
        debug!(page_count = pages.len(), "document opened");
        self.pages = pages;
        self.current_index = 0;
        self.reorderable = false;
        self.changed();
    }

    fn changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        let snapshot = self.snapshot();
        trace!(?snapshot, revision = self.revision, "page model changed");
        if let Some(notifier) = &self.notifier
            && notifier.send(snapshot).is_err()
        {
            debug!("page model subscriber dropped");
            self.notifier = None;
        }
    }
}

impl PageModel for InMemoryPageModel {
    fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            current_index: self.current_index,
            page_count: self.pages.len(),
            reorderable: self.reorderable,
        }
    }

    fn pages(&self) -> Vec<Page> {
        self.pages.clone()
    }

    fn previous_page(&mut self) {
        if self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
        self.changed();
    }

    fn next_page(&mut self) {
        if self.current_index + 1 >= self.pages.len() {
            return;
        }
        self.current_index += 1;
        self.changed();
    }

    fn go_to_page(&mut self, index: usize) {
        if index >= self.pages.len() {
            debug!(index, page_count = self.pages.len(), "ignoring out-of-range page jump");
            return;
        }
        if index == self.current_index {
            return;
        }
        self.current_index = index;
        self.changed();
    }

    fn set_reorderable(&mut self, reorderable: bool) {
        if reorderable == self.reorderable {
            return;
        }
        if reorderable && !self.policy.allows(self.pages.len()) {
            debug!(
                page_count = self.pages.len(),
                min_pages = self.policy.min_pages,
                "rejecting reorder mode"
            );
            return;
        }
        self.reorderable = reorderable;
        self.changed();
    }

    fn move_page(&mut self, from: usize, to: usize) {
        if !self.reorderable {
            debug!(from, to, "ignoring page move outside reorder mode");
            return;
        }
        let len = self.pages.len();
        if from >= len || to >= len || from == to {
            return;
        }

        let page = self.pages.remove(from);
        self.pages.insert(to, page);

        let current = self.current_index;
        self.current_index = if current == from {
            to
        } else if from < current && current <= to {
            current - 1
        } else if to <= current && current < from {
            current + 1
        } else {
            current
        };
        self.changed();
    }
}
