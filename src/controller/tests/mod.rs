use std::collections::VecDeque;
use std::time::Duration;

use crate::model::{
    ActorPageModel, InMemoryPageModel, ModelNotices, Page, PageModel, PageSnapshot,
    ReorderPolicy, notification_channel,
};

use super::{
    ContentView, MoveDirection, NavOutcome, PageController, Position, PresentationSurface,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct RecordingSurface {
    label: String,
    previous_enabled: bool,
    next_enabled: bool,
    reorder_pressed: bool,
    content: ContentView,
    page_labels: Vec<String>,
    current_index: usize,
    writes: usize,
}

type SurfaceState = (String, bool, bool, bool, ContentView, Vec<String>, usize);

impl RecordingSurface {
    fn state(&self) -> SurfaceState {
        (
            self.label.clone(),
            self.previous_enabled,
            self.next_enabled,
            self.reorder_pressed,
            self.content,
            self.page_labels.clone(),
            self.current_index,
        )
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_label_text(&mut self, text: &str) {
        self.label = text.to_string();
        self.writes += 1;
    }

    fn set_previous_enabled(&mut self, enabled: bool) {
        self.previous_enabled = enabled;
        self.writes += 1;
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
        self.writes += 1;
    }

    fn set_reorder_button_state(&mut self, pressed: bool) {
        self.reorder_pressed = pressed;
        self.writes += 1;
    }

    fn select_content_view(&mut self, view: ContentView) {
        self.content = view;
        self.writes += 1;
    }

    fn set_page_list(&mut self, pages: &[Page], current_index: usize) {
        self.page_labels = pages.iter().map(|page| page.label.clone()).collect();
        self.current_index = current_index;
        self.writes += 1;
    }
}

type LocalController = PageController<InMemoryPageModel, RecordingSurface>;

fn controller(page_count: usize, start: usize) -> (LocalController, ModelNotices) {
    let (tx, rx) = notification_channel();
    let model = InMemoryPageModel::numbered(page_count, ReorderPolicy::default())
        .with_current_index(start)
        .with_notifier(tx);
    (PageController::new(model, RecordingSurface::default()), rx)
}

fn pump(controller: &mut LocalController, notices: &mut ModelNotices) -> usize {
    let mut delivered = 0;
    while let Ok(notice) = notices.try_recv() {
        controller.on_model_changed(notice);
        delivered += 1;
    }
    delivered
}

/// Queues requests until `flush`, like a model on the far side of a channel.
struct DeferredModel {
    inner: InMemoryPageModel,
    pending: VecDeque<Box<dyn FnOnce(&mut InMemoryPageModel)>>,
}

impl DeferredModel {
    fn new(inner: InMemoryPageModel) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    fn flush(&mut self) {
        while let Some(request) = self.pending.pop_front() {
            request(&mut self.inner);
        }
    }
}

impl PageModel for DeferredModel {
    fn snapshot(&self) -> PageSnapshot {
        self.inner.snapshot()
    }

    fn pages(&self) -> Vec<Page> {
        self.inner.pages()
    }

    fn previous_page(&mut self) {
        self.pending.push_back(Box::new(|model| model.previous_page()));
    }

    fn next_page(&mut self) {
        self.pending.push_back(Box::new(|model| model.next_page()));
    }

    fn go_to_page(&mut self, index: usize) {
        self.pending
            .push_back(Box::new(move |model| model.go_to_page(index)));
    }

    fn set_reorderable(&mut self, reorderable: bool) {
        self.pending
            .push_back(Box::new(move |model| model.set_reorderable(reorderable)));
    }

    fn move_page(&mut self, from: usize, to: usize) {
        self.pending
            .push_back(Box::new(move |model| model.move_page(from, to)));
    }
}

/// Reports whatever it is told to, including states that break the model
/// invariant.
struct FixedModel(PageSnapshot);

impl PageModel for FixedModel {
    fn snapshot(&self) -> PageSnapshot {
        self.0
    }

    fn pages(&self) -> Vec<Page> {
        Vec::new()
    }

    fn previous_page(&mut self) {}

    fn next_page(&mut self) {}

    fn go_to_page(&mut self, _index: usize) {}

    fn set_reorderable(&mut self, _reorderable: bool) {}

    fn move_page(&mut self, _from: usize, _to: usize) {}
}

#[test]
fn binding_performs_initial_refresh() {
    let (controller, _rx) = controller(3, 1);
    let surface = controller.surface();
    assert_eq!(surface.label, "Page 2 of 3");
    assert!(surface.previous_enabled);
    assert!(surface.next_enabled);
    assert!(!surface.reorder_pressed);
    assert_eq!(surface.content, ContentView::Page);
}

#[test]
fn next_from_first_of_five_enables_both_affordances() {
    let (mut controller, mut rx) = controller(5, 0);
    assert!(!controller.surface().previous_enabled);

    assert_eq!(controller.go_to_next_page(), NavOutcome::Requested);
    assert_eq!(pump(&mut controller, &mut rx), 1);

    let surface = controller.surface();
    assert_eq!(surface.label, "Page 2 of 5");
    assert!(surface.previous_enabled);
    assert!(surface.next_enabled);
}

#[test]
fn next_at_last_page_is_noop_and_stays_disabled() {
    let (mut controller, mut rx) = controller(5, 4);
    let before = controller.surface().state();

    assert_eq!(controller.go_to_next_page(), NavOutcome::Noop);
    assert_eq!(pump(&mut controller, &mut rx), 0);

    assert_eq!(controller.model().snapshot().current_index, 4);
    assert_eq!(controller.surface().state(), before);
    assert!(!controller.surface().next_enabled);
}

#[test]
fn previous_at_first_page_is_noop_for_any_count() {
    for page_count in 0..6 {
        let (mut controller, mut rx) = controller(page_count, 0);
        let before = controller.model().snapshot();

        assert_eq!(controller.go_to_previous_page(), NavOutcome::Noop);
        assert_eq!(pump(&mut controller, &mut rx), 0);
        assert_eq!(controller.model().snapshot(), before);
    }
}

#[test]
fn previous_then_next_restores_index_away_from_first_page() {
    for page_count in 0..6 {
        for start in 0..page_count {
            let (mut controller, mut rx) = controller(page_count, start);

            controller.go_to_previous_page();
            pump(&mut controller, &mut rx);
            controller.go_to_next_page();
            pump(&mut controller, &mut rx);

            let index = controller.model().snapshot().current_index;
            if start == 0 {
                let expected = if page_count > 1 { 1 } else { 0 };
                assert_eq!(index, expected, "count={page_count} start={start}");
            } else {
                assert_eq!(index, start, "count={page_count} start={start}");
            }
        }
    }
}

#[test]
fn stepping_visits_every_position_without_wrapping() {
    let (mut controller, mut rx) = controller(3, 0);
    assert_eq!(controller.position(), Position::First);

    controller.go_to_next_page();
    pump(&mut controller, &mut rx);
    assert_eq!(controller.position(), Position::Middle);

    controller.go_to_next_page();
    pump(&mut controller, &mut rx);
    assert_eq!(controller.position(), Position::Last);

    assert_eq!(controller.go_to_next_page(), NavOutcome::Noop);
    assert_eq!(controller.position(), Position::Last);

    let (empty, _rx) = self::controller(0, 0);
    assert_eq!(empty.position(), Position::Empty);
    assert_eq!(empty.surface().label, "No pages");
}

#[test]
fn toggle_twice_restores_reorder_mode() {
    let (mut controller, mut rx) = controller(3, 1);

    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    assert!(controller.reorder_mode_active());
    assert!(controller.surface().reorder_pressed);
    assert_eq!(controller.surface().content, ContentView::Reorder);

    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    assert!(!controller.reorder_mode_active());
    assert!(!controller.surface().reorder_pressed);
    assert_eq!(controller.surface().content, ContentView::Page);
}

#[test]
fn toggle_does_not_move_current_page() {
    let (mut controller, mut rx) = controller(4, 2);
    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    assert_eq!(controller.surface().label, "Page 3 of 4");
    assert_eq!(controller.model().snapshot().current_index, 2);
}

#[test]
fn toggle_on_single_page_is_rejected_by_model() {
    let (mut controller, mut rx) = controller(1, 0);

    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);

    assert!(!controller.reorder_mode_active());
    assert!(!controller.surface().reorder_pressed);
    assert_eq!(controller.surface().content, ContentView::Page);
}

#[test]
fn refresh_is_idempotent() {
    let (mut controller, _rx) = controller(5, 2);
    let first = controller.refresh();
    let surface_after_first = controller.surface().state();
    let second = controller.refresh();

    assert_eq!(first, second);
    assert_eq!(controller.surface().state(), surface_after_first);
}

#[test]
fn refresh_writes_every_element_even_without_changes() {
    let (mut controller, _rx) = controller(2, 0);
    let writes = controller.surface().writes;
    controller.refresh();
    assert_eq!(controller.surface().writes, writes + 6);
}

#[test]
fn external_mode_change_resyncs_toggle_button() {
    let (mut controller, mut rx) = controller(3, 2);
    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    assert!(controller.surface().reorder_pressed);

    // The owning document shrinks the page set; no gesture is involved.
    controller
        .model_mut()
        .replace_pages(vec![Page::new(0, "solo")]);
    assert!(controller.surface().reorder_pressed);

    pump(&mut controller, &mut rx);
    assert!(!controller.reorder_mode_active());
    assert!(!controller.surface().reorder_pressed);
    assert_eq!(controller.surface().content, ContentView::Page);
    assert_eq!(controller.surface().label, "Page 1 of 1");
}

#[test]
fn deferred_model_only_updates_surface_after_notification() {
    let model = DeferredModel::new(InMemoryPageModel::numbered(3, ReorderPolicy::default()));
    let mut controller = PageController::new(model, RecordingSurface::default());

    assert_eq!(controller.go_to_next_page(), NavOutcome::Requested);
    assert_eq!(controller.surface().label, "Page 1 of 3");

    controller.toggle_reorder_mode();
    assert!(!controller.reorder_mode_active());
    assert!(!controller.surface().reorder_pressed);

    controller.model_mut().flush();
    let notice = controller.model().snapshot();
    controller.on_model_changed(notice);

    assert_eq!(controller.surface().label, "Page 2 of 3");
    assert!(controller.reorder_mode_active());
    assert_eq!(controller.surface().content, ContentView::Reorder);
}

#[test]
fn stale_notification_never_rolls_display_back() {
    let (mut controller, mut rx) = controller(4, 0);
    controller.go_to_next_page();
    controller.go_to_next_page();

    let stale = rx.try_recv().expect("first step should notify");
    controller.on_model_changed(stale);
    assert_eq!(controller.surface().label, "Page 3 of 4");
    pump(&mut controller, &mut rx);
    assert_eq!(controller.surface().label, "Page 3 of 4");
}

#[test]
fn out_of_range_model_index_is_clamped_when_rendering() {
    let controller = PageController::new(
        FixedModel(PageSnapshot::new(12, 3, false)),
        RecordingSurface::default(),
    );
    let surface = controller.surface();
    assert_eq!(surface.label, "Page 3 of 3");
    assert!(surface.previous_enabled);
    assert!(!surface.next_enabled);
    assert_eq!(controller.position(), Position::Last);
}

#[test]
fn move_current_page_requires_reorder_mode() {
    let (mut controller, mut rx) = controller(3, 0);
    assert_eq!(
        controller.move_current_page(MoveDirection::Later),
        NavOutcome::Noop
    );

    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    assert_eq!(
        controller.move_current_page(MoveDirection::Earlier),
        NavOutcome::Noop
    );
    assert_eq!(
        controller.move_current_page(MoveDirection::Later),
        NavOutcome::Requested
    );
    pump(&mut controller, &mut rx);

    let labels: Vec<String> = controller
        .model()
        .pages()
        .into_iter()
        .map(|page| page.label)
        .collect();
    assert_eq!(labels, ["Page 2", "Page 1", "Page 3"]);
    assert_eq!(controller.surface().label, "Page 2 of 3");
}

#[test]
fn jumps_clamp_and_validate() {
    let (mut controller, mut rx) = controller(5, 2);
    assert_eq!(controller.go_to_first_page(), NavOutcome::Requested);
    pump(&mut controller, &mut rx);
    assert_eq!(controller.go_to_first_page(), NavOutcome::Noop);

    assert_eq!(controller.go_to_last_page(), NavOutcome::Requested);
    pump(&mut controller, &mut rx);
    assert_eq!(controller.surface().label, "Page 5 of 5");
    assert_eq!(controller.go_to_last_page(), NavOutcome::Noop);

    assert!(controller.go_to_page(5).is_err());
    assert_eq!(
        controller.go_to_page(4).expect("current page is valid"),
        NavOutcome::Noop
    );
    assert_eq!(
        controller.go_to_page(1).expect("page 2 is valid"),
        NavOutcome::Requested
    );
}

#[test]
fn stepping_in_reorder_mode_keeps_reorder_view() {
    let (mut controller, mut rx) = controller(4, 0);
    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);

    assert_eq!(controller.go_to_next_page(), NavOutcome::Requested);
    pump(&mut controller, &mut rx);
    let surface = controller.surface();
    assert_eq!(surface.label, "Page 2 of 4");
    assert_eq!(surface.content, ContentView::Reorder);
    assert!(surface.reorder_pressed);
    assert_eq!(surface.current_index, 1);

    assert_eq!(controller.go_to_previous_page(), NavOutcome::Requested);
    pump(&mut controller, &mut rx);
    assert_eq!(controller.surface().content, ContentView::Reorder);
    assert!(controller.surface().reorder_pressed);
    assert!(controller.reorder_mode_active());
}

#[test]
fn duplicated_notice_leaves_surface_unchanged() {
    let (mut controller, mut rx) = controller(5, 1);
    controller.go_to_next_page();
    let notice = rx.try_recv().expect("step should notify");

    controller.on_model_changed(notice);
    let once = controller.surface().state();
    controller.on_model_changed(notice);

    assert_eq!(controller.surface().state(), once);
    assert_eq!(once.0, "Page 3 of 5");
    assert_eq!(once.6, 2);
}

#[test]
fn surface_holds_page_list_from_the_same_refresh() {
    let (mut controller, mut rx) = controller(3, 0);
    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    controller.move_current_page(MoveDirection::Later);

    // Requested but not delivered: label and list still agree.
    assert_eq!(controller.surface().label, "Page 1 of 3");
    assert_eq!(controller.surface().page_labels[0], "Page 1");

    pump(&mut controller, &mut rx);
    let surface = controller.surface();
    assert_eq!(surface.label, "Page 2 of 3");
    assert_eq!(surface.page_labels, ["Page 2", "Page 1", "Page 3"]);
    assert_eq!(surface.current_index, 1);
}

#[test]
fn reopened_document_returns_to_first_page_in_normal_mode() {
    let (mut controller, mut rx) = controller(5, 3);
    controller.toggle_reorder_mode();
    pump(&mut controller, &mut rx);
    assert!(controller.surface().reorder_pressed);

    controller.model_mut().open_document(vec![
        Page::new(0, "title").with_size(792.0, 612.0),
        Page::new(1, "body"),
    ]);
    assert_eq!(controller.surface().label, "Page 4 of 5");

    assert_eq!(pump(&mut controller, &mut rx), 1);
    let surface = controller.surface();
    assert_eq!(surface.label, "Page 1 of 2");
    assert!(!surface.previous_enabled);
    assert!(surface.next_enabled);
    assert!(!surface.reorder_pressed);
    assert_eq!(surface.content, ContentView::Page);
    assert_eq!(surface.page_labels, ["title", "body"]);
    assert!(!controller.reorder_mode_active());
}

#[tokio::test]
async fn actor_model_updates_surface_only_when_notice_arrives() {
    let (tx, mut rx) = notification_channel();
    let model = ActorPageModel::spawn(
        InMemoryPageModel::numbered(3, ReorderPolicy::default()),
        Duration::from_millis(5),
        tx,
    )
    .expect("actor should spawn inside runtime");
    let mut controller = PageController::new(model, RecordingSurface::default());
    let before = controller.surface().state();

    assert_eq!(controller.go_to_next_page(), NavOutcome::Requested);
    assert_eq!(controller.surface().state(), before);

    let notice = rx.recv().await.expect("actor should notify");
    assert_eq!(controller.surface().state(), before);
    controller.on_model_changed(notice);

    let surface = controller.surface();
    assert_eq!(surface.label, "Page 2 of 3");
    assert!(surface.previous_enabled);
    assert!(surface.next_enabled);
    assert_eq!(surface.current_index, 1);
}
