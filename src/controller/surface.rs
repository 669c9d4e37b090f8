use crate::model::Page;

use super::presentation::{ContentView, Presentation};

/// The widgets a [`PageController`](super::PageController) drives.
pub trait PresentationSurface {
    fn set_label_text(&mut self, text: &str);

    fn set_previous_enabled(&mut self, enabled: bool);

    fn set_next_enabled(&mut self, enabled: bool);

    fn set_reorder_button_state(&mut self, pressed: bool);

    fn select_content_view(&mut self, view: ContentView);

    /// The pages the content view shows and which one is current.
    fn set_page_list(&mut self, pages: &[Page], current_index: usize);

    fn apply(&mut self, presentation: &Presentation) {
        self.set_label_text(&presentation.label);
        self.set_previous_enabled(presentation.previous_enabled);
        self.set_next_enabled(presentation.next_enabled);
        self.set_reorder_button_state(presentation.reorder_pressed);
        self.select_content_view(presentation.content_view);
        self.set_page_list(&presentation.pages, presentation.current_index);
    }
}
