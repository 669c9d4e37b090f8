use ratatui::Frame;

use crate::app::AppState;
use crate::controller::{ContentView, PageMode, PresentationSurface};
use crate::model::Page;

use super::chrome::{draw_chrome, draw_header};
use super::content::draw_content;
use super::layout::split_layout;

/// Terminal widget state written by the page controller. Drawing reads
/// nothing else, so a frame shows exactly the last refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePanel {
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub reorder_pressed: bool,
    pub content: ContentView,
    pub pages: Vec<Page>,
    pub current_index: usize,
}

impl PresentationSurface for PagePanel {
    fn set_label_text(&mut self, text: &str) {
        if self.label != text {
            self.label.clear();
            self.label.push_str(text);
        }
    }

    fn set_previous_enabled(&mut self, enabled: bool) {
        self.previous_enabled = enabled;
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }

    fn set_reorder_button_state(&mut self, pressed: bool) {
        self.reorder_pressed = pressed;
    }

    fn select_content_view(&mut self, view: ContentView) {
        self.content = view;
    }

    fn set_page_list(&mut self, pages: &[Page], current_index: usize) {
        if self.pages != pages {
            self.pages = pages.to_vec();
        }
        self.current_index = current_index;
    }
}

/// Draws the whole frame: header, content and status bar.
pub fn draw_page_panel(
    frame: &mut Frame<'_>,
    panel: &PagePanel,
    app: &AppState,
    backend_name: &str,
) {
    let layout = split_layout(frame.area(), app.debug_status_visible);
    let mode = PageMode::from_reorderable(panel.reorder_pressed);
    draw_header(frame, layout.header, panel);
    draw_content(frame, layout.content, panel);
    draw_chrome(frame, layout, app, mode, backend_name);
}
