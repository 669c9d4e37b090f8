mod chrome;
mod content;
mod layout;
mod panel;

pub use chrome::{draw_chrome, draw_header};
pub use content::draw_content;
pub use layout::{UiLayout, split_layout};
pub use panel::{PagePanel, draw_page_panel};
