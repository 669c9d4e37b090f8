use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::controller::PageMode;

use super::layout::UiLayout;
use super::panel::PagePanel;

const PREVIOUS_BUTTON: &str = "[<] prev";
const NEXT_BUTTON: &str = "next [>]";
const REORDER_BUTTON: &str = "[reorder]";
const REORDER_BUTTON_PRESSED: &str = "[*reorder*]";

fn affordance_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

pub(crate) fn header_line(panel: &PagePanel) -> Line<'static> {
    let reorder = if panel.reorder_pressed {
        Span::styled(
            REORDER_BUTTON_PRESSED,
            Style::default().add_modifier(Modifier::REVERSED),
        )
    } else {
        Span::raw(REORDER_BUTTON)
    };

    Line::from(vec![
        Span::styled(PREVIOUS_BUTTON, affordance_style(panel.previous_enabled)),
        Span::raw("  "),
        Span::styled(
            panel.label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(NEXT_BUTTON, affordance_style(panel.next_enabled)),
        Span::raw("    "),
        reorder,
    ])
}

pub fn draw_header(frame: &mut Frame<'_>, area: Rect, panel: &PagePanel) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(header_line(panel)), area);
}

pub fn draw_chrome(
    frame: &mut Frame<'_>,
    layout: UiLayout,
    app: &AppState,
    mode: PageMode,
    backend_name: &str,
) {
    let pending = app
        .pending_count
        .map(|count| format!(" | count {count}"))
        .unwrap_or_default();
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };
    let status_text = format!("{} | {message}{pending}", mode.as_str());

    let status = Paragraph::new(status_text)
        .style(Style::default())
        .wrap(Wrap { trim: true });
    if app.debug_status_visible && layout.status.height >= 2 {
        let top = Rect::new(layout.status.x, layout.status.y, layout.status.width, 1);
        frame.render_widget(status, top);

        let command_id = app
            .status
            .last_action_id
            .map(|id| id.as_str())
            .unwrap_or("-");
        let debug_text = format!(
            "cmd={command_id} | model={backend_name} | notices={}",
            app.notices_seen
        );
        let bottom = Rect::new(
            layout.status.x,
            layout.status.y + 1,
            layout.status.width,
            layout.status.height.saturating_sub(1).max(1),
        );
        let debug = Paragraph::new(debug_text)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(debug, bottom);
        return;
    }

    frame.render_widget(status, layout.status);
}
