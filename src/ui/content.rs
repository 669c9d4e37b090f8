use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::controller::ContentView;
use crate::model::{Page, PageSize};

use super::layout::centered_rect;
use super::panel::PagePanel;

/// Terminal cells are about twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

pub fn draw_content(frame: &mut Frame<'_>, area: Rect, panel: &PagePanel) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    // Both views share the area; clear so a swap never leaves stale cells.
    frame.render_widget(Clear, area);

    let Some(page) = panel.pages.get(panel.current_index) else {
        let empty = Paragraph::new("No pages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, centered_rect(area, area.width, 1));
        return;
    };

    match panel.content {
        ContentView::Page => draw_page_card(frame, area, page),
        ContentView::Reorder => draw_reorder_list(frame, area, &panel.pages, panel.current_index),
    }
}

/// Largest rect with the page's proportions that fits `area`, centered.
pub(crate) fn fit_page_rect(area: Rect, size: PageSize) -> Rect {
    let rows_per_column = size.aspect_ratio() / CELL_ASPECT;
    let (width, height) = if f32::from(area.width) * rows_per_column > f32::from(area.height) {
        let width = (f32::from(area.height) / rows_per_column).round() as u16;
        (width.clamp(1, area.width), area.height)
    } else {
        let height = (f32::from(area.width) * rows_per_column).round() as u16;
        (area.width, height.clamp(1, area.height))
    };
    centered_rect(area, width, height)
}

fn draw_page_card(frame: &mut Frame<'_>, area: Rect, page: &Page) {
    let card = fit_page_rect(area, page.size);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(card);
    frame.render_widget(block, card);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let dimmed = Style::default().fg(Color::DarkGray);
    let dimensions = format!(
        "{:.0} x {:.0} pt",
        page.size.width_pt, page.size.height_pt
    );
    let body = Paragraph::new(vec![
        Line::from(truncate_to_width(&page.label, width)),
        Line::from(Span::styled(page.id.to_string(), dimmed)),
        Line::from(Span::styled(truncate_to_width(&dimensions, width), dimmed)),
    ])
    .alignment(Alignment::Center);
    let text_area = centered_rect(inner, inner.width, inner.height.min(3));
    frame.render_widget(body, text_area);
}

fn draw_reorder_list(frame: &mut Frame<'_>, area: Rect, pages: &[Page], current: usize) {
    let block = Block::default()
        .title(" Reorder ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let max_items = inner.height as usize;
    let start = list_window_start(pages.len(), current, max_items);
    let number_width = pages.len().to_string().len();

    let lines: Vec<Line<'_>> = pages
        .iter()
        .enumerate()
        .skip(start)
        .take(max_items)
        .map(|(idx, page)| {
            let selected = idx == current;
            let marker = if selected { " ┃ " } else { "   " };
            let number = format!("{:>number_width$}. ", idx + 1);
            let room = (inner.width as usize)
                .saturating_sub(UnicodeWidthStr::width(marker) + number.len());
            let label = truncate_to_width(&page.label, room);
            let padding = " ".repeat(room.saturating_sub(UnicodeWidthStr::width(label.as_str())));

            let line_style = if selected {
                Style::default().bg(Color::Rgb(45, 45, 50))
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::White)),
                Span::styled(number, Style::default().fg(Color::DarkGray)),
                Span::raw(label),
                Span::raw(padding),
            ])
            .style(line_style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Keeps `current` inside `[start, start + max_items)`, centered when possible.
pub(crate) fn list_window_start(len: usize, current: usize, max_items: usize) -> usize {
    if max_items == 0 || len <= max_items || current < max_items / 2 {
        0
    } else if current >= len - max_items / 2 {
        len.saturating_sub(max_items)
    } else {
        current.saturating_sub(max_items / 2)
    }
}

pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width + 1 > max_width {
            break;
        }
        out.push(ch);
        used += width;
    }
    out.push('…');
    out
}
