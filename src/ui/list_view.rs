//! Card list screen: search box, featured strip and the latest-additions grid.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::card::Card;
use crate::ui::app::App;
use crate::ui::layout::{columns, list_regions, GRID_CELL_HEIGHT};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SELECTED_BORDER,
};

pub fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let (search, featured, grid) = list_regions(area);
    render_search(frame, search, &app.query());

    let state = app.state();
    let featured_count = app.featured_count();

    if state.cards.is_empty() {
        let message = if state.is_loading {
            "Loading cards..."
        } else {
            "No cards found."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(MUTED_TEXT),
        )));
        frame.render_widget(paragraph, featured);
        return;
    }

    render_featured(
        frame,
        featured,
        state.featured(featured_count),
        app.selection(),
    );
    render_grid(
        frame,
        grid,
        state.latest(featured_count),
        featured_count,
        app.selection(),
        app.grid_columns(),
    );
}

fn render_search(frame: &mut Frame, area: Rect, query: &str) {
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let text = if query.is_empty() {
        Span::styled("Search cards by name...", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(query.to_string(), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if area.width > 2 && area.height > 2 {
        let offset = (query.chars().count() as u16).min(area.width.saturating_sub(3));
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn render_featured(frame: &mut Frame, area: Rect, cards: &[Card], selection: usize) {
    if area.height == 0 {
        return;
    }
    let title = Rect { height: 1, ..area };
    frame.render_widget(section_title("Featured Cards"), title);

    let strip = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    for (idx, (card, cell)) in cards.iter().zip(columns(strip, cards.len())).enumerate() {
        frame.render_widget(card_cell(card, idx == selection, true), cell);
    }
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[Card],
    first_index: usize,
    selection: usize,
    cols: usize,
) {
    if area.height == 0 {
        return;
    }
    let title = Rect { height: 1, ..area };
    frame.render_widget(section_title("Latest Additions"), title);
    if cards.is_empty() {
        return;
    }

    let body = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    let visible_rows = (body.height / GRID_CELL_HEIGHT).max(1) as usize;
    let scroll = grid_scroll(selection.checked_sub(first_index), cols, visible_rows);

    for (row_idx, row) in cards.chunks(cols).skip(scroll).take(visible_rows).enumerate() {
        let row_area = Rect {
            y: body.y + row_idx as u16 * GRID_CELL_HEIGHT,
            height: GRID_CELL_HEIGHT.min(body.height.saturating_sub(row_idx as u16 * GRID_CELL_HEIGHT)),
            ..body
        };
        for (col_idx, (card, cell)) in row.iter().zip(columns(row_area, cols)).enumerate() {
            let index = first_index + (scroll + row_idx) * cols + col_idx;
            frame.render_widget(card_cell(card, index == selection, false), cell);
        }
    }
}

/// First grid row to draw so the selected row stays visible.
pub fn grid_scroll(selected_in_grid: Option<usize>, cols: usize, visible_rows: usize) -> usize {
    let Some(selected) = selected_in_grid else {
        return 0;
    };
    let row = selected / cols.max(1);
    row.saturating_sub(visible_rows.saturating_sub(1))
}

fn section_title(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
}

fn card_cell(card: &Card, selected: bool, featured: bool) -> Paragraph<'static> {
    let border = if selected { SELECTED_BORDER } else { GLOBAL_BORDER };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if selected {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.subtitle(), Style::default().fg(MUTED_TEXT))),
    ];
    if featured {
        lines.push(Line::from(Span::styled(
            card.card_type.clone(),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(grid_scroll(None, 3, 2), 0);
        assert_eq!(grid_scroll(Some(0), 3, 2), 0);
        assert_eq!(grid_scroll(Some(5), 3, 2), 0);
        assert_eq!(grid_scroll(Some(6), 3, 2), 1);
        assert_eq!(grid_scroll(Some(14), 3, 2), 3);
    }

    #[test]
    fn scroll_handles_zero_columns() {
        assert_eq!(grid_scroll(Some(4), 0, 1), 4);
    }
}
