//! Card detail screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::card::Card;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub fn render_details(frame: &mut Frame, area: Rect, card: Option<&Card>) {
    let block = Block::default()
        .title(Span::styled(
            " Card Details ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let lines = match card {
        Some(card) => detail_lines(card),
        None => vec![Line::from(Span::styled(
            "This card is no longer in the current results.",
            Style::default().fg(STATUS_ERROR),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Text lines for every populated field of `card`.
pub fn detail_lines(card: &Card) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    field(&mut lines, "Type", Some(&card.card_type));
    field(&mut lines, "Set", card.set_name.as_ref());
    field(&mut lines, "Rarity", card.rarity.as_ref());
    field(&mut lines, "Artist", card.artist.as_ref());
    field(&mut lines, "Image", card.image_url.as_ref());

    if let Some(text) = &card.text {
        lines.push(Line::from(""));
        lines.extend(text.lines().map(|l| Line::from(l.to_string())));
    }

    if let Some(flavor) = &card.flavor_text {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            flavor.clone(),
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn field(lines: &mut Vec<Line<'static>>, label: &'static str, value: Option<&String>) {
    if let Some(value) = value {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", label), Style::default().fg(MUTED_TEXT)),
            Span::styled(value.clone(), Style::default().fg(HEADER_TEXT)),
        ]));
    }
}
