use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum width of one grid cell, borders included.
pub const GRID_CELL_MIN_WIDTH: u16 = 28;
/// Height of one grid cell, borders included.
pub const GRID_CELL_HEIGHT: u16 = 4;
/// Height of the featured strip, borders included.
pub const FEATURED_HEIGHT: u16 = 6;
pub const SEARCH_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Splits the list body into search box, featured strip and grid.
pub fn list_regions(body: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(FEATURED_HEIGHT + 1),
            Constraint::Min(0),
        ])
        .split(body);
    (chunks[0], chunks[1], chunks[2])
}

/// Number of grid columns that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    (width / GRID_CELL_MIN_WIDTH).max(1) as usize
}

/// Splits `area` into `count` equal-width columns.
pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}
