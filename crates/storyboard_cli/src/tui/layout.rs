//! Geometry helpers for the card grid and modal.

use ratatui::layout::Rect;

/// Height of one card including borders.
pub const CARD_HEIGHT: u16 = 6;

/// Columns in the card grid for a given width (1 narrow, 2 medium, 3 wide).
pub fn grid_columns(width: u16) -> usize {
    match width {
        0..=79 => 1,
        80..=119 => 2,
        _ => 3,
    }
}

/// First grid row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected_row;
    }
    (selected_row + 1).saturating_sub(visible_rows)
}

/// Rows `text` needs when wrapped at `width` columns, one char per column.
pub fn wrapped_rows(text: &str, width: u16) -> usize {
    let width = usize::from(width.max(1));
    text.lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum()
}

/// Text for a card body: the full body when it fits `width` x `height`,
/// otherwise the one-line excerpt.
pub fn card_text<'a>(body: &'a str, excerpt: &'a str, width: u16, height: u16) -> &'a str {
    if wrapped_rows(body, width) <= usize::from(height) {
        body
    } else {
        excerpt
    }
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
