//! Frame drawing for the story page.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use storyboard_core::view::screen::{DELETE_ACTION_LABEL, EDIT_ACTION_LABEL};
use storyboard_core::{CardView, ModalView, NoticeLevel, ScreenModel, StatusLine};

use crate::tui::input::{Field, Focus, PageState};
use crate::tui::layout::{
    card_text, centered_rect, first_visible_row, grid_columns, CARD_HEIGHT,
};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 16;

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Main render function
pub fn draw(frame: &mut Frame, screen: &ScreenModel, page: &PageState) {
    let [header, grid, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, screen, page, header);
    draw_grid(frame, screen, page, grid);
    draw_status(frame, &screen.status, page, status);

    if let Some(modal) = &screen.modal {
        draw_modal(frame, modal, page);
    }
}

fn draw_header(frame: &mut Frame, screen: &ScreenModel, page: &PageState, area: Rect) {
    let [search_area, add_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(18)]).areas(area);

    let searching = page.focus == Focus::Search && screen.modal.is_none();
    let search_text = if screen.search_term.is_empty() && !searching {
        Line::from(Span::styled(
            "press / to search",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else if searching {
        Line::from(vec![Span::raw(screen.search_term.as_str()), Span::raw("_")])
    } else {
        Line::from(screen.search_term.as_str())
    };
    let search = Paragraph::new(search_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(searching))
            .title(screen.search_label),
    );
    frame.render_widget(search, search_area);

    let add = Paragraph::new(Line::from(vec![
        Span::styled("[a] ", Style::default().add_modifier(Modifier::DIM)),
        Span::styled(
            screen.add_label,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(add, add_area);
}

fn draw_grid(frame: &mut Frame, screen: &ScreenModel, page: &PageState, area: Rect) {
    if screen.cards.is_empty() {
        let message = if screen.status.busy {
            "Loading stories..."
        } else if screen.status.total > 0 {
            "No stories match the search."
        } else {
            "No stories yet. Press [a] to add one."
        };
        let empty = Paragraph::new(Span::styled(
            message,
            Style::default().add_modifier(Modifier::DIM),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let columns = grid_columns(area.width);
    let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);
    let first_row = first_visible_row(page.selected / columns, visible_rows);
    let column_width = area.width / columns as u16;

    for (index, card) in screen.cards.iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let column = (index % columns) as u16;
        let rect = Rect {
            x: area.x + column * column_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: column_width,
            height: CARD_HEIGHT,
        }
        .intersection(area);
        if rect.is_empty() {
            continue;
        }
        let focused = index == page.selected && page.focus == Focus::Cards;
        draw_card(frame, card, focused, rect);
    }
}

fn draw_card(frame: &mut Frame, card: &CardView, focused: bool, area: Rect) {
    let title = if card.title.is_empty() {
        Span::styled("(untitled)", Style::default().add_modifier(Modifier::DIM))
    } else {
        Span::styled(
            card.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    let actions = if card.actions_enabled() {
        Line::from(vec![
            Span::styled(format!("[e] {EDIT_ACTION_LABEL}"), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(format!("[d] {DELETE_ACTION_LABEL}"), Style::default().fg(Color::Red)),
        ])
    } else {
        Line::from(Span::styled(
            "not yet saved; press r to refresh",
            Style::default().add_modifier(Modifier::DIM),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(Line::from(title))
        .title_bottom(actions);
    let inner = block.inner(area);
    let text = card_text(&card.body, &card.excerpt, inner.width, inner.height);
    let body = Paragraph::new(text).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(body, area);
}

fn draw_status(frame: &mut Frame, status: &StatusLine, page: &PageState, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {}/{} stories ", status.shown, status.total),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if status.busy {
        spans.push(Span::styled(
            " syncing... ",
            Style::default().fg(Color::Yellow),
        ));
    }
    match &status.notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            spans.push(Span::styled(
                format!(" {} ", notice.message),
                Style::default().fg(color),
            ));
            spans.push(Span::styled(
                "(x to dismiss)",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        None => {
            let hint = match page.focus {
                Focus::Search => " type to filter  Enter/Esc done",
                Focus::Cards => " / search  j/k select  e edit  d delete  r refresh  q quit",
            };
            spans.push(Span::styled(
                hint,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_modal(frame: &mut Frame, modal: &ModalView, page: &PageState) {
    let area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            modal.heading,
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let field = |label: &'static str, value: &str, active: bool| {
        let mut text = value.to_string();
        if active {
            text.push('_');
        }
        Paragraph::new(text).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(active))
                .title(label),
        )
    };
    frame.render_widget(
        field("Title", &modal.title, page.field == Field::Title),
        title_area,
    );
    frame.render_widget(
        field("Content", &modal.content, page.field == Field::Content),
        content_area,
    );

    let footer = if modal.saving {
        Line::from(Span::styled("Saving...", Style::default().fg(Color::Yellow)))
    } else {
        Line::from(vec![
            Span::styled(
                format!("[Ctrl+S] {}", modal.save_label),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled("[Tab] next field  [Esc] cancel", Style::default().add_modifier(Modifier::DIM)),
        ])
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}
