//! Terminal key handling.
//!
//! Keys become either page-local changes (focus, selection) or state
//! messages for `storyboard_core::update`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use storyboard_core::{ModalView, Msg, ScreenModel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Cards,
    Search,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Title,
    Content,
}

/// Terminal-only UI state that does not belong in the shared view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub focus: Focus,
    pub selected: usize,
    pub field: Field,
}

impl PageState {
    /// Keeps the selection inside the visible card range.
    pub fn clamp(&mut self, card_count: usize) {
        self.selected = self.selected.min(card_count.saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Send(Msg),
}

/// Result of handling a terminal event
pub fn handle_event(page: &mut PageState, screen: &ScreenModel, event: Event) -> Action {
    let Event::Key(key) = event else {
        return Action::None;
    };
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if let Some(modal) = &screen.modal {
        return handle_modal_key(page, modal, key);
    }
    match page.focus {
        Focus::Search => handle_search_key(page, screen, key),
        Focus::Cards => handle_card_key(page, screen, key),
    }
}

fn handle_card_key(page: &mut PageState, screen: &ScreenModel, key: KeyEvent) -> Action {
    let selected_id = screen
        .cards
        .get(page.selected)
        .filter(|card| card.actions_enabled())
        .and_then(|card| card.id.clone());

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('/') => {
            page.focus = Focus::Search;
            Action::None
        }
        KeyCode::Char('a') => {
            page.field = Field::Title;
            Action::Send(Msg::AddClicked)
        }
        KeyCode::Char('r') => Action::Send(Msg::RefreshRequested),
        KeyCode::Up | KeyCode::Char('k') => {
            page.selected = page.selected.saturating_sub(1);
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            page.selected += 1;
            page.clamp(screen.cards.len());
            Action::None
        }
        KeyCode::Enter | KeyCode::Char('e') => match selected_id {
            Some(id) => {
                page.field = Field::Title;
                Action::Send(Msg::EditClicked(id))
            }
            None => Action::None,
        },
        KeyCode::Delete | KeyCode::Char('d') => match selected_id {
            Some(id) => Action::Send(Msg::DeleteClicked(id)),
            None => Action::None,
        },
        KeyCode::Esc | KeyCode::Char('x') if screen.status.notice.is_some() => {
            Action::Send(Msg::NoticeDismissed)
        }
        _ => Action::None,
    }
}

fn handle_search_key(page: &mut PageState, screen: &ScreenModel, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
            page.focus = Focus::Cards;
            Action::None
        }
        KeyCode::Backspace => {
            let mut term = screen.search_term.clone();
            term.pop();
            page.selected = 0;
            Action::Send(Msg::SearchChanged(term))
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut term = screen.search_term.clone();
            term.push(c);
            page.selected = 0;
            Action::Send(Msg::SearchChanged(term))
        }
        _ => Action::None,
    }
}

fn handle_modal_key(page: &mut PageState, modal: &ModalView, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            page.field = Field::Title;
            Action::Send(Msg::ModalClosed)
        }
        KeyCode::Char('s') if ctrl => Action::Send(Msg::SaveClicked),
        KeyCode::Tab | KeyCode::BackTab => {
            page.field = match page.field {
                Field::Title => Field::Content,
                Field::Content => Field::Title,
            };
            Action::None
        }
        KeyCode::Enter if page.field == Field::Title => {
            page.field = Field::Content;
            Action::None
        }
        KeyCode::Enter => edit_field(page.field, modal, |value| value.push('\n')),
        KeyCode::Backspace => edit_field(page.field, modal, |value| {
            value.pop();
        }),
        KeyCode::Char(c) if !ctrl => edit_field(page.field, modal, |value| value.push(c)),
        _ => Action::None,
    }
}

fn edit_field(field: Field, modal: &ModalView, apply: impl FnOnce(&mut String)) -> Action {
    match field {
        Field::Title => {
            let mut value = modal.title.clone();
            apply(&mut value);
            Action::Send(Msg::TitleEdited(value))
        }
        Field::Content => {
            let mut value = modal.content.clone();
            apply(&mut value);
            Action::Send(Msg::ContentEdited(value))
        }
    }
}
