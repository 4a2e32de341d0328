//! Whole-page projection.

use crate::search::filter::filter_stories;
use crate::state::view_state::{Notice, UiMode, ViewState};
use crate::view::card::CardView;

pub const SEARCH_LABEL: &str = "Search stories...";
pub const ADD_STORY_LABEL: &str = "Add Story";
pub const EDIT_STORY_LABEL: &str = "Edit Story";
pub const SAVE_LABEL: &str = "Save Changes";
pub const EDIT_ACTION_LABEL: &str = "Edit";
pub const DELETE_ACTION_LABEL: &str = "Delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Create,
    Edit,
}

/// Open create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub kind: ModalKind,
    pub heading: &'static str,
    pub title: String,
    pub content: String,
    pub save_label: &'static str,
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub busy: bool,
    pub shown: usize,
    pub total: usize,
    pub notice: Option<Notice>,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub search_label: &'static str,
    pub search_term: String,
    pub add_label: &'static str,
    pub cards: Vec<CardView>,
    pub modal: Option<ModalView>,
    pub status: StatusLine,
}

/// Projects `state` into a drawable screen.
pub fn render_screen(state: &ViewState) -> ScreenModel {
    let cards = filter_stories(&state.stories, &state.search_term)
        .into_iter()
        .map(CardView::from_story)
        .collect::<Vec<_>>();

    let modal = match state.mode {
        UiMode::Browsing => None,
        UiMode::Creating => Some(modal_view(state, ModalKind::Create, ADD_STORY_LABEL)),
        UiMode::Editing { .. } => Some(modal_view(state, ModalKind::Edit, EDIT_STORY_LABEL)),
    };

    ScreenModel {
        search_label: SEARCH_LABEL,
        search_term: state.search_term.clone(),
        add_label: ADD_STORY_LABEL,
        status: StatusLine {
            busy: state.is_busy(),
            shown: cards.len(),
            total: state.stories.len(),
            notice: state.notice.clone(),
        },
        cards,
        modal,
    }
}

fn modal_view(state: &ViewState, kind: ModalKind, heading: &'static str) -> ModalView {
    ModalView {
        kind,
        heading,
        title: state.draft.title.clone(),
        content: state.draft.content.clone(),
        save_label: SAVE_LABEL,
        saving: state.is_saving(),
    }
}
