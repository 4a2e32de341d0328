//! Single transition function for [`ViewState`].
//!
//! # Invariants
//! - Modals open only from `Browsing`.
//! - Local list mutations follow confirmed store responses, never requests.
//! - Every emitted command increments `pending_requests`; every response
//!   message decrements it.
//! - A save response only closes or unlocks the modal whose submission
//!   carried the same ticket.

use crate::model::story::{Story, StoryId};
use crate::state::view_state::{Command, Msg, Notice, UiMode, ViewState};
use crate::store::StoreError;
use log::{debug, warn};

/// Applies `msg` to `state` and returns the store command it requires, if any.
pub fn update(state: &mut ViewState, msg: Msg) -> Option<Command> {
    let command = match msg {
        Msg::SearchChanged(term) => {
            state.search_term = term;
            None
        }
        Msg::RefreshRequested => Some(Command::LoadStories),
        Msg::AddClicked => {
            if state.mode == UiMode::Browsing {
                state.draft = Default::default();
                state.saving = None;
                state.mode = UiMode::Creating;
            }
            None
        }
        Msg::EditClicked(id) => {
            if state.mode == UiMode::Browsing {
                open_editor(state, id);
            }
            None
        }
        Msg::DeleteClicked(id) => Some(Command::DeleteStory(id)),
        Msg::TitleEdited(title) => {
            if state.mode != UiMode::Browsing {
                state.draft.title = title;
            }
            None
        }
        Msg::ContentEdited(content) => {
            if state.mode != UiMode::Browsing {
                state.draft.content = content;
            }
            None
        }
        Msg::SaveClicked => save(state),
        Msg::ModalClosed => {
            close_modal(state);
            None
        }
        Msg::NoticeDismissed => {
            state.notice = None;
            None
        }
        Msg::StoriesLoaded(result) => {
            settle_request(state);
            match result {
                Ok(stories) => state.stories = stories,
                Err(err) => fail(state, "could not load stories", &err),
            }
            None
        }
        Msg::StoryCreated { ticket, result } => {
            settle_request(state);
            on_created(state, ticket, result)
        }
        Msg::StoryUpdated { id, ticket, result } => {
            settle_request(state);
            on_updated(state, id, ticket, result)
        }
        Msg::StoryDeleted { id, result } => {
            settle_request(state);
            on_deleted(state, id, result)
        }
    };

    if command.is_some() {
        state.pending_requests += 1;
    }
    command
}

fn open_editor(state: &mut ViewState, id: StoryId) {
    let Some(draft) = state.find_story(&id).map(Story::to_draft) else {
        debug!("event=edit_open module=state status=skipped reason=unknown_id story_id={id}");
        state.notice = Some(Notice::error(format!("story {id} is no longer listed")));
        return;
    };
    state.draft = draft;
    state.saving = None;
    state.mode = UiMode::Editing { id };
}

fn save(state: &mut ViewState) -> Option<Command> {
    if state.is_saving() {
        return None;
    }
    let ticket = state.last_save_ticket + 1;
    let command = match &state.mode {
        UiMode::Browsing => return None,
        UiMode::Creating => Command::CreateStory {
            ticket,
            draft: state.draft.clone(),
        },
        UiMode::Editing { id } => Command::UpdateStory {
            id: id.clone(),
            ticket,
            draft: state.draft.clone(),
        },
    };
    state.last_save_ticket = ticket;
    state.saving = Some(ticket);
    Some(command)
}

fn close_modal(state: &mut ViewState) {
    state.mode = UiMode::Browsing;
    state.saving = None;
}

fn on_created(
    state: &mut ViewState,
    ticket: u64,
    result: Result<Story, StoreError>,
) -> Option<Command> {
    let own_modal = state.saving == Some(ticket) && state.mode == UiMode::Creating;
    match result {
        Ok(story) => {
            state.stories.push(story);
            if own_modal {
                close_modal(state);
            }
            Some(Command::LoadStories)
        }
        Err(err) => {
            if own_modal {
                state.saving = None;
            }
            fail(state, "could not create story", &err);
            None
        }
    }
}

fn on_updated(
    state: &mut ViewState,
    id: StoryId,
    ticket: u64,
    result: Result<Story, StoreError>,
) -> Option<Command> {
    let editing_this = matches!(&state.mode, UiMode::Editing { id: open } if *open == id);
    let own_modal = editing_this && state.saving == Some(ticket);
    match result {
        Ok(mut updated) => {
            let target = updated.id.get_or_insert_with(|| id.clone()).clone();
            if let Some(slot) = state.stories.iter_mut().find(|story| story.has_id(&target)) {
                *slot = updated;
            }
            if own_modal {
                close_modal(state);
            }
            Some(Command::LoadStories)
        }
        Err(StoreError::NotFound(missing)) => {
            state.stories.retain(|story| !story.has_id(&missing));
            if editing_this {
                close_modal(state);
            }
            state.notice = Some(Notice::error(format!(
                "story {missing} no longer exists on the server"
            )));
            Some(Command::LoadStories)
        }
        Err(err) => {
            if own_modal {
                state.saving = None;
            }
            fail(state, "could not update story", &err);
            None
        }
    }
}

fn on_deleted(
    state: &mut ViewState,
    id: StoryId,
    result: Result<(), StoreError>,
) -> Option<Command> {
    match result {
        Ok(()) => {
            state.stories.retain(|story| !story.has_id(&id));
            Some(Command::LoadStories)
        }
        Err(StoreError::NotFound(missing)) => {
            state.stories.retain(|story| !story.has_id(&missing));
            state.notice = Some(Notice::info(format!("story {missing} was already deleted")));
            Some(Command::LoadStories)
        }
        Err(err) => {
            fail(state, "could not delete story", &err);
            None
        }
    }
}

fn settle_request(state: &mut ViewState) {
    state.pending_requests = state.pending_requests.saturating_sub(1);
}

fn fail(state: &mut ViewState, action: &str, err: &StoreError) {
    warn!("event=store_failure module=state status=error action=\"{action}\" error=\"{err}\"");
    state.notice = Some(Notice::error(format!("{action}: {err}")));
}
