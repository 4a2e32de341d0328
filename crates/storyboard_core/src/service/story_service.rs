//! Story use-case service.
//!
//! # Responsibility
//! - Provide logged list/create/update/delete entry points over a [`StoryStore`].
//! - Bridge [`Command`] values from the state machine to store calls.
//!
//! # Invariants
//! - Logs never include story titles or content.
//! - An update response without an id is attributed to the requested id and
//!   carries the fields that were sent.

use crate::model::story::{Story, StoryDraft, StoryId};
use crate::state::view_state::{Command, Msg};
use crate::store::{StoreResult, StoryStore};
use log::{info, warn};
use std::time::Instant;

/// Use-case service wrapper for story store operations.
pub struct StoryService<S: StoryStore> {
    store: S,
}

impl<S: StoryStore> StoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every story known to the store.
    pub async fn list_stories(&self) -> StoreResult<Vec<Story>> {
        let started = Instant::now();
        let result = self.store.list_stories().await;
        match &result {
            Ok(stories) => info!(
                "event=story_list module=service status=ok count={} duration_ms={}",
                stories.len(),
                started.elapsed().as_millis()
            ),
            Err(err) => warn!("event=story_list module=service status=error error=\"{err}\""),
        }
        result
    }

    /// Creates one story; empty title/content are sent unchanged.
    pub async fn create_story(&self, draft: &StoryDraft) -> StoreResult<Story> {
        let result = self.store.create_story(draft).await;
        match &result {
            Ok(story) => info!(
                "event=story_create module=service status=ok story_id={}",
                display_id(story.id.as_ref())
            ),
            Err(err) => warn!("event=story_create module=service status=error error=\"{err}\""),
        }
        result
    }

    /// Replaces title and content of story `id`.
    pub async fn update_story(&self, id: &StoryId, draft: &StoryDraft) -> StoreResult<Story> {
        let result = self
            .store
            .update_story(id, draft)
            .await
            .map(|story| match story.id {
                Some(_) => story,
                None => Story {
                    id: Some(id.clone()),
                    title: draft.title.clone(),
                    content: draft.content.clone(),
                },
            });
        match &result {
            Ok(_) => info!("event=story_update module=service status=ok story_id={id}"),
            Err(err) => warn!(
                "event=story_update module=service status=error story_id={id} error=\"{err}\""
            ),
        }
        result
    }

    pub async fn delete_story(&self, id: &StoryId) -> StoreResult<()> {
        let result = self.store.delete_story(id).await;
        match &result {
            Ok(()) => info!("event=story_delete module=service status=ok story_id={id}"),
            Err(err) => warn!(
                "event=story_delete module=service status=error story_id={id} error=\"{err}\""
            ),
        }
        result
    }

    /// Runs one state command and returns the message carrying its outcome.
    pub async fn execute(&self, command: Command) -> Msg {
        match command {
            Command::LoadStories => Msg::StoriesLoaded(self.list_stories().await),
            Command::CreateStory { ticket, draft } => Msg::StoryCreated {
                ticket,
                result: self.create_story(&draft).await,
            },
            Command::UpdateStory { id, ticket, draft } => {
                let result = self.update_story(&id, &draft).await;
                Msg::StoryUpdated { id, ticket, result }
            }
            Command::DeleteStory(id) => {
                let result = self.delete_story(&id).await;
                Msg::StoryDeleted { id, result }
            }
        }
    }
}

fn display_id(id: Option<&StoryId>) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}
