//! In-process [`StoryStore`] used by tests and local wiring checks.
//!
//! # Invariants
//! - Ids are assigned sequentially starting after the highest seeded numeric id.
//! - An injected failure is consumed by exactly one call.

use crate::model::story::{Story, StoryDraft, StoryId};
use crate::store::{StoreError, StoreResult, StoryStore};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryState {
    stories: Vec<Story>,
    next_id: u64,
    fail_next: Option<StoreError>,
    calls: usize,
}

/// Vector-backed story store.
#[derive(Debug, Default)]
pub struct MemoryStoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; numeric ids advance the id sequence.
    pub fn with_stories(stories: Vec<Story>) -> Self {
        let next_id = stories
            .iter()
            .filter_map(|story| story.id.as_ref())
            .filter_map(|id| id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            state: Mutex::new(MemoryState {
                stories,
                next_id,
                ..MemoryState::default()
            }),
        }
    }

    /// Makes the next store call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        self.lock().fail_next = Some(error);
    }

    /// Returns the stored collection in insertion order.
    pub fn snapshot(&self) -> Vec<Story> {
        self.lock().stories.clone()
    }

    /// Number of store calls served so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_call(&self) -> StoreResult<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        state.calls += 1;
        match state.fail_next.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl StoryStore for MemoryStoryStore {
    async fn list_stories(&self) -> StoreResult<Vec<Story>> {
        let state = self.begin_call()?;
        Ok(state.stories.clone())
    }

    async fn create_story(&self, draft: &StoryDraft) -> StoreResult<Story> {
        let mut state = self.begin_call()?;
        state.next_id += 1;
        let story = Story {
            id: Some(StoryId::from(state.next_id)),
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        state.stories.push(story.clone());
        Ok(story)
    }

    async fn update_story(&self, id: &StoryId, draft: &StoryDraft) -> StoreResult<Story> {
        let mut state = self.begin_call()?;
        let story = state
            .stories
            .iter_mut()
            .find(|story| story.has_id(id))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        story.title = draft.title.clone();
        story.content = draft.content.clone();
        Ok(story.clone())
    }

    async fn delete_story(&self, id: &StoryId) -> StoreResult<()> {
        let mut state = self.begin_call()?;
        let before = state.stories.len();
        state.stories.retain(|story| !story.has_id(id));
        if state.stories.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
