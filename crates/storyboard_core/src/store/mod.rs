//! Remote story store contract and implementations.
//!
//! # Responsibility
//! - Define the four store operations (list/create/update/delete).
//! - Map transport failures onto a small, recoverable error taxonomy.
//!
//! # Invariants
//! - Implementations never retry; one call issues at most one request.
//! - `NotFound` is reported only for id-addressed calls (update/delete).

use crate::model::story::{Story, StoryDraft, StoryId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod http;
pub mod memory;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure surfaced to callers and, through state messages, to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreError {
    /// Request could not be sent or response could not be received.
    Network(String),
    /// Response body is not JSON of the expected shape.
    Decode(String),
    /// Id-addressed call targeted a story the store does not have.
    NotFound(StoryId),
    /// Any other non-success response.
    Status { status: u16, message: String },
    /// Request could not be built locally.
    InvalidRequest(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Decode(message) => write!(f, "unexpected response body: {message}"),
            Self::NotFound(id) => write!(f, "story not found: {id}"),
            Self::Status { status, message } if message.is_empty() => {
                write!(f, "store responded with status {status}")
            }
            Self::Status { status, message } => {
                write!(f, "store responded with status {status}: {message}")
            }
            Self::InvalidRequest(message) => write!(f, "invalid request: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Remote store of stories.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Fetches the full story collection as the store reports it.
    async fn list_stories(&self) -> StoreResult<Vec<Story>>;
    /// Creates a story; the returned record carries the store-assigned id.
    async fn create_story(&self, draft: &StoryDraft) -> StoreResult<Story>;
    /// Replaces title and content of an existing story.
    async fn update_story(&self, id: &StoryId, draft: &StoryDraft) -> StoreResult<Story>;
    async fn delete_story(&self, id: &StoryId) -> StoreResult<()>;
}
