//! Story data model shared by the store client, state machine and view.
//!
//! # Responsibility
//! - Define the single persisted entity (`Story`) and its working copy (`StoryDraft`).
//! - Own the wire shape of story JSON in both directions.
//!
//! # Invariants
//! - `StoryId` is assigned by the remote store and never generated locally.

pub mod story;
