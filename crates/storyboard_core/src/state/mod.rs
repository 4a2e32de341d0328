//! Application state and its transition function.
//!
//! # Responsibility
//! - Hold the story list plus UI state (search term, modal, working draft).
//! - Turn UI events and store responses into state changes and store commands.
//!
//! # Invariants
//! - All mutation goes through [`update::update`]; no ambient globals.
//! - The story list is refreshed only after a confirmed mutation or an
//!   explicit refresh request.

pub mod update;
pub mod view_state;
