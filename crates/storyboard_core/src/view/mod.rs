//! Framework-agnostic view model.
//!
//! # Responsibility
//! - Project [`crate::state::view_state::ViewState`] into what a page shows:
//!   search box, filtered card grid, optional modal, status line.
//! - Keep rendering front-ends free of filtering and labelling rules.

pub mod card;
pub mod screen;
