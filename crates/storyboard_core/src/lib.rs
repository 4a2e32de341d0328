//! Core logic for the Storyboard story manager.
//! This crate owns the story model, the remote store client, search, and the
//! view state machine; front-ends only draw and forward input.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod state;
pub mod store;
pub mod view;

pub use config::{ConfigError, StoreConfig, DEFAULT_BASE_URL};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::story::{Story, StoryDraft, StoryId};
pub use search::filter::{filter_stories, story_matches};
pub use service::story_service::StoryService;
pub use state::update::update;
pub use state::view_state::{Command, Msg, Notice, NoticeLevel, UiMode, ViewState};
pub use store::http::HttpStoryStore;
pub use store::memory::MemoryStoryStore;
pub use store::{StoreError, StoreResult, StoryStore};
pub use view::card::{card_excerpt, CardView};
pub use view::screen::{render_screen, ModalKind, ModalView, ScreenModel, StatusLine};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
