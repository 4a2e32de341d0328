//! View state, messages and commands.

use crate::model::story::{Story, StoryDraft, StoryId};
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Which surface currently has the user's attention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UiMode {
    #[default]
    Browsing,
    /// Add modal is open.
    Creating,
    /// Edit modal is open for `id`.
    Editing { id: StoryId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One user-visible message; replaced by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Complete UI state of the story manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Last known server list, in server order plus local appends.
    pub stories: Vec<Story>,
    pub search_term: String,
    pub mode: UiMode,
    /// Working record of the open modal.
    pub draft: StoryDraft,
    /// Ticket of the save from the open modal that is awaiting its response.
    pub saving: Option<u64>,
    /// Last save ticket handed out; tickets start at 1.
    pub last_save_ticket: u64,
    pub pending_requests: u32,
    pub notice: Option<Notice>,
}

impl ViewState {
    /// Returns the empty state together with the startup fetch.
    pub fn initial() -> (Self, Command) {
        let state = Self {
            pending_requests: 1,
            ..Self::default()
        };
        (state, Command::LoadStories)
    }

    pub fn is_busy(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    pub fn find_story(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|story| story.has_id(id))
    }
}

/// Inputs to [`crate::state::update::update`]: user actions and store responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SearchChanged(String),
    RefreshRequested,
    AddClicked,
    EditClicked(StoryId),
    DeleteClicked(StoryId),
    TitleEdited(String),
    ContentEdited(String),
    SaveClicked,
    ModalClosed,
    NoticeDismissed,
    StoriesLoaded(StoreResult<Vec<Story>>),
    /// Outcome of the create issued with `ticket`.
    StoryCreated {
        ticket: u64,
        result: StoreResult<Story>,
    },
    StoryUpdated {
        id: StoryId,
        ticket: u64,
        result: StoreResult<Story>,
    },
    StoryDeleted {
        id: StoryId,
        result: Result<(), StoreError>,
    },
}

/// Store work requested by a transition; its outcome returns as a [`Msg`].
///
/// Saves carry the ticket of the modal submission that issued them; the
/// response message echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    LoadStories,
    CreateStory {
        ticket: u64,
        draft: StoryDraft,
    },
    UpdateStory {
        id: StoryId,
        ticket: u64,
        draft: StoryDraft,
    },
    DeleteStory(StoryId),
}
