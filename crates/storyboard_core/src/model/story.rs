//! Story record and identifier.
//!
//! # Responsibility
//! - Decode story JSON leniently: numeric or string ids, `null` text fields.
//! - Encode the `{title, content}` request body for create/update calls.
//!
//! # Invariants
//! - `StoryId` equality is textual: `5` and `"5"` decode to the same id.
//! - A decoded `Story` never carries `null` text; missing fields become `""`.
//! - An object with none of `id`, `story_id`, `title`, `content` is not a story.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Opaque server-assigned story identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns whether the id can name a single story under the collection URL.
    ///
    /// Empty ids and the dot segments `.`/`..` would resolve to the collection
    /// itself or its parent.
    pub fn is_addressable(&self) -> bool {
        !matches!(self.0.as_str(), "" | "." | "..")
    }
}

impl Display for StoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for StoryId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for StoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum WireId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match WireId::deserialize(deserializer)? {
            WireId::Text(value) => Self(value),
            WireId::Unsigned(value) => Self(value.to_string()),
            WireId::Signed(value) => Self(value.to_string()),
        })
    }
}

/// One story as held by the client.
///
/// The local copy is a transient snapshot of remote state; it is replaced on
/// every successful list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireStory")]
pub struct Story {
    /// `None` only when the store response did not report an identifier.
    pub id: Option<StoryId>,
    pub title: String,
    pub content: String,
}

impl Story {
    pub fn new(id: impl Into<StoryId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns whether this story carries the given identifier.
    pub fn has_id(&self, id: &StoryId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Copies the editable fields into a fresh draft.
    pub fn to_draft(&self) -> StoryDraft {
        StoryDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

// Create responses from the stories backend report the new key as `story_id`.
#[derive(Deserialize)]
struct WireStory {
    #[serde(default)]
    id: Option<StoryId>,
    #[serde(default)]
    story_id: Option<StoryId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl TryFrom<WireStory> for Story {
    type Error = String;

    fn try_from(value: WireStory) -> Result<Self, Self::Error> {
        let id = value.id.or(value.story_id);
        if id.is_none() && value.title.is_none() && value.content.is_none() {
            return Err("object has no story fields (id, story_id, title, content)".to_string());
        }
        Ok(Self {
            id,
            title: value.title.unwrap_or_default(),
            content: value.content.unwrap_or_default(),
        })
    }
}

/// Working record edited by the create/edit modals.
///
/// Serialized as the request body of create and update calls. Empty fields are
/// sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
}

impl StoryDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
