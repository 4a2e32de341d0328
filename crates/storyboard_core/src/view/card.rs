//! Story card projection.

use crate::model::story::{Story, StoryId};
use once_cell::sync::Lazy;
use regex::Regex;

/// Default excerpt length used by compact card layouts.
pub const CARD_EXCERPT_CHARS: usize = 100;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One rendered story card with its "Edit"/"Delete" actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: Option<StoryId>,
    pub title: String,
    pub body: String,
    /// Single-line body summary for compact layouts.
    pub excerpt: String,
}

impl CardView {
    pub fn from_story(story: &Story) -> Self {
        Self {
            id: story.id.clone(),
            title: story.title.clone(),
            body: story.content.clone(),
            excerpt: card_excerpt(&story.content, CARD_EXCERPT_CHARS),
        }
    }

    /// Edit and Delete need a server id to address the story.
    pub fn actions_enabled(&self) -> bool {
        self.id.as_ref().is_some_and(StoryId::is_addressable)
    }
}

/// Collapses whitespace runs and keeps at most `max_chars` characters.
///
/// Truncated excerpts end with `...`.
pub fn card_excerpt(content: &str, max_chars: usize) -> String {
    let normalized = WHITESPACE_RE.replace_all(content.trim(), " ");
    let mut excerpt = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        excerpt.push_str("...");
    }
    excerpt
}
