//! Case-insensitive substring filter over title and content.
//!
//! # Invariants
//! - An empty term matches every story.
//! - Result order equals input order.
//! - The input slice is never modified.

use crate::model::story::Story;

/// Returns stories whose title or content contains `term`, ignoring case.
pub fn filter_stories<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.to_lowercase();
    stories
        .iter()
        .filter(|story| matches_lowercase(story, &needle))
        .collect()
}

/// Returns whether one story matches `term`, ignoring case.
pub fn story_matches(story: &Story, term: &str) -> bool {
    matches_lowercase(story, &term.to_lowercase())
}

fn matches_lowercase(story: &Story, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    story.title.to_lowercase().contains(needle) || story.content.to_lowercase().contains(needle)
}
