//! One-shot subcommands printing to stdout.

use anyhow::Context;
use storyboard_core::{filter_stories, CardView, StoryDraft, StoryId, StoryService, StoryStore};

pub async fn list<S: StoryStore>(
    service: &StoryService<S>,
    search: &str,
    json: bool,
) -> anyhow::Result<()> {
    let stories = service
        .list_stories()
        .await
        .context("could not load stories")?;
    let shown = filter_stories(&stories, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }
    if shown.is_empty() {
        println!("no stories");
        return Ok(());
    }
    for story in shown {
        print!("{}", format_card(&CardView::from_story(story)));
    }
    Ok(())
}

pub async fn add<S: StoryStore>(
    service: &StoryService<S>,
    title: String,
    content: String,
) -> anyhow::Result<()> {
    let story = service
        .create_story(&StoryDraft::new(title, content))
        .await
        .context("could not create story")?;
    print!("{}", format_card(&CardView::from_story(&story)));
    Ok(())
}

pub async fn edit<S: StoryStore>(
    service: &StoryService<S>,
    id: String,
    title: String,
    content: String,
) -> anyhow::Result<()> {
    let id = StoryId::new(id);
    let story = service
        .update_story(&id, &StoryDraft::new(title, content))
        .await
        .with_context(|| format!("could not update story {id}"))?;
    print!("{}", format_card(&CardView::from_story(&story)));
    Ok(())
}

pub async fn delete<S: StoryStore>(service: &StoryService<S>, id: String) -> anyhow::Result<()> {
    let id = StoryId::new(id);
    service
        .delete_story(&id)
        .await
        .with_context(|| format!("could not delete story {id}"))?;
    println!("deleted story {id}");
    Ok(())
}

/// Plain-text card: id and title header, indented body.
fn format_card(card: &CardView) -> String {
    let id = card
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let mut out = format!("[{id}] {}\n", card.title);
    for line in card.body.lines() {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}
