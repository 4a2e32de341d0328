use storyboard_core::{
    render_screen, update, Command, ModalKind, Msg, NoticeLevel, StoreError, Story, StoryDraft,
    StoryId, UiMode, ViewState,
};

fn loaded(stories: Vec<Story>) -> ViewState {
    let (mut state, command) = ViewState::initial();
    assert_eq!(command, Command::LoadStories);
    assert_eq!(update(&mut state, Msg::StoriesLoaded(Ok(stories))), None);
    state
}

fn two_stories() -> ViewState {
    loaded(vec![
        Story::new("1", "Alpha", "foo"),
        Story::new("5", "Beta", "bar"),
    ])
}

#[test]
fn initial_state_requests_list_and_is_busy() {
    let (state, command) = ViewState::initial();
    assert_eq!(command, Command::LoadStories);
    assert!(state.is_busy());
    assert_eq!(state.mode, UiMode::Browsing);
}

#[test]
fn add_opens_blank_create_modal_without_fetching() {
    let mut state = two_stories();
    state.draft = StoryDraft::new("left", "over");

    assert_eq!(update(&mut state, Msg::AddClicked), None);
    assert_eq!(state.mode, UiMode::Creating);
    assert_eq!(state.draft, StoryDraft::default());
    assert!(!state.is_busy());
}

#[test]
fn create_flow_appends_server_story_and_refreshes() {
    let mut state = two_stories();
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::TitleEdited("T".to_string()));
    update(&mut state, Msg::ContentEdited("C".to_string()));

    let command = update(&mut state, Msg::SaveClicked);
    assert_eq!(
        command,
        Some(Command::CreateStory {
            ticket: 1,
            draft: StoryDraft::new("T", "C"),
        })
    );
    assert!(state.is_saving());
    assert_eq!(state.mode, UiMode::Creating);

    let created = Story::new("42", "T", "C");
    let command = update(
        &mut state,
        Msg::StoryCreated {
            ticket: 1,
            result: Ok(created.clone()),
        },
    );
    assert_eq!(command, Some(Command::LoadStories));
    assert_eq!(state.mode, UiMode::Browsing);
    assert!(!state.is_saving());
    assert_eq!(state.stories.last(), Some(&created));
}

#[test]
fn double_save_sends_one_request() {
    let mut state = two_stories();
    update(&mut state, Msg::AddClicked);
    assert!(update(&mut state, Msg::SaveClicked).is_some());
    assert_eq!(update(&mut state, Msg::SaveClicked), None);
    assert_eq!(state.pending_requests, 1);
}

#[test]
fn failed_create_keeps_modal_and_draft_for_retry() {
    let mut state = two_stories();
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::TitleEdited("draft".to_string()));
    update(&mut state, Msg::SaveClicked);

    let command = update(
        &mut state,
        Msg::StoryCreated {
            ticket: 1,
            result: Err(StoreError::Network("connection refused".to_string())),
        },
    );
    assert_eq!(command, None);
    assert_eq!(state.mode, UiMode::Creating);
    assert!(!state.is_saving());
    assert_eq!(state.draft.title, "draft");
    assert_eq!(state.stories.len(), 2);
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("connection refused"));

    assert!(update(&mut state, Msg::SaveClicked).is_some());
}

#[test]
fn edit_prefills_draft_from_local_copy() {
    let mut state = two_stories();
    assert_eq!(update(&mut state, Msg::EditClicked(StoryId::from("5"))), None);
    assert_eq!(
        state.mode,
        UiMode::Editing {
            id: StoryId::from("5")
        }
    );
    assert_eq!(state.draft, StoryDraft::new("Beta", "bar"));
}

#[test]
fn edit_of_unknown_story_raises_notice() {
    let mut state = two_stories();
    update(&mut state, Msg::EditClicked(StoryId::from("404")));
    assert_eq!(state.mode, UiMode::Browsing);
    assert!(state.notice.is_some());
}

#[test]
fn update_replaces_only_matching_entry() {
    let mut state = two_stories();
    update(&mut state, Msg::EditClicked(StoryId::from("5")));
    update(&mut state, Msg::TitleEdited("X".to_string()));

    let command = update(&mut state, Msg::SaveClicked);
    assert_eq!(
        command,
        Some(Command::UpdateStory {
            id: StoryId::from("5"),
            ticket: 1,
            draft: StoryDraft::new("X", "bar"),
        })
    );

    let command = update(
        &mut state,
        Msg::StoryUpdated {
            id: StoryId::from("5"),
            ticket: 1,
            result: Ok(Story::new("5", "X", "bar")),
        },
    );
    assert_eq!(command, Some(Command::LoadStories));
    assert_eq!(state.mode, UiMode::Browsing);
    assert_eq!(state.stories[0], Story::new("1", "Alpha", "foo"));
    assert_eq!(state.stories[1], Story::new("5", "X", "bar"));
}

#[test]
fn update_not_found_drops_entry_and_closes_modal() {
    let mut state = two_stories();
    update(&mut state, Msg::EditClicked(StoryId::from("5")));
    update(&mut state, Msg::SaveClicked);

    let command = update(
        &mut state,
        Msg::StoryUpdated {
            id: StoryId::from("5"),
            ticket: 1,
            result: Err(StoreError::NotFound(StoryId::from("5"))),
        },
    );
    assert_eq!(command, Some(Command::LoadStories));
    assert_eq!(state.mode, UiMode::Browsing);
    assert!(state.find_story(&StoryId::from("5")).is_none());
}

#[test]
fn delete_removes_entry_only_after_success() {
    let mut state = two_stories();
    let id = StoryId::from("5");

    let command = update(&mut state, Msg::DeleteClicked(id.clone()));
    assert_eq!(command, Some(Command::DeleteStory(id.clone())));
    assert_eq!(state.stories.len(), 2);

    let command = update(
        &mut state,
        Msg::StoryDeleted {
            id: id.clone(),
            result: Ok(()),
        },
    );
    assert_eq!(command, Some(Command::LoadStories));
    assert!(state.find_story(&id).is_none());
    assert_eq!(state.stories.len(), 1);
}

#[test]
fn failed_delete_leaves_list_unchanged() {
    let mut state = two_stories();
    let id = StoryId::from("5");
    update(&mut state, Msg::DeleteClicked(id.clone()));

    let command = update(
        &mut state,
        Msg::StoryDeleted {
            id: id.clone(),
            result: Err(StoreError::Status {
                status: 500,
                message: "boom".to_string(),
            }),
        },
    );
    assert_eq!(command, None);
    assert!(state.find_story(&id).is_some());
    assert_eq!(state.notice.clone().unwrap().level, NoticeLevel::Error);
    assert!(!state.is_busy());
}

#[test]
fn delete_not_found_treats_story_as_gone() {
    let mut state = two_stories();
    let id = StoryId::from("1");
    update(&mut state, Msg::DeleteClicked(id.clone()));
    let command = update(
        &mut state,
        Msg::StoryDeleted {
            id: id.clone(),
            result: Err(StoreError::NotFound(id.clone())),
        },
    );
    assert_eq!(command, Some(Command::LoadStories));
    assert!(state.find_story(&id).is_none());
    assert_eq!(state.notice.clone().unwrap().level, NoticeLevel::Info);
}

#[test]
fn late_create_response_after_cancel_does_not_close_new_modal() {
    let mut state = two_stories();
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::SaveClicked);
    update(&mut state, Msg::ModalClosed);
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::TitleEdited("second".to_string()));

    update(
        &mut state,
        Msg::StoryCreated {
            ticket: 1,
            result: Ok(Story::new("9", "", "")),
        },
    );
    assert_eq!(state.mode, UiMode::Creating);
    assert_eq!(state.draft.title, "second");
    assert!(state.find_story(&StoryId::from("9")).is_some());
}

#[test]
fn late_create_response_leaves_resubmitted_modal_saving() {
    let mut state = two_stories();
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::SaveClicked);
    update(&mut state, Msg::ModalClosed);
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::TitleEdited("second".to_string()));
    let command = update(&mut state, Msg::SaveClicked);
    assert!(matches!(
        command,
        Some(Command::CreateStory { ticket: 2, .. })
    ));

    update(
        &mut state,
        Msg::StoryCreated {
            ticket: 1,
            result: Ok(Story::new("9", "", "")),
        },
    );
    assert_eq!(state.mode, UiMode::Creating);
    assert_eq!(state.saving, Some(2));
    assert_eq!(update(&mut state, Msg::SaveClicked), None);

    update(
        &mut state,
        Msg::StoryCreated {
            ticket: 2,
            result: Ok(Story::new("10", "second", "")),
        },
    );
    assert_eq!(state.mode, UiMode::Browsing);
    assert!(!state.is_saving());
}

#[test]
fn late_create_failure_does_not_unlock_resubmitted_modal() {
    let mut state = two_stories();
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::SaveClicked);
    update(&mut state, Msg::ModalClosed);
    update(&mut state, Msg::AddClicked);
    update(&mut state, Msg::SaveClicked);

    update(
        &mut state,
        Msg::StoryCreated {
            ticket: 1,
            result: Err(StoreError::Network("timed out".to_string())),
        },
    );
    assert_eq!(state.saving, Some(2));
    assert!(state.notice.is_some());
    assert_eq!(update(&mut state, Msg::SaveClicked), None);
    assert_eq!(state.pending_requests, 1);
}

#[test]
fn late_update_response_does_not_close_reopened_editor() {
    let mut state = two_stories();
    let id = StoryId::from("5");
    update(&mut state, Msg::EditClicked(id.clone()));
    update(&mut state, Msg::SaveClicked);
    update(&mut state, Msg::ModalClosed);
    update(&mut state, Msg::EditClicked(id.clone()));
    update(&mut state, Msg::TitleEdited("again".to_string()));
    update(&mut state, Msg::SaveClicked);

    update(
        &mut state,
        Msg::StoryUpdated {
            id: id.clone(),
            ticket: 1,
            result: Ok(Story::new("5", "Beta", "bar")),
        },
    );
    assert_eq!(state.mode, UiMode::Editing { id });
    assert_eq!(state.saving, Some(2));
    assert_eq!(state.draft.title, "again");
}

#[test]
fn list_responses_apply_in_arrival_order() {
    let mut state = two_stories();
    update(&mut state, Msg::RefreshRequested);
    update(&mut state, Msg::RefreshRequested);
    update(
        &mut state,
        Msg::StoriesLoaded(Ok(vec![Story::new("1", "newer", "")])),
    );
    update(
        &mut state,
        Msg::StoriesLoaded(Ok(vec![Story::new("1", "older", "")])),
    );
    assert_eq!(state.stories[0].title, "older");
    assert!(!state.is_busy());
}

#[test]
fn failed_load_keeps_previous_list() {
    let mut state = two_stories();
    update(&mut state, Msg::RefreshRequested);
    update(
        &mut state,
        Msg::StoriesLoaded(Err(StoreError::Decode("expected array".to_string()))),
    );
    assert_eq!(state.stories.len(), 2);
    assert!(state.notice.is_some());

    update(&mut state, Msg::NoticeDismissed);
    assert!(state.notice.is_none());
}

#[test]
fn screen_shows_filtered_cards_and_modal() {
    let mut state = two_stories();
    update(&mut state, Msg::SearchChanged("AL".to_string()));

    let screen = render_screen(&state);
    assert_eq!(screen.cards.len(), 1);
    assert_eq!(screen.cards[0].title, "Alpha");
    assert_eq!(screen.status.shown, 1);
    assert_eq!(screen.status.total, 2);
    assert!(screen.modal.is_none());
    assert_eq!(state.stories.len(), 2);

    update(&mut state, Msg::EditClicked(StoryId::from("1")));
    let modal = render_screen(&state).modal.unwrap();
    assert_eq!(modal.kind, ModalKind::Edit);
    assert_eq!(modal.heading, "Edit Story");
    assert_eq!(modal.save_label, "Save Changes");
    assert_eq!(modal.title, "Alpha");
}

#[test]
fn view_state_serializes_for_snapshots() {
    let mut state = two_stories();
    update(&mut state, Msg::EditClicked(StoryId::from("1")));
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["mode"]["mode"], "editing");
    assert_eq!(json["mode"]["id"], "1");

    let back: ViewState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
