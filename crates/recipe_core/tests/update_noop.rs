use recipe_core::{update, AppState, Msg, Tab};

#[test]
fn idle_intents_leave_state_untouched() {
    let state = AppState::new();
    for msg in [
        Msg::LoadMoreClicked,
        Msg::ModalDismissed,
        Msg::TabSelected(Tab::Search),
        Msg::SearchSubmitted("   ".to_string()),
    ] {
        let (next, effects) = update(state.clone(), msg);

        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}

#[test]
fn unknown_completions_are_ignored() {
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::SearchLoaded {
            request_id: 42,
            result: Ok(Vec::new()),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn startup_requests_one_redraw() {
    let (mut state, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(effects.len(), 1);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}
