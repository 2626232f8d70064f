use std::sync::Once;

use pretty_assertions::assert_eq;
use recipe_core::{
    update, AppState, Effect, Msg, Operation, Recipe, RequestFailure, RequestId,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(recipe_logging::initialize_for_tests);
}

fn recipe(id: i64) -> Recipe {
    Recipe::new(id, format!("recipe {id}"))
}

fn recipes(ids: &[i64]) -> Vec<Recipe> {
    ids.iter().copied().map(recipe).collect()
}

fn search_request(effects: &[Effect]) -> (RequestId, String, u32) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SearchRecipes {
                request_id,
                term,
                page,
            } => Some((*request_id, term.clone(), *page)),
            _ => None,
        })
        .expect("search effect")
}

fn loaded(request_id: RequestId, ids: &[i64]) -> Msg {
    Msg::SearchLoaded {
        request_id,
        result: Ok(recipes(ids)),
    }
}

fn search(state: AppState, term: &str, ids: &[i64]) -> AppState {
    let (state, effects) = update(state, Msg::SearchSubmitted(term.to_string()));
    let (request_id, _, _) = search_request(&effects);
    let (state, _) = update(state, loaded(request_id, ids));
    state
}

#[test]
fn pasta_then_load_more_concatenates_pages() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted("pasta".to_string()));
    let (first, term, page) = search_request(&effects);
    assert_eq!(term, "pasta");
    assert_eq!(page, 1);

    let (state, effects) = update(state, loaded(first, &[1, 2]));
    assert!(effects.is_empty());
    assert_eq!(state.search().results(), recipes(&[1, 2]).as_slice());
    assert_eq!(state.search().page(), 1);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (second, term, page) = search_request(&effects);
    assert_eq!(term, "pasta");
    assert_eq!(page, 2);

    let (state, _) = update(state, loaded(second, &[3]));
    assert_eq!(state.search().results(), recipes(&[1, 2, 3]).as_slice());
    assert_eq!(state.search().page(), 2);
    assert_eq!(state.search().term(), "pasta");
}

#[test]
fn successive_load_more_calls_merge_every_page_in_order() {
    init_logging();
    let mut state = search(AppState::new(), "soup", &[1]);
    let mut expected = vec![1];

    for page in 2..=5_i64 {
        let (next, effects) = update(state, Msg::LoadMoreClicked);
        let (request_id, _, requested) = search_request(&effects);
        assert_eq!(i64::from(requested), page);
        let ids = [page * 10, page * 10 + 1];
        expected.extend(ids);
        let (next, _) = update(next, loaded(request_id, &ids));
        state = next;
    }

    assert_eq!(state.search().results(), recipes(&expected).as_slice());
    assert_eq!(state.search().page(), 5);
}

#[test]
fn load_more_while_in_flight_is_a_noop() {
    init_logging();
    let state = search(AppState::new(), "pasta", &[1, 2]);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (request_id, _, page) = search_request(&effects);
    assert_eq!(page, 2);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, loaded(request_id, &[3]));
    assert_eq!(state.search().results(), recipes(&[1, 2, 3]).as_slice());
    assert_eq!(state.search().page(), 2);

    // A duplicate delivery of the same page is dropped.
    let (state, _) = update(state, loaded(request_id, &[3]));
    assert_eq!(state.search().results(), recipes(&[1, 2, 3]).as_slice());
}

#[test]
fn load_more_before_any_search_is_a_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn stale_page_for_old_term_is_discarded() {
    init_logging();
    let state = search(AppState::new(), "pasta", &[1, 2]);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (stale, _, _) = search_request(&effects);

    let (state, effects) = update(state, Msg::SearchSubmitted("curry".to_string()));
    let (fresh, term, page) = search_request(&effects);
    assert_eq!((term.as_str(), page), ("curry", 1));

    let (state, _) = update(state, loaded(fresh, &[7, 8]));
    let (state, _) = update(state, loaded(stale, &[3]));

    assert_eq!(state.search().term(), "curry");
    assert_eq!(state.search().results(), recipes(&[7, 8]).as_slice());
    assert_eq!(state.search().page(), 1);
}

#[test]
fn stale_page_arriving_before_new_search_settles_is_discarded() {
    init_logging();
    let state = search(AppState::new(), "pasta", &[1, 2]);
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (stale, _, _) = search_request(&effects);
    let (state, effects) = update(state, Msg::SearchSubmitted("curry".to_string()));
    let (fresh, _, _) = search_request(&effects);

    let (state, _) = update(state, loaded(stale, &[3]));
    assert_eq!(state.search().results(), recipes(&[1, 2]).as_slice());
    assert_eq!(state.search().pending_term(), Some("curry"));

    let (state, _) = update(state, loaded(fresh, &[9]));
    assert_eq!(state.search().results(), recipes(&[9]).as_slice());
    assert_eq!(state.search().page(), 1);
}

#[test]
fn older_search_response_after_newer_submit_is_discarded() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted("pasta".to_string()));
    let (older, _, _) = search_request(&effects);
    let (state, effects) = update(state, Msg::SearchSubmitted("curry".to_string()));
    let (newer, _, _) = search_request(&effects);

    let (state, _) = update(state, loaded(newer, &[5]));
    let (state, _) = update(state, loaded(older, &[1, 2]));

    assert_eq!(state.search().term(), "curry");
    assert_eq!(state.search().results(), recipes(&[5]).as_slice());
}

#[test]
fn failed_load_more_keeps_state_and_is_reported() {
    init_logging();
    let state = search(AppState::new(), "pasta", &[1, 2]);
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let (request_id, _, _) = search_request(&effects);

    let (mut state, effects) = update(
        state,
        Msg::SearchLoaded {
            request_id,
            result: Err(RequestFailure::new("http status 502")),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.search().results(), recipes(&[1, 2]).as_slice());
    assert_eq!(state.search().page(), 1);
    assert!(state.consume_dirty());

    let reports: Vec<_> = state.failures().cloned().collect();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].operation, Operation::LoadMore);
    assert_eq!(reports[0].failure.message, "http status 502");

    // No automatic retry, but the user may click again.
    let (_, effects) = update(state, Msg::LoadMoreClicked);
    assert_eq!(search_request(&effects).2, 2);
}

#[test]
fn blank_search_is_ignored() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::SearchSubmitted("  ".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
