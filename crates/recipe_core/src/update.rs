use crate::report::Settlement;
use crate::{AppState, Effect, Msg, RequestId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => reload_favourites(&mut state),
        Msg::SearchSubmitted(term) => issue(&mut state, |state, request_id| {
            state.search_mut().submit(request_id, &term)
        }),
        Msg::LoadMoreClicked => issue(&mut state, |state, request_id| {
            state.search_mut().load_more(request_id)
        }),
        Msg::SearchLoaded { request_id, result } => {
            let settlement = state.search_mut().settle(request_id, result);
            absorb(&mut state, settlement);
            Vec::new()
        }
        Msg::FavouritesLoaded { request_id, result } => {
            match state.favourites_mut().settle_load(request_id, result) {
                Settlement::Outdated => reload_favourites(&mut state),
                settlement => {
                    absorb(&mut state, settlement);
                    Vec::new()
                }
            }
        }
        Msg::AddFavouriteClicked(recipe) => issue(&mut state, |state, request_id| {
            state.favourites_mut().add(request_id, recipe)
        }),
        Msg::RemoveFavouriteClicked(recipe) => issue(&mut state, |state, request_id| {
            state.favourites_mut().remove(request_id, recipe)
        }),
        Msg::FavouriteAdded {
            request_id,
            recipe_id,
            result,
        }
        | Msg::FavouriteRemoved {
            request_id,
            recipe_id,
            result,
        } => {
            let settlement = state
                .favourites_mut()
                .settle_toggle(request_id, &recipe_id, result);
            // The server may have applied the change before failing; converge on
            // whatever it now holds.
            let failed = matches!(settlement, Settlement::Failed(_));
            absorb(&mut state, settlement);
            if failed {
                reload_favourites(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::RecipeSelected(recipe) => issue(&mut state, |state, request_id| {
            state.selection_mut().select(request_id, recipe)
        }),
        Msg::ModalDismissed => {
            if state.selection_mut().dismiss() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SummaryLoaded { request_id, result } => {
            let settlement = state.selection_mut().settle_summary(request_id, result);
            absorb(&mut state, settlement);
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.set_tab(tab);
            Vec::new()
        }
    };

    (state, effects)
}

/// Runs a controller operation with the next request id, consuming the id only
/// if the controller actually issued a request.
fn issue(
    state: &mut AppState,
    start: impl FnOnce(&mut AppState, RequestId) -> Option<Effect>,
) -> Vec<Effect> {
    let request_id = state.peek_request_id();
    match start(state, request_id) {
        Some(effect) => {
            state.commit_request_id(request_id);
            state.mark_dirty();
            vec![effect]
        }
        None => Vec::new(),
    }
}

fn reload_favourites(state: &mut AppState) -> Vec<Effect> {
    issue(state, |state, request_id| {
        Some(state.favourites_mut().load(request_id))
    })
}

fn absorb(state: &mut AppState, settlement: Settlement) {
    match settlement {
        Settlement::Applied => state.mark_dirty(),
        Settlement::Failed(report) => state.report_failure(report),
        Settlement::Stale | Settlement::Outdated => {}
    }
}
