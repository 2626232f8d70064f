use std::collections::VecDeque;

use recipe_logging::recipe_warn;

use crate::view_model::{AppViewModel, ModalView, RecipeCardView, Tab};
use crate::{FailureReport, FavouritesState, Recipe, RequestId, SearchState, SelectionState};

/// Number of failure reports kept for display and inspection.
pub const FAILURE_HISTORY: usize = 32;

/// Root state: one store per controller plus the active tab.
///
/// Each store is changed only through its own controller methods; this type
/// composes them and derives the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search: SearchState,
    favourites: FavouritesState,
    selection: SelectionState,
    tab: Tab,
    failures: VecDeque<FailureReport>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn favourites(&self) -> &FavouritesState {
        &self.favourites
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Reported failures, oldest first.
    pub fn failures(&self) -> impl Iterator<Item = &FailureReport> + '_ {
        self.failures.iter()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let cards = match self.tab {
            Tab::Search => self.cards(self.search.results().iter()),
            Tab::Favourites => self.cards(self.favourites.recipes()),
        };

        let modal = self.selection.recipe().map(|recipe| ModalView {
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            summary: self.selection.summary().map(|summary| summary.summary.clone()),
            loading: self.selection.is_summary_pending(),
        });

        AppViewModel {
            tab: self.tab,
            search_term: self.search.term().to_string(),
            page: self.search.page(),
            search_pending: self.search.is_pending(),
            can_load_more: self.search.can_load_more(),
            favourite_count: self.favourites.len(),
            cards,
            modal,
            last_failure: self.failures.back().map(ToString::to_string),
            dirty: self.dirty,
        }
    }

    fn cards<'a>(&self, recipes: impl Iterator<Item = &'a Recipe>) -> Vec<RecipeCardView> {
        recipes
            .map(|recipe| RecipeCardView::derive(recipe, &self.favourites))
            .collect()
    }

    /// Id the next issued request will carry. Only `commit_request_id` makes
    /// it used, so ignored user actions do not consume ids.
    pub(crate) fn peek_request_id(&self) -> RequestId {
        self.last_request_id + 1
    }

    pub(crate) fn commit_request_id(&mut self, request_id: RequestId) {
        self.last_request_id = self.last_request_id.max(request_id);
    }

    pub(crate) fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub(crate) fn favourites_mut(&mut self) -> &mut FavouritesState {
        &mut self.favourites
    }

    pub(crate) fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.mark_dirty();
        }
    }

    /// The one place failures are surfaced: logged and kept for the view.
    pub(crate) fn report_failure(&mut self, report: FailureReport) {
        recipe_warn!("{}", report);
        if self.failures.len() == FAILURE_HISTORY {
            self.failures.pop_front();
        }
        self.failures.push_back(report);
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
