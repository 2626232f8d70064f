use recipe_logging::recipe_debug;

use crate::report::Settlement;
use crate::{Effect, FailureReport, Operation, Recipe, RequestFailure, RequestId};

/// The single search request allowed in flight, with the context it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingPage {
    request_id: RequestId,
    term: String,
    page: u32,
}

impl PendingPage {
    fn operation(&self) -> Operation {
        if self.page == 1 {
            Operation::Search
        } else {
            Operation::LoadMore
        }
    }
}

/// Paginated search results for one term.
///
/// `results` is always the concatenation of pages `1..=page` of `term`, in
/// page order. `page` is 0 until the first search settles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    term: String,
    page: u32,
    results: Vec<Recipe>,
    pending: Option<PendingPage>,
}

impl SearchState {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Term of the request in flight, if any. Differs from `term` while a new
    /// search is outstanding.
    pub fn pending_term(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.term.as_str())
    }

    pub fn can_load_more(&self) -> bool {
        self.page > 0 && self.pending.is_none()
    }

    /// Starts a search for `term` at page 1. Any request already in flight is
    /// superseded and its response will be dropped on arrival.
    pub(crate) fn submit(&mut self, request_id: RequestId, term: &str) -> Option<Effect> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }

        let next = PendingPage {
            request_id,
            term: term.to_string(),
            page: 1,
        };
        if let Some(previous) = self.pending.replace(next) {
            recipe_debug!(
                "search request {} for {:?} page {} superseded by {}",
                previous.request_id,
                previous.term,
                previous.page,
                request_id
            );
        }

        Some(Effect::SearchRecipes {
            request_id,
            term: term.to_string(),
            page: 1,
        })
    }

    /// Requests the page after the last merged one. Ignored until a first page
    /// has settled and while any search request is outstanding.
    pub(crate) fn load_more(&mut self, request_id: RequestId) -> Option<Effect> {
        if !self.can_load_more() {
            return None;
        }

        let page = self.page + 1;
        self.pending = Some(PendingPage {
            request_id,
            term: self.term.clone(),
            page,
        });

        Some(Effect::SearchRecipes {
            request_id,
            term: self.term.clone(),
            page,
        })
    }

    pub(crate) fn settle(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Recipe>, RequestFailure>,
    ) -> Settlement {
        let pending = match self.pending.take() {
            Some(pending) if pending.request_id == request_id => pending,
            other => {
                self.pending = other;
                recipe_debug!("dropping stale search response {}", request_id);
                return Settlement::Stale;
            }
        };

        let recipes = match result {
            Ok(recipes) => recipes,
            Err(failure) => {
                return Settlement::Failed(FailureReport {
                    operation: pending.operation(),
                    failure,
                });
            }
        };

        if pending.page == 1 {
            self.term = pending.term;
            self.results = recipes;
        } else {
            self.results.extend(recipes);
        }
        self.page = pending.page;
        Settlement::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes(ids: &[i64]) -> Vec<Recipe> {
        ids.iter().map(|id| Recipe::new(*id, format!("r{id}"))).collect()
    }

    #[test]
    fn blank_terms_are_ignored() {
        let mut search = SearchState::default();
        assert_eq!(search.submit(1, "   "), None);
        assert!(!search.is_pending());
    }

    #[test]
    fn load_more_requires_a_settled_page() {
        let mut search = SearchState::default();
        assert_eq!(search.load_more(1), None);

        search.submit(2, "pasta");
        assert_eq!(search.load_more(3), None);

        assert_eq!(search.settle(2, Ok(recipes(&[1]))), Settlement::Applied);
        assert_eq!(
            search.load_more(4),
            Some(Effect::SearchRecipes {
                request_id: 4,
                term: "pasta".to_string(),
                page: 2,
            })
        );
    }

    #[test]
    fn failed_first_page_keeps_previous_results() {
        let mut search = SearchState::default();
        search.submit(1, "pasta");
        search.settle(1, Ok(recipes(&[1, 2])));

        search.submit(2, "soup");
        let settlement = search.settle(2, Err(RequestFailure::new("http status 500")));

        assert!(matches!(
            settlement,
            Settlement::Failed(FailureReport {
                operation: Operation::Search,
                ..
            })
        ));
        assert_eq!(search.term(), "pasta");
        assert_eq!(search.page(), 1);
        assert_eq!(search.results(), recipes(&[1, 2]).as_slice());
        assert!(!search.is_pending());
    }
}
