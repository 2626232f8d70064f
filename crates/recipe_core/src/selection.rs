use recipe_logging::recipe_debug;

use crate::report::Settlement;
use crate::{
    Effect, FailureReport, Operation, Recipe, RecipeId, RecipeSummary, RequestFailure, RequestId,
};

/// Which recipe, if any, is open in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(RecipeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenRecipe {
    recipe: Recipe,
    summary: Option<RecipeSummary>,
    pending_summary: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    open: Option<OpenRecipe>,
}

impl SelectionState {
    pub fn selection(&self) -> Selection {
        match &self.open {
            Some(open) => Selection::Open(open.recipe.id.clone()),
            None => Selection::Closed,
        }
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.open.as_ref().map(|open| &open.recipe)
    }

    pub fn summary(&self) -> Option<&RecipeSummary> {
        self.open.as_ref().and_then(|open| open.summary.as_ref())
    }

    pub fn is_summary_pending(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.pending_summary.is_some())
    }

    /// Opens `recipe`, replacing whatever was open. Reselecting the recipe that
    /// is already open keeps its summary instead of fetching it again.
    pub(crate) fn select(&mut self, request_id: RequestId, recipe: Recipe) -> Option<Effect> {
        if let Some(open) = &self.open {
            if open.recipe.id == recipe.id
                && (open.summary.is_some() || open.pending_summary.is_some())
            {
                return None;
            }
        }

        let recipe_id = recipe.id.clone();
        self.open = Some(OpenRecipe {
            recipe,
            summary: None,
            pending_summary: Some(request_id),
        });
        Some(Effect::FetchSummary {
            request_id,
            recipe_id,
        })
    }

    /// Returns `false` when nothing was open.
    pub(crate) fn dismiss(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub(crate) fn settle_summary(
        &mut self,
        request_id: RequestId,
        result: Result<RecipeSummary, RequestFailure>,
    ) -> Settlement {
        let open = match self.open.as_mut() {
            Some(open) if open.pending_summary == Some(request_id) => open,
            _ => {
                recipe_debug!("dropping stale summary response {}", request_id);
                return Settlement::Stale;
            }
        };
        open.pending_summary = None;

        match result {
            Ok(summary) => {
                open.summary = Some(summary);
                Settlement::Applied
            }
            Err(failure) => Settlement::Failed(FailureReport {
                operation: Operation::LoadSummary,
                failure,
            }),
        }
    }
}
