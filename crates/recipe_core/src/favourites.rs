use std::collections::HashMap;

use recipe_logging::recipe_debug;

use crate::report::Settlement;
use crate::{Effect, FailureReport, Operation, Recipe, RecipeId, RequestFailure, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToggleKind {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingToggle {
    request_id: RequestId,
    kind: ToggleKind,
    recipe: Recipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLoad {
    request_id: RequestId,
    revision: u64,
}

/// The favourites collection as last confirmed by the server.
///
/// Changes are applied only when the server confirms them. At most one add or
/// remove per recipe is in flight; further toggles for that recipe are ignored
/// until it settles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavouritesState {
    order: Vec<RecipeId>,
    recipes: HashMap<RecipeId, Recipe>,
    pending: HashMap<RecipeId, PendingToggle>,
    pending_load: Option<PendingLoad>,
    // Bumped on every confirmed add/remove.
    revision: u64,
}

impl FavouritesState {
    pub fn is_favourite(&self, id: &RecipeId) -> bool {
        self.recipes.contains_key(id)
    }

    /// Favourites in server list order; confirmed additions go last.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.order.iter().filter_map(|id| self.recipes.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_toggle_pending(&self, id: &RecipeId) -> bool {
        self.pending.contains_key(id)
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Requests the full collection. A list request already in flight is
    /// superseded.
    pub(crate) fn load(&mut self, request_id: RequestId) -> Effect {
        self.pending_load = Some(PendingLoad {
            request_id,
            revision: self.revision,
        });
        Effect::LoadFavourites { request_id }
    }

    pub(crate) fn add(&mut self, request_id: RequestId, recipe: Recipe) -> Option<Effect> {
        if self.is_favourite(&recipe.id) || self.is_toggle_pending(&recipe.id) {
            recipe_debug!("add favourite {} ignored", recipe.id);
            return None;
        }

        self.pending.insert(
            recipe.id.clone(),
            PendingToggle {
                request_id,
                kind: ToggleKind::Add,
                recipe: recipe.clone(),
            },
        );
        Some(Effect::AddFavourite { request_id, recipe })
    }

    pub(crate) fn remove(&mut self, request_id: RequestId, recipe: Recipe) -> Option<Effect> {
        if !self.is_favourite(&recipe.id) || self.is_toggle_pending(&recipe.id) {
            recipe_debug!("remove favourite {} ignored", recipe.id);
            return None;
        }

        let recipe_id = recipe.id.clone();
        self.pending.insert(
            recipe_id.clone(),
            PendingToggle {
                request_id,
                kind: ToggleKind::Remove,
                recipe,
            },
        );
        Some(Effect::RemoveFavourite {
            request_id,
            recipe_id,
        })
    }

    pub(crate) fn settle_load(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Recipe>, RequestFailure>,
    ) -> Settlement {
        let pending = match self.pending_load {
            Some(pending) if pending.request_id == request_id => pending,
            _ => {
                recipe_debug!("dropping stale favourites response {}", request_id);
                return Settlement::Stale;
            }
        };
        self.pending_load = None;

        let recipes = match result {
            Ok(recipes) => recipes,
            Err(failure) => {
                return Settlement::Failed(FailureReport {
                    operation: Operation::LoadFavourites,
                    failure,
                });
            }
        };

        if pending.revision != self.revision {
            recipe_debug!(
                "favourites response {} predates a confirmed change; refetching",
                request_id
            );
            return Settlement::Outdated;
        }

        self.order.clear();
        self.recipes.clear();
        for recipe in recipes {
            if !self.recipes.contains_key(&recipe.id) {
                self.order.push(recipe.id.clone());
                self.recipes.insert(recipe.id.clone(), recipe);
            }
        }
        Settlement::Applied
    }

    pub(crate) fn settle_toggle(
        &mut self,
        request_id: RequestId,
        recipe_id: &RecipeId,
        result: Result<(), RequestFailure>,
    ) -> Settlement {
        let toggle = match self.pending.remove(recipe_id) {
            Some(toggle) if toggle.request_id == request_id => toggle,
            other => {
                if let Some(toggle) = other {
                    self.pending.insert(recipe_id.clone(), toggle);
                }
                recipe_debug!("dropping stale favourite response {}", request_id);
                return Settlement::Stale;
            }
        };

        if let Err(failure) = result {
            let operation = match toggle.kind {
                ToggleKind::Add => Operation::AddFavourite,
                ToggleKind::Remove => Operation::RemoveFavourite,
            };
            return Settlement::Failed(FailureReport { operation, failure });
        }

        match toggle.kind {
            ToggleKind::Add => {
                if !self.recipes.contains_key(recipe_id) {
                    self.order.push(recipe_id.clone());
                    self.recipes.insert(recipe_id.clone(), toggle.recipe);
                }
            }
            ToggleKind::Remove => {
                self.recipes.remove(recipe_id);
                self.order.retain(|id| id != recipe_id);
            }
        }
        self.revision += 1;
        Settlement::Applied
    }
}
