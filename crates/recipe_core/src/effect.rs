use crate::{Recipe, RecipeId, RequestId};

/// Side effects requested by `update`. Every effect carries the request id its
/// completion message must echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SearchRecipes {
        request_id: RequestId,
        term: String,
        page: u32,
    },
    LoadFavourites {
        request_id: RequestId,
    },
    AddFavourite {
        request_id: RequestId,
        recipe: Recipe,
    },
    RemoveFavourite {
        request_id: RequestId,
        recipe_id: RecipeId,
    },
    FetchSummary {
        request_id: RequestId,
        recipe_id: RecipeId,
    },
}

impl Effect {
    pub fn request_id(&self) -> RequestId {
        match self {
            Effect::SearchRecipes { request_id, .. }
            | Effect::LoadFavourites { request_id }
            | Effect::AddFavourite { request_id, .. }
            | Effect::RemoveFavourite { request_id, .. }
            | Effect::FetchSummary { request_id, .. } => *request_id,
        }
    }
}
