use crate::{Recipe, RecipeId, RecipeSummary, RequestFailure, RequestId, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application started; fetch the favourites collection.
    Started,
    /// User submitted a search term.
    SearchSubmitted(String),
    /// User asked for the next page of the current search.
    LoadMoreClicked,
    /// Gateway completion for a search page.
    SearchLoaded {
        request_id: RequestId,
        result: Result<Vec<Recipe>, RequestFailure>,
    },
    /// Gateway completion for the favourites list.
    FavouritesLoaded {
        request_id: RequestId,
        result: Result<Vec<Recipe>, RequestFailure>,
    },
    /// User marked a recipe as favourite.
    AddFavouriteClicked(Recipe),
    /// User unmarked a favourite recipe.
    RemoveFavouriteClicked(Recipe),
    /// Gateway completion for an add request.
    FavouriteAdded {
        request_id: RequestId,
        recipe_id: RecipeId,
        result: Result<(), RequestFailure>,
    },
    /// Gateway completion for a remove request.
    FavouriteRemoved {
        request_id: RequestId,
        recipe_id: RecipeId,
        result: Result<(), RequestFailure>,
    },
    /// User opened a recipe in the detail overlay.
    RecipeSelected(Recipe),
    /// User closed the detail overlay.
    ModalDismissed,
    /// Gateway completion for a recipe summary.
    SummaryLoaded {
        request_id: RequestId,
        result: Result<RecipeSummary, RequestFailure>,
    },
    /// User switched tabs.
    TabSelected(Tab),
}
