use crate::{FavouritesState, Msg, Recipe, RecipeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Favourites,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub tab: Tab,
    pub search_term: String,
    pub page: u32,
    pub search_pending: bool,
    pub can_load_more: bool,
    pub favourite_count: usize,
    /// Cards of the active tab, in display order.
    pub cards: Vec<RecipeCardView>,
    pub modal: Option<ModalView>,
    pub last_failure: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardView {
    pub recipe_id: RecipeId,
    pub title: String,
    pub image: Option<String>,
    pub is_favourite: bool,
    /// Message to send when the favourite button is pressed.
    pub toggle: Msg,
    /// Message to send when the card itself is clicked.
    pub open: Msg,
}

impl RecipeCardView {
    pub(crate) fn derive(recipe: &Recipe, favourites: &FavouritesState) -> Self {
        let is_favourite = favourites.is_favourite(&recipe.id);
        let toggle = if is_favourite {
            Msg::RemoveFavouriteClicked(recipe.clone())
        } else {
            Msg::AddFavouriteClicked(recipe.clone())
        };
        Self {
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            is_favourite,
            toggle,
            open: Msg::RecipeSelected(recipe.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub recipe_id: RecipeId,
    pub title: String,
    pub summary: Option<String>,
    pub loading: bool,
}
