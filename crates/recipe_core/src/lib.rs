//! Recipe browser core: pure state machine and view-model helpers.
//!
//! User actions and gateway completions arrive as [`Msg`]s; [`update`] folds
//! them into [`AppState`] and returns the [`Effect`]s the host must run. Every
//! effect carries a request id so late responses can be recognised and dropped.
mod effect;
mod favourites;
mod msg;
mod recipe;
mod report;
mod search;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use favourites::FavouritesState;
pub use msg::Msg;
pub use recipe::{Recipe, RecipeId, RecipeSummary};
pub use report::{FailureReport, Operation, RequestFailure, RequestId};
pub use search::SearchState;
pub use selection::{Selection, SelectionState};
pub use state::{AppState, FAILURE_HISTORY};
pub use update::update;
pub use view_model::{AppViewModel, ModalView, RecipeCardView, Tab};
