use std::fmt;

use recipe_core::{Recipe, RecipeId, RecipeSummary, RequestId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion of a request submitted through [`crate::GatewayHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<Recipe>, GatewayError>,
    },
    FavouritesListed {
        request_id: RequestId,
        result: Result<Vec<Recipe>, GatewayError>,
    },
    FavouriteAdded {
        request_id: RequestId,
        recipe_id: RecipeId,
        result: Result<(), GatewayError>,
    },
    FavouriteRemoved {
        request_id: RequestId,
        recipe_id: RecipeId,
        result: Result<(), GatewayError>,
    },
    SummaryFetched {
        request_id: RequestId,
        result: Result<RecipeSummary, GatewayError>,
    },
}

impl GatewayEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            GatewayEvent::SearchCompleted { request_id, .. }
            | GatewayEvent::FavouritesListed { request_id, .. }
            | GatewayEvent::FavouriteAdded { request_id, .. }
            | GatewayEvent::FavouriteRemoved { request_id, .. }
            | GatewayEvent::SummaryFetched { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: FailureKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}

/// `{ "results": [...] }` envelope used by search and favourites listing.
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeList {
    pub results: Vec<Recipe>,
}

/// Body of add/remove favourite requests.
#[derive(Debug, Serialize)]
pub(crate) struct FavouriteBody<'a> {
    #[serde(rename = "recipeId")]
    pub recipe_id: &'a RecipeId,
}
