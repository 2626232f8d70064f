use std::time::Duration;

use recipe_core::{Recipe, RecipeId, RecipeSummary};
use recipe_logging::recipe_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::{FavouriteBody, RecipeList};
use crate::{FailureKind, GatewayError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Scheme, host and optional path prefix of the recipe API.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The recipe API as the client sees it. Any non-2xx answer is an error.
#[async_trait::async_trait]
pub trait RecipeGateway: Send + Sync {
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Recipe>, GatewayError>;

    async fn list_favourites(&self) -> Result<Vec<Recipe>, GatewayError>;

    async fn add_favourite(&self, recipe: &Recipe) -> Result<(), GatewayError>;

    async fn remove_favourite(&self, recipe_id: &RecipeId) -> Result<(), GatewayError>;

    async fn recipe_summary(&self, recipe_id: &RecipeId) -> Result<RecipeSummary, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    settings: GatewaySettings,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    /// Builds `{base_url}/api/recipe/{segments..}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| GatewayError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| {
                GatewayError::new(FailureKind::InvalidUrl, "base url cannot carry a path")
            })?
            .pop_if_empty()
            .extend(["api", "recipe"])
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, GatewayError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        recipe_debug!("{} -> {}", response.url(), status);
        if !status.is_success() {
            return Err(GatewayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let response = self.send(self.client.get(url)).await?;
        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl RecipeGateway for ReqwestGateway {
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Recipe>, GatewayError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut()
            .append_pair("searchTerm", term)
            .append_pair("page", &page.to_string());
        let list: RecipeList = self.get_json(url).await?;
        Ok(list.results)
    }

    async fn list_favourites(&self) -> Result<Vec<Recipe>, GatewayError> {
        let url = self.endpoint(&["favourite"])?;
        let list: RecipeList = self.get_json(url).await?;
        Ok(list.results)
    }

    async fn add_favourite(&self, recipe: &Recipe) -> Result<(), GatewayError> {
        let url = self.endpoint(&["favourite"])?;
        let body = FavouriteBody {
            recipe_id: &recipe.id,
        };
        self.send(self.client.post(url).json(&body)).await?;
        Ok(())
    }

    async fn remove_favourite(&self, recipe_id: &RecipeId) -> Result<(), GatewayError> {
        let url = self.endpoint(&["favourite"])?;
        let body = FavouriteBody { recipe_id };
        self.send(self.client.delete(url).json(&body)).await?;
        Ok(())
    }

    async fn recipe_summary(&self, recipe_id: &RecipeId) -> Result<RecipeSummary, GatewayError> {
        let id = recipe_id.to_string();
        let url = self.endpoint(&[id.as_str(), "summary"])?;
        self.get_json(url).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return GatewayError::new(FailureKind::Decode, err.to_string());
    }
    GatewayError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> ReqwestGateway {
        ReqwestGateway::new(GatewaySettings {
            base_url: base_url.to_string(),
            ..GatewaySettings::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let url = gateway("http://example.com/").endpoint(&["search"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/recipe/search");

        let url = gateway("http://example.com/v1").endpoint(&["favourite"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/v1/api/recipe/favourite");
    }

    #[test]
    fn endpoint_encodes_text_ids() {
        let url = gateway("http://example.com")
            .endpoint(&["a b/c", "summary"])
            .unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/recipe/a%20b%2Fc/summary");
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let err = gateway("not a url").endpoint(&["search"]).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
