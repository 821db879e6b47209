//! Color options. `list` keeps pagination metadata; the rest unwrap `data`.

use tracing::instrument;

use marketplace_core::{Color, ColorId, ColorInput, Paginated};

use super::{ListParams, all_query};
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/colors`.
#[derive(Debug, Clone, Copy)]
pub struct Colors<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Colors<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    fn list_keys() -> [QueryKey; 2] {
        [QueryKey::new("colors"), QueryKey::new("colors-all")]
    }

    /// `GET /colors`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Color>, ApiError> {
        let request = params.apply(ApiRequest::get("/colors"));
        self.client
            .query(params.key("colors"), self.client.http().send(request))
            .await
    }

    /// `GET /colors/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(&self, id: impl Into<Option<ColorId>>) -> Result<Option<Color>, ApiError> {
        let Some(id) = id.into().filter(ColorId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("color").with(id.as_i64()),
                ApiRequest::get(format!("/colors/{id}")),
            )
            .await
            .map(Some)
    }

    /// `GET /colors/all` for selectors.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn all(&self, search: Option<&str>) -> Result<Vec<Color>, ApiError> {
        let (key, request) = all_query("colors-all", "/colors/all", search);
        self.client.query_data(key, request).await
    }

    /// `POST /colors`. Invalidates color lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &ColorInput) -> Result<Color, ApiError> {
        let request = ApiRequest::post("/colors").json(input)?;
        self.client.mutate(request, &Self::list_keys()).await
    }

    /// `DELETE /colors/:id`. Invalidates color lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ColorId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(ApiRequest::delete(format!("/colors/{id}")), &Self::list_keys())
            .await
    }
}
