//! Size options.
//!
//! `list` resolves to the bare items (pagination metadata discarded).
//! `delete` does not invalidate anything; callers refresh lists themselves.

use tracing::instrument;

use marketplace_core::{Paginated, Size, SizeId, SizeInput};

use super::{ListParams, all_query};
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/sizes`.
#[derive(Debug, Clone, Copy)]
pub struct Sizes<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Sizes<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /sizes`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Size>, ApiError> {
        let request = params.apply(ApiRequest::get("/sizes"));
        let fetch = async {
            let page: Paginated<Size> = self.client.http().send(request).await?;
            Ok::<_, ApiError>(page.into_items())
        };
        self.client.query(params.key("sizes"), fetch).await
    }

    /// `GET /sizes/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(&self, id: impl Into<Option<SizeId>>) -> Result<Option<Size>, ApiError> {
        let Some(id) = id.into().filter(SizeId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("size").with(id.as_i64()),
                ApiRequest::get(format!("/sizes/{id}")),
            )
            .await
            .map(Some)
    }

    /// `GET /sizes/all` for selectors.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn all(&self, search: Option<&str>) -> Result<Vec<Size>, ApiError> {
        let (key, request) = all_query("sizes-all", "/sizes/all", search);
        self.client.query_data(key, request).await
    }

    /// `POST /sizes`. Invalidates size lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &SizeInput) -> Result<Size, ApiError> {
        let request = ApiRequest::post("/sizes").json(input)?;
        self.client
            .mutate(request, &[QueryKey::new("sizes"), QueryKey::new("sizes-all")])
            .await
    }

    /// `PUT /sizes/:id`. Invalidates the list and this size.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: SizeId, input: &SizeInput) -> Result<Size, ApiError> {
        let request = ApiRequest::put(format!("/sizes/{id}")).json(input)?;
        self.client
            .mutate(
                request,
                &[QueryKey::new("sizes"), QueryKey::new("size").with(id.as_i64())],
            )
            .await
    }

    /// `DELETE /sizes/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: SizeId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(ApiRequest::delete(format!("/sizes/{id}")), &[])
            .await
    }
}
