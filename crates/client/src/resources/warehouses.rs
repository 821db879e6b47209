//! Warehouses. `list` keeps pagination metadata; the rest unwrap `data`.

use tracing::instrument;

use marketplace_core::{Paginated, Warehouse, WarehouseId, WarehouseInput};

use super::{ListParams, all_query};
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/warehouses`.
#[derive(Debug, Clone, Copy)]
pub struct Warehouses<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Warehouses<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /warehouses`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Warehouse>, ApiError> {
        let request = params.apply(ApiRequest::get("/warehouses"));
        self.client
            .query(params.key("warehouses"), self.client.http().send(request))
            .await
    }

    /// `GET /warehouses/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(
        &self,
        id: impl Into<Option<WarehouseId>>,
    ) -> Result<Option<Warehouse>, ApiError> {
        let Some(id) = id.into().filter(WarehouseId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("warehouse").with(id.as_i64()),
                ApiRequest::get(format!("/warehouses/{id}")),
            )
            .await
            .map(Some)
    }

    /// `GET /warehouses/all/list` for selectors.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn all(&self, search: Option<&str>) -> Result<Vec<Warehouse>, ApiError> {
        let (key, request) = all_query("warehouses-all", "/warehouses/all/list", search);
        self.client.query_data(key, request).await
    }

    /// `POST /warehouses`. Invalidates warehouse lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &WarehouseInput) -> Result<Warehouse, ApiError> {
        let request = ApiRequest::post("/warehouses").json(input)?;
        self.client
            .mutate(
                request,
                &[QueryKey::new("warehouses"), QueryKey::new("warehouses-all")],
            )
            .await
    }
}
