//! Inventory levels per warehouse.

use tracing::instrument;

use marketplace_core::{Inventory, InventoryId, InventoryInput, OrderId, Paginated, WarehouseId};

use super::ListParams;
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/inventories`.
#[derive(Debug, Clone, Copy)]
pub struct Inventories<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Inventories<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /inventories`, optionally limited to one warehouse.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        params: &ListParams,
        warehouse_id: Option<WarehouseId>,
    ) -> Result<Paginated<Inventory>, ApiError> {
        let key = params
            .key("inventories")
            .with(warehouse_id.map(|id| id.as_i64()));
        let request = params
            .apply(ApiRequest::get("/inventories"))
            .query_opt("warehouseId", warehouse_id);
        self.client
            .query(key, self.client.http().send(request))
            .await
    }

    /// `GET /inventories/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(
        &self,
        id: impl Into<Option<InventoryId>>,
    ) -> Result<Option<Inventory>, ApiError> {
        let Some(id) = id.into().filter(InventoryId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("inventory").with(id.as_i64()),
                ApiRequest::get(format!("/inventories/{id}")),
            )
            .await
            .map(Some)
    }

    /// `POST /inventories`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(warehouse_id = %input.warehouse_id))]
    pub async fn create(&self, input: &InventoryInput) -> Result<Inventory, ApiError> {
        let request = ApiRequest::post("/inventories").json(input)?;
        self.client
            .mutate(request, &[QueryKey::new("inventories")])
            .await
    }

    /// `PUT /inventories/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: InventoryId,
        input: &InventoryInput,
    ) -> Result<Inventory, ApiError> {
        let request = ApiRequest::put(format!("/inventories/{id}")).json(input)?;
        self.client
            .mutate(
                request,
                &[
                    QueryKey::new("inventories"),
                    QueryKey::new("inventory").with(id.as_i64()),
                ],
            )
            .await
    }

    /// `DELETE /inventories/:id`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: InventoryId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(
                ApiRequest::delete(format!("/inventories/{id}")),
                &[QueryKey::new("inventories")],
            )
            .await
    }

    /// `POST /inventories/update-from-order/:orderId`: deduct stock for an
    /// order's lines. Resolves to the inventory rows that changed.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn update_from_order(&self, order_id: OrderId) -> Result<Vec<Inventory>, ApiError> {
        self.client
            .mutate(
                ApiRequest::post(format!("/inventories/update-from-order/{order_id}")),
                &[QueryKey::new("inventories")],
            )
            .await
    }
}
