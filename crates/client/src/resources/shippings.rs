//! Shipping rates.
//!
//! Unlike every other resource, shipping queries resolve to the whole
//! response body: `list` to the pagination envelope as sent, `get` to the
//! `{success, message, data}` envelope rather than its `data`.

use tracing::instrument;

use marketplace_core::{ApiResponse, Paginated, Shipping, ShippingId};

use super::ListParams;
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/shippings`.
#[derive(Debug, Clone, Copy)]
pub struct Shippings<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Shippings<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /shippings`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Shipping>, ApiError> {
        let request = params.apply(ApiRequest::get("/shippings"));
        self.client
            .query(params.key("shippings"), self.client.http().send(request))
            .await
    }

    /// `GET /shippings/:id`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(
        &self,
        id: impl Into<Option<ShippingId>>,
    ) -> Result<Option<ApiResponse<Shipping>>, ApiError> {
        let Some(id) = id.into().filter(ShippingId::is_set) else {
            return Ok(None);
        };

        let request = ApiRequest::get(format!("/shippings/{id}"));
        self.client
            .query(
                QueryKey::new("shipping").with(id.as_i64()),
                self.client.http().send(request),
            )
            .await
            .map(Some)
    }

    /// `DELETE /shippings/:id`. Invalidates shipping lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ShippingId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(
                ApiRequest::delete(format!("/shippings/{id}")),
                &[QueryKey::new("shippings")],
            )
            .await
    }
}
