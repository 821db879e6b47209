//! Storefront cart actions.

use tracing::instrument;

use marketplace_core::{CartMergeRequest, CartSummary, CheckoutRequest, CheckoutResult};

use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/cart`.
#[derive(Debug, Clone, Copy)]
pub struct Cart<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Cart<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `POST /cart/checkout`. Invalidates cached cart data.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResult, ApiError> {
        let request = ApiRequest::post("/cart/checkout").json(request)?;
        self.client.mutate(request, &[QueryKey::new("cart")]).await
    }

    /// `POST /cart/merge`: fold a guest cart into the signed-in user's cart.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn merge(&self, request: &CartMergeRequest) -> Result<CartSummary, ApiError> {
        let request = ApiRequest::post("/cart/merge").json(request)?;
        self.client.mutate(request, &[QueryKey::new("cart")]).await
    }
}
