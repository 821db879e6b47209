//! Storefront categories (read-only).

use tracing::instrument;

use marketplace_core::{Category, Paginated};

use super::ListParams;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/categories`.
#[derive(Debug, Clone, Copy)]
pub struct Categories<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Categories<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `GET /categories`. Resolves to the bare items; pagination metadata is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Category>, ApiError> {
        let request = params.apply(ApiRequest::get("/categories"));
        let fetch = async {
            let page: Paginated<Category> = self.client.http().send(request).await?;
            Ok::<_, ApiError>(page.into_items())
        };
        self.client.query(params.key("categories"), fetch).await
    }
}
