//! Tenant administration.
//!
//! - `list` resolves to the pagination envelope.
//! - `get`, `all`, `ai_config`, and mutations resolve to the unwrapped `data`.

use tracing::instrument;

use marketplace_core::{AiConfig, Paginated, Tenant, TenantId, TenantInput};

use super::{ListParams, all_query};
use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/tenants`.
#[derive(Debug, Clone, Copy)]
pub struct Tenants<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Tenants<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    fn list_keys() -> [QueryKey; 2] {
        [QueryKey::new("tenants"), QueryKey::new("tenants-all")]
    }

    /// `GET /tenants`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Tenant>, ApiError> {
        let request = params.apply(ApiRequest::get("/tenants"));
        self.client
            .query(params.key("tenants"), self.client.http().send(request))
            .await
    }

    /// `GET /tenants/:id`. Resolves to `None` without a request when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(&self, id: impl Into<Option<TenantId>>) -> Result<Option<Tenant>, ApiError> {
        let Some(id) = id.into().filter(TenantId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("tenant").with(id.as_i64()),
                ApiRequest::get(format!("/tenants/{id}")),
            )
            .await
            .map(Some)
    }

    /// `GET /tenants/all/list` for selectors.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn all(&self, search: Option<&str>) -> Result<Vec<Tenant>, ApiError> {
        let (key, request) = all_query("tenants-all", "/tenants/all/list", search);
        self.client.query_data(key, request).await
    }

    /// `GET /tenants/:id/ai-config`. Skipped when `id` is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn ai_config(
        &self,
        id: impl Into<Option<TenantId>>,
    ) -> Result<Option<AiConfig>, ApiError> {
        let Some(id) = id.into().filter(TenantId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("tenant-ai-config").with(id.as_i64()),
                ApiRequest::get(format!("/tenants/{id}/ai-config")),
            )
            .await
            .map(Some)
    }

    /// `POST /tenants`. Invalidates tenant lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &TenantInput) -> Result<Tenant, ApiError> {
        let request = ApiRequest::post("/tenants").json(input)?;
        self.client.mutate(request, &Self::list_keys()).await
    }

    /// `DELETE /tenants/:id`. Invalidates tenant lists.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TenantId) -> Result<(), ApiError> {
        self.client
            .mutate_empty(ApiRequest::delete(format!("/tenants/{id}")), &Self::list_keys())
            .await
    }

    /// `PATCH /tenants/:id/toggle-status`. Invalidates the list and this tenant.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: TenantId) -> Result<Tenant, ApiError> {
        self.client
            .mutate(
                ApiRequest::patch(format!("/tenants/{id}/toggle-status")),
                &[
                    QueryKey::new("tenants"),
                    QueryKey::new("tenant").with(id.as_i64()),
                ],
            )
            .await
    }
}
