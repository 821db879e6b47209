//! User membership and roles within tenants.

use tracing::instrument;

use marketplace_core::{AssignRoleInput, RoleId, TenantId, TenantUser, UserTenantRole};

use crate::cache::QueryKey;
use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Accessor for `/user-tenant-roles`.
#[derive(Debug, Clone, Copy)]
pub struct UserTenantRoles<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> UserTenantRoles<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    fn affected_keys(user_id: &str, tenant_id: TenantId) -> [QueryKey; 2] {
        [
            QueryKey::new("tenant-users").with(tenant_id.as_i64()),
            QueryKey::new("user-tenant-role")
                .with(user_id)
                .with(tenant_id.as_i64()),
        ]
    }

    /// `GET /user-tenant-roles/tenant/:tid/users`. Skipped when the tenant is unset.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn tenant_users(
        &self,
        tenant_id: impl Into<Option<TenantId>>,
    ) -> Result<Option<Vec<TenantUser>>, ApiError> {
        let Some(tenant_id) = tenant_id.into().filter(TenantId::is_set) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("tenant-users").with(tenant_id.as_i64()),
                ApiRequest::get(format!("/user-tenant-roles/tenant/{tenant_id}/users")),
            )
            .await
            .map(Some)
    }

    /// `GET /user-tenant-roles/user/:uid/tenant/:tid`. Skipped unless both
    /// IDs are set.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip_all)]
    pub async fn get(
        &self,
        user_id: Option<&str>,
        tenant_id: impl Into<Option<TenantId>>,
    ) -> Result<Option<UserTenantRole>, ApiError> {
        let (Some(user_id), Some(tenant_id)) = (
            user_id.filter(|id| !id.is_empty()),
            tenant_id.into().filter(TenantId::is_set),
        ) else {
            return Ok(None);
        };

        self.client
            .query_data(
                QueryKey::new("user-tenant-role")
                    .with(user_id)
                    .with(tenant_id.as_i64()),
                ApiRequest::get(format!(
                    "/user-tenant-roles/user/{user_id}/tenant/{tenant_id}"
                )),
            )
            .await
            .map(Some)
    }

    /// `POST /user-tenant-roles`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn assign(&self, input: &AssignRoleInput) -> Result<UserTenantRole, ApiError> {
        let request = ApiRequest::post("/user-tenant-roles").json(input)?;
        self.client
            .mutate(request, &Self::affected_keys(&input.user_id, input.tenant_id))
            .await
    }

    /// `DELETE /user-tenant-roles/:uid/:tid/:rid`.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        user_id: &str,
        tenant_id: TenantId,
        role_id: RoleId,
    ) -> Result<(), ApiError> {
        self.client
            .mutate_empty(
                ApiRequest::delete(format!(
                    "/user-tenant-roles/{user_id}/{tenant_id}/{role_id}"
                )),
                &Self::affected_keys(user_id, tenant_id),
            )
            .await
    }
}
