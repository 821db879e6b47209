//! The marketplace client: shared HTTP adapter + query cache + notifier.
//!
//! Resource families hang off [`MarketplaceClient`] as short-lived accessor
//! structs (`client.tenants().list(..)`), all sharing one cache.

use std::future::Future;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use marketplace_core::ApiResponse;

use crate::cache::{QueryCache, QueryKey};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest};
use crate::notify::{Notifier, TracingNotifier};
use crate::resources::{
    Auth, BlogCategories, Cart, Categories, Colors, Coupons, Inventories, Payouts, Shippings,
    Sizes, SupportMailboxes, Tenants, UserTenantRoles, Warehouses,
};

/// Typed, cached client for the marketplace API.
///
/// Cheap to clone; clones share the HTTP connection pool, cookie store, and
/// query cache.
#[derive(Clone)]
pub struct MarketplaceClient {
    inner: Arc<MarketplaceClientInner>,
}

struct MarketplaceClientInner {
    http: ApiClient,
    cache: QueryCache,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for MarketplaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceClient")
            .field("http", &self.inner.http)
            .field("cache", &self.inner.cache)
            .finish_non_exhaustive()
    }
}

impl MarketplaceClient {
    /// Create a client that reports notifications through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_notifier(config, Arc::new(TracingNotifier))
    }

    /// Create a client with a custom notifier.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_notifier(
        config: &ClientConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            inner: Arc::new(MarketplaceClientInner {
                http: ApiClient::new(config)?,
                cache: QueryCache::new(config.cache_max_capacity, config.cache_ttl),
                notifier,
            }),
        })
    }

    #[must_use]
    pub fn http(&self) -> &ApiClient {
        &self.inner.http
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    pub(crate) fn notifier(&self) -> &dyn Notifier {
        self.inner.notifier.as_ref()
    }

    // =========================================================================
    // Resource families
    // =========================================================================

    #[must_use]
    pub const fn tenants(&self) -> Tenants<'_> {
        Tenants::new(self)
    }

    #[must_use]
    pub const fn warehouses(&self) -> Warehouses<'_> {
        Warehouses::new(self)
    }

    #[must_use]
    pub const fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    #[must_use]
    pub const fn colors(&self) -> Colors<'_> {
        Colors::new(self)
    }

    #[must_use]
    pub const fn sizes(&self) -> Sizes<'_> {
        Sizes::new(self)
    }

    #[must_use]
    pub const fn coupons(&self) -> Coupons<'_> {
        Coupons::new(self)
    }

    #[must_use]
    pub const fn payouts(&self) -> Payouts<'_> {
        Payouts::new(self)
    }

    #[must_use]
    pub const fn shippings(&self) -> Shippings<'_> {
        Shippings::new(self)
    }

    #[must_use]
    pub const fn inventories(&self) -> Inventories<'_> {
        Inventories::new(self)
    }

    #[must_use]
    pub const fn support_mailboxes(&self) -> SupportMailboxes<'_> {
        SupportMailboxes::new(self)
    }

    #[must_use]
    pub const fn blog_categories(&self) -> BlogCategories<'_> {
        BlogCategories::new(self)
    }

    #[must_use]
    pub const fn cart(&self) -> Cart<'_> {
        Cart::new(self)
    }

    #[must_use]
    pub const fn user_tenant_roles(&self) -> UserTenantRoles<'_> {
        UserTenantRoles::new(self)
    }

    #[must_use]
    pub const fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    // =========================================================================
    // Query / mutation plumbing
    // =========================================================================

    /// Serve `key` from the cache, or await `fetch` and cache its result.
    pub(crate) async fn query<T, F>(&self, key: QueryKey, fetch: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<T, ApiError>>,
    {
        if let Some(hit) = self.inner.cache.get::<T>(&key).await {
            return Ok(hit);
        }

        debug!(key = %key, "Cache miss");
        let generation = self.inner.cache.generation();
        let value = fetch.await?;
        self.inner.cache.insert_since(key, &value, generation).await;
        Ok(value)
    }

    /// Send a request whose body is a `{success, message, data}` envelope and
    /// return `data`.
    pub(crate) async fn fetch_data<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let envelope: ApiResponse<T> = self.inner.http.send(request).await?;
        Ok(envelope.into_data())
    }

    /// Cached variant of [`Self::fetch_data`].
    pub(crate) async fn query_data<T>(&self, key: QueryKey, request: ApiRequest) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.query(key, self.fetch_data(request)).await
    }

    /// Run a mutation returning an enveloped entity, then invalidate `keys`.
    pub(crate) async fn mutate<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        invalidates: &[QueryKey],
    ) -> Result<T, ApiError> {
        let data = self.fetch_data(request).await?;
        self.invalidate(invalidates);
        Ok(data)
    }

    /// Run a mutation whose response body is ignored, then invalidate `keys`.
    pub(crate) async fn mutate_empty(
        &self,
        request: ApiRequest,
        invalidates: &[QueryKey],
    ) -> Result<(), ApiError> {
        self.inner.http.send_empty(request).await?;
        self.invalidate(invalidates);
        Ok(())
    }

    /// Mark every query under each prefix stale.
    pub fn invalidate(&self, prefixes: &[QueryKey]) {
        for prefix in prefixes {
            self.inner.cache.invalidate_prefix(prefix);
        }
    }
}
