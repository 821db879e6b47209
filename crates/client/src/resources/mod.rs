//! One accessor family per API resource.
//!
//! Every family follows the same shape where the API supports it:
//!
//! | Operation | Kind | Cache key |
//! |---|---|---|
//! | `list` | query | `[plural, page, limit, search, ..filters]` |
//! | `get` | query, skipped for unset IDs | `[singular, id]` |
//! | `all` | query | `[plural-all, search]` |
//! | `create` / `update` / `delete` | mutation | invalidates list keys |
//!
//! Response unwrapping is per resource and intentionally not uniform; each
//! module documents what its methods resolve to.

mod auth;
mod blog_categories;
mod cart;
mod categories;
mod colors;
mod coupons;
mod inventories;
mod payouts;
mod shippings;
mod sizes;
mod support_mailbox;
mod tenants;
mod user_tenant_roles;
mod warehouses;

pub use auth::{Auth, RegisterRequest, RegisteredUser, UNREACHABLE_MESSAGE};
pub use blog_categories::BlogCategories;
pub use cart::Cart;
pub use categories::Categories;
pub use colors::Colors;
pub use coupons::Coupons;
pub use inventories::Inventories;
pub use payouts::Payouts;
pub use shippings::Shippings;
pub use sizes::Sizes;
pub use support_mailbox::SupportMailboxes;
pub use tenants::Tenants;
pub use user_tenant_roles::UserTenantRoles;
pub use warehouses::Warehouses;

use crate::cache::QueryKey;
use crate::http::ApiRequest;

/// Default page for list queries.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size for list queries.
pub const DEFAULT_LIMIT: u32 = 10;

/// Pagination and search inputs shared by every list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
        }
    }
}

impl ListParams {
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// `[resource, page, limit, search]`; filters are appended by the caller.
    pub(crate) fn key(&self, resource: &str) -> QueryKey {
        QueryKey::new(resource)
            .with(self.page)
            .with(self.limit)
            .with(&self.search)
    }

    /// Add `page`, `limit`, and `search` to the query string.
    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query("page", self.page)
            .query("limit", self.limit)
            .query("search", &self.search)
    }
}

/// Key and request for an `/all` selector endpoint.
pub(crate) fn all_query(resource: &str, path: &str, search: Option<&str>) -> (QueryKey, ApiRequest) {
    let search = search.unwrap_or_default();
    let key = QueryKey::new(resource).with(search);
    let request = ApiRequest::get(path).query("search", search);
    (key, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ListParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);
        assert!(params.search.is_empty());
    }

    #[test]
    fn test_key_and_query() {
        let params = ListParams::default().page(2).limit(5).search("acme");
        assert_eq!(params.key("tenants").to_string(), r#"["tenants",2,5,"acme"]"#);

        let request = params.apply(ApiRequest::get("/tenants"));
        let pairs: Vec<(&str, &str)> = request
            .query_pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("page", "2"), ("limit", "5"), ("search", "acme")]);
    }
}
