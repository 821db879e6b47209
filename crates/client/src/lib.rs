//! Marketplace Client - typed, cached access to the marketplace REST API.
//!
//! One accessor per endpoint, grouped by resource family. Reads go through a
//! shared query cache keyed by resource name plus parameters; mutations
//! invalidate the key prefixes they affect.
//!
//! ```rust,ignore
//! use marketplace_client::{ClientConfig, ListParams, MarketplaceClient};
//!
//! let client = MarketplaceClient::new(&ClientConfig::from_env()?)?;
//! let page = client.tenants().list(&ListParams::default().search("acme")).await?;
//! ```
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`http`] - Tenant-scoped HTTP adapter
//! - [`cache`] - Query keys and the prefix-invalidated cache
//! - [`resources`] - One accessor family per API resource

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod resources;

pub use cache::{KeyPart, QueryCache, QueryKey};
pub use client::MarketplaceClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{ApiClient, ApiRequest, TENANT_HEADER};
pub use notify::{Notifier, TracingNotifier};
pub use resources::{
    Auth, BlogCategories, Cart, Categories, Colors, Coupons, DEFAULT_LIMIT, DEFAULT_PAGE,
    Inventories, ListParams, Payouts, RegisterRequest, RegisteredUser, Shippings, Sizes,
    SupportMailboxes, Tenants, UNREACHABLE_MESSAGE, UserTenantRoles, Warehouses,
};
