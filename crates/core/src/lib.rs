//! Marketplace Core - Shared domain types.
//!
//! This crate provides the data shapes exchanged with the marketplace REST API:
//! - admin resources (tenants, warehouses, inventory, payouts, coupons, ...)
//! - storefront resources (categories, blog categories, cart)
//! - the two response envelopes every endpoint returns
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no caching.
//! The server is the sole source of truth; values here are materialized
//! transiently from API responses and carry no behavior beyond serde.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, envelopes, and one module per resource family

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
