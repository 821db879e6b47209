//! Integration tests for the marketplace API client.
//!
//! Every test talks to an in-process `httpmock` server standing in for the
//! marketplace API, so no external services are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `tenants` - Query parameters, caching, and invalidation
//! - `mutations` - Mutation paths and their invalidation rules
//! - `payouts` - Status filtering and user notifications
//! - `shippings` - Whole-envelope responses
//! - `registration` - Error passthrough and unreachable server
//! - `tenancy` - Tenant header propagation
//! - `families` - Defaults, unset IDs, and envelope unwrapping for every resource
//! - `catalog` - Warehouses, colors, and categories
//! - `support` - Support mailbox list shape and invalidation
//! - `cart` - Checkout and merge payloads

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use httpmock::MockServer;
use marketplace_client::{ClientConfig, MarketplaceClient, Notifier};
use serde_json::{Value, json};

/// Timestamp used in all fixtures.
pub const TS: &str = "2024-05-01T10:00:00Z";

/// A mock API server plus a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: MarketplaceClient,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    /// Context using the default tenant.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Context scoped to `tenant_id`.
    #[must_use]
    pub fn with_tenant(tenant_id: &str) -> Self {
        Self::build(Some(tenant_id))
    }

    fn build(tenant_id: Option<&str>) -> Self {
        let server = MockServer::start();
        let mut config = ClientConfig::new(&server.base_url()).unwrap();
        if let Some(tenant_id) = tenant_id {
            config = config.with_tenant_id(tenant_id).unwrap();
        }

        let notifier = Arc::new(RecordingNotifier::default());
        let client = MarketplaceClient::with_notifier(&config, notifier.clone()).unwrap();

        Self {
            server,
            client,
            notifier,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Notifier that keeps every notice for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// `{success, message, data}` envelope.
#[must_use]
pub fn envelope(data: Value) -> Value {
    json!({"success": true, "message": "", "data": data})
}

/// Pagination envelope around `items`.
#[must_use]
pub fn page(items: Vec<Value>, page: u32, page_count: u32) -> Value {
    let total = items.len();
    json!({"data": items, "total": total, "page": page, "pageCount": page_count})
}

#[must_use]
pub fn tenant(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "domain": null,
        "email": format!("owner@{}.test", name.to_lowercase()),
        "phone": null,
        "logo": null,
        "status": "active",
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn size(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "description": null,
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn shipping(id: i64, name: &str, rate: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "rate": rate,
        "region": "EU",
        "estimatedDays": 3,
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn payout(id: i64, amount: &str, status: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "receiverType": "vendor",
        "receiverId": 12,
        "amount": amount,
        "currency": "USD",
        "status": status,
        "method": "bank_transfer",
        "reference": null,
        "note": null,
        "createdAt": TS,
        "updatedAt": TS,
        "processedAt": null
    })
}

#[must_use]
pub fn inventory(id: i64, warehouse_id: i64, quantity: i64) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "warehouseId": warehouse_id,
        "productId": 100 + id,
        "sku": format!("SKU-{id}"),
        "quantity": quantity,
        "reservedQuantity": 0,
        "lowStockThreshold": 5,
        "warehouse": null,
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn warehouse(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "code": format!("WH-{id}"),
        "address": null,
        "city": "Lisbon",
        "country": "PT",
        "phone": null,
        "isActive": true,
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn color(id: i64, name: &str, code: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "code": code,
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn category(id: i64, name: &str, parent_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "slug": name.to_lowercase(),
        "image": null,
        "parentId": parent_id,
        "children": [],
        "products": [],
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn coupon(id: i64, code: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "code": code,
        "discountType": "percentage",
        "value": "10",
        "usedCount": 0,
        "isActive": true,
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn mailbox(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "email": format!("{}@acme.test", name.to_lowercase()),
        "description": null,
        "status": "active",
        "createdAt": TS,
        "updatedAt": TS
    })
}

#[must_use]
pub fn blog_category(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "tenantId": 1,
        "name": name,
        "slug": name.to_lowercase(),
        "description": null,
        "image": null,
        "createdAt": TS,
        "updatedAt": TS
    })
}
