//! Warehouse and inventory types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{InventoryId, ProductId, TenantId, WarehouseId};

/// A stock location belonging to a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: WarehouseId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub code: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /warehouses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Stock level of one product variant in one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: InventoryId,
    pub tenant_id: Option<TenantId>,
    pub warehouse_id: WarehouseId,
    pub product_id: ProductId,
    pub sku: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub reserved_quantity: i64,
    /// Threshold below which the item is reported as low stock.
    pub low_stock_threshold: Option<i64>,
    /// Embedded warehouse, when the API joins it.
    pub warehouse: Option<Warehouse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inventory {
    /// Quantity not reserved by pending orders.
    #[must_use]
    pub const fn available(&self) -> i64 {
        self.quantity - self.reserved_quantity
    }

    /// Whether available stock is at or below the low-stock threshold.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold
            .is_some_and(|threshold| self.available() <= threshold)
    }
}

/// Payload for `POST /inventories` and `PUT /inventories/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInput {
    pub warehouse_id: WarehouseId,
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,
}
