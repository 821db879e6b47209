//! Domain types for the marketplace API.
//!
//! Field names follow the API's `camelCase` JSON; timestamps are UTC.

pub mod access;
pub mod catalog;
pub mod commerce;
pub mod content;
pub mod envelope;
pub mod id;
pub mod payout;
pub mod tenant;
pub mod warehouse;

pub use access::{AssignRoleInput, TenantUser, UserTenantRole};
pub use catalog::{Category, Color, ColorInput, Size, SizeInput};
pub use commerce::{
    CartItem, CartMergeRequest, CartSummary, CheckoutRequest, CheckoutResult, Coupon,
    CouponInput, DiscountType, Shipping,
};
pub use content::{
    BlogCategory, BlogCategoryInput, MailboxStatus, SupportMailbox, SupportMailboxInput,
};
pub use envelope::{ApiResponse, Paginated};
pub use id::*;
pub use payout::{Payout, PayoutInput, PayoutStatus, ReceiverType};
pub use tenant::{AiConfig, Store, Tenant, TenantInput, TenantStatus};
pub use warehouse::{Inventory, InventoryInput, Warehouse, WarehouseInput};
