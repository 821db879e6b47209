//! Coupons, shipping rates, and cart payloads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CouponId, OrderId, ProductId, ShippingId, TenantId};

/// How a coupon's `value` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
    #[serde(other)]
    Unknown,
}

/// A discount coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: CouponId,
    pub tenant_id: Option<TenantId>,
    pub code: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    pub value: Decimal,
    pub min_order_amount: Option<Decimal>,
    pub usage_limit: Option<i64>,
    #[serde(default)]
    pub used_count: i64,
    pub starts_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /coupons` and `PUT /coupons/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponInput {
    pub code: String,
    pub discount_type: DiscountType,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A shipping rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    pub id: ShippingId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub rate: Decimal,
    pub region: Option<String>,
    pub estimated_days: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Payload for `POST /cart/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CartItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_id: Option<ShippingId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResult {
    pub order_id: OrderId,
    pub status: Option<String>,
    pub total: Option<Decimal>,
    /// Hosted payment page, when payment happens off-site.
    pub payment_url: Option<String>,
}

/// Payload for `POST /cart/merge`: guest cart lines to fold into the
/// signed-in user's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartMergeRequest {
    pub items: Vec<CartItem>,
}

/// Server-side cart after a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub subtotal: Option<Decimal>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coupon_accepts_numeric_and_string_amounts() {
        let coupon: Coupon = serde_json::from_value(json!({
            "id": 42,
            "code": "SPRING",
            "discountType": "fixed",
            "value": 12.5,
            "minOrderAmount": "50.00",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(coupon.discount_type, DiscountType::Fixed);
        assert_eq!(coupon.value, Decimal::new(125, 1));
        assert_eq!(coupon.min_order_amount, Some(Decimal::new(5000, 2)));
        assert_eq!(coupon.used_count, 0);
    }

    #[test]
    fn test_unrecognized_discount_type() {
        let kind: DiscountType = serde_json::from_value(json!("bogo")).unwrap();
        assert_eq!(kind, DiscountType::Unknown);
    }

    #[test]
    fn test_checkout_request_shape() {
        let request = CheckoutRequest {
            items: vec![CartItem {
                product_id: ProductId::new(1),
                quantity: 2,
                variant_id: None,
                price: None,
            }],
            shipping_id: Some(ShippingId::new(4)),
            coupon_code: None,
            shipping_address: None,
            note: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"items": [{"productId": 1, "quantity": 2}], "shippingId": 4})
        );
    }
}
