//! Payout types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{PayoutId, TenantId};

/// Who receives a payout. Discriminates how `receiver_id` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiverType {
    Tenant,
    Vendor,
    User,
    #[serde(other)]
    Unknown,
}

/// Payout processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PayoutStatus {
    /// Lowercase label as sent by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for PayoutStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown payout status: {other}")),
        }
    }
}

/// A payout to a tenant, vendor, or user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    pub id: PayoutId,
    pub tenant_id: Option<TenantId>,
    pub receiver_type: ReceiverType,
    /// Numeric for tenants, opaque string for users; kept as sent.
    pub receiver_id: serde_json::Value,
    pub amount: Decimal,
    pub currency: Option<String>,
    #[serde(default)]
    pub status: PayoutStatus,
    pub method: Option<String>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /payouts` and `PUT /payouts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutInput {
    pub receiver_type: ReceiverType,
    pub receiver_id: serde_json::Value,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_receiver_type_is_tolerated() {
        let receiver: ReceiverType = serde_json::from_value(json!("affiliate")).unwrap();
        assert_eq!(receiver, ReceiverType::Unknown);
    }

    #[test]
    fn test_processed_payout() {
        let payout: Payout = serde_json::from_value(json!({
            "id": 5,
            "receiverType": "vendor",
            "receiverId": "usr_9",
            "amount": "120.00",
            "status": "completed",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-03T00:00:00Z",
            "processedAt": "2024-01-03T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(payout.receiver_type, ReceiverType::Vendor);
        assert_eq!(payout.receiver_id, json!("usr_9"));
        assert_eq!(payout.status, PayoutStatus::Completed);
        assert!(payout.processed_at.is_some());
    }

    #[test]
    fn test_unrecognized_status_still_decodes() {
        let status: PayoutStatus = serde_json::from_value(json!("on_hold")).unwrap();
        assert_eq!(status, PayoutStatus::Unknown);
        assert_eq!(status.as_str(), "unknown");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Failed".parse::<PayoutStatus>().unwrap(), PayoutStatus::Failed);
        assert!("paid".parse::<PayoutStatus>().is_err());
    }
}
