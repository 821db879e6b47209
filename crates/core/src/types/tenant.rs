//! Tenant and store types.
//!
//! A tenant is the organization scope most resources are filtered by (via the
//! `x-tenant-id` header); each tenant may expose one storefront.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{StoreId, TenantId};

/// Tenant lifecycle status. Toggled server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
    /// Any status this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl TenantStatus {
    /// Lowercase label as sent by the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Unknown => "unknown",
        }
    }
}

/// A tenant (store owner organization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    /// URL-safe identifier.
    pub slug: Option<String>,
    /// Custom domain, if configured.
    pub domain: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo: Option<String>,
    #[serde(default)]
    pub status: TenantStatus,
    /// The tenant's storefront, when the API embeds it.
    pub store: Option<Store>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tenant's public storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub tenant_id: TenantId,
    pub name: String,
    pub description: Option<String>,
    pub banner: Option<String>,
    pub currency: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /tenants`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Per-tenant assistant configuration from `GET /tenants/:id/ai-config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    pub tenant_id: TenantId,
    #[serde(default)]
    pub enabled: bool,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tenant_from_api_json() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": 3,
            "name": "Acme",
            "slug": "acme",
            "status": "suspended",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(tenant.id, TenantId::new(3));
        assert_eq!(tenant.status, TenantStatus::Suspended);
        assert!(tenant.store.is_none());
        assert!(tenant.domain.is_none());
    }

    #[test]
    fn test_unrecognized_status_still_decodes() {
        let tenant: Tenant = serde_json::from_value(json!({
            "id": 4,
            "name": "Pending Co",
            "status": "pending",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(tenant.status, TenantStatus::Unknown);
        assert_eq!(tenant.status.as_str(), "unknown");
    }

    #[test]
    fn test_tenant_input_omits_unset_fields() {
        let input = TenantInput {
            name: "Acme".to_string(),
            ..TenantInput::default()
        };
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({"name": "Acme"}));
    }
}
