//! Storefront content and support types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{BlogCategoryId, MailboxId, TenantId};

/// A blog category shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub id: BlogCategoryId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for `POST /blog-categories`, sent as multipart form data.
#[derive(Debug, Clone, Default)]
pub struct BlogCategoryInput {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    /// Image upload as `(file name, bytes)`.
    pub image: Option<(String, Vec<u8>)>,
}

/// Handling state of a support mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailboxStatus {
    #[default]
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

impl MailboxStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }
}

/// A support mailbox that receives customer messages for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportMailbox {
    pub id: MailboxId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: MailboxStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /support-mailbox`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportMailboxInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
