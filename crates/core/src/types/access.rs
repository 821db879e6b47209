//! User-to-tenant role assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{RoleId, TenantId};

/// A role a user holds within one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTenantRole {
    pub user_id: String,
    pub tenant_id: TenantId,
    pub role_id: RoleId,
    /// Role name, when the API joins it.
    pub role_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A user listed under `GET /user-tenant-roles/tenant/:tid/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<UserTenantRole>,
}

/// Payload for `POST /user-tenant-roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleInput {
    pub user_id: String,
    pub tenant_id: TenantId,
    pub role_id: RoleId,
}
