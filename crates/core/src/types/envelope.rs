//! Response envelopes returned by every API endpoint.
//!
//! Single-entity endpoints wrap their payload as `{success, message, data}`;
//! list endpoints return `{data: T[], total, page, pageCount}`.

use serde::{Deserialize, Serialize};

/// Single-entity envelope: `{success, message, data}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the server considered the call successful.
    #[serde(default = "default_success")]
    pub success: bool,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
    /// The payload.
    pub data: T,
}

const fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    /// Drop the envelope and keep the payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Pagination envelope: `{data: T[], total, page, pageCount}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: u32,
    /// Number of pages available.
    #[serde(default)]
    pub page_count: u32,
}

const fn first_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    /// Whether this is the last available page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.page >= self.page_count
    }

    /// Drop the pagination metadata and keep the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 1,
            page_count: 0,
        }
    }
}
