//! Catalog types: categories, colors, and sizes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ColorId, SizeId, TenantId};

/// A product category.
///
/// Categories form a tree through `parent_id` and `children`. Products are
/// kept opaque; they belong to the product service, not this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub parent_id: Option<CategoryId>,
    #[serde(default)]
    pub children: Vec<Category>,
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Whether this is a top-level category.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Number of categories in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

/// A product color option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: ColorId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    /// Hex code such as `#ff0000`.
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /colors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A product size option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub id: SizeId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /sizes` and `PUT /sizes/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_tree() {
        let category: Category = serde_json::from_value(json!({
            "id": 1,
            "name": "Clothing",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "children": [{
                "id": 2,
                "name": "Shirts",
                "parentId": 1,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z",
                "children": [{
                    "id": 3,
                    "name": "Polo",
                    "parentId": 2,
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }]
            }]
        }))
        .unwrap();

        assert!(category.is_root());
        assert_eq!(category.subtree_len(), 3);
        let shirts = category.children.first().unwrap();
        assert_eq!(shirts.parent_id, Some(CategoryId::new(1)));
        assert!(shirts.products.is_empty());
    }
}
