//! Warehouses, colors, and categories.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use httpmock::prelude::*;
use marketplace_client::ListParams;
use marketplace_core::{CategoryId, ColorId, ColorInput, WarehouseId, WarehouseInput};
use marketplace_integration_tests::{TestContext, category, color, envelope, page, warehouse};
use serde_json::json;

// ============================================================================
// Warehouses
// ============================================================================

#[tokio::test]
async fn test_warehouse_list_keeps_pagination() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(GET).path("/warehouses").query_param("page", "2");
        then.status(200).json_body(json!({
            "data": [warehouse(11, "North"), warehouse(12, "South")],
            "total": 12,
            "page": 2,
            "pageCount": 2
        }));
    });

    let result = ctx
        .client
        .warehouses()
        .list(&ListParams::default().page(2))
        .await
        .unwrap();

    assert_eq!(result.total, 12);
    assert_eq!(result.page, 2);
    assert_eq!(result.page_count, 2);
    assert_eq!(result.data[1].id, WarehouseId::new(12));
}

#[tokio::test]
async fn test_warehouse_all_sends_search() {
    let ctx = TestContext::new();
    let mock = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/warehouses/all/list")
            .query_param("search", "no");
        then.status(200)
            .json_body(envelope(json!([warehouse(1, "North")])));
    });

    let all = ctx.client.warehouses().all(Some("no")).await.unwrap();

    mock.assert_calls(1);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].code.as_deref(), Some("WH-1"));
}

#[tokio::test]
async fn test_warehouse_create_invalidates_list_and_all() {
    let ctx = TestContext::new();
    let list = ctx.server.mock(|when, then| {
        when.method(GET).path("/warehouses");
        then.status(200).json_body(page(vec![warehouse(1, "North")], 1, 1));
    });
    let all = ctx.server.mock(|when, then| {
        when.method(GET).path("/warehouses/all/list");
        then.status(200)
            .json_body(envelope(json!([warehouse(1, "North")])));
    });
    let detail = ctx.server.mock(|when, then| {
        when.method(GET).path("/warehouses/1");
        then.status(200).json_body(envelope(warehouse(1, "North")));
    });
    let create = ctx.server.mock(|when, then| {
        when.method(POST)
            .path("/warehouses")
            .json_body(json!({"name": "East", "city": "Porto"}));
        then.status(201).json_body(envelope(warehouse(2, "East")));
    });

    let params = ListParams::default();
    let warehouses = ctx.client.warehouses();
    warehouses.list(&params).await.unwrap();
    warehouses.all(None).await.unwrap();
    warehouses.get(WarehouseId::new(1)).await.unwrap();

    let input = WarehouseInput {
        name: "East".to_string(),
        city: Some("Porto".to_string()),
        ..WarehouseInput::default()
    };
    let created = warehouses.create(&input).await.unwrap();

    warehouses.list(&params).await.unwrap();
    warehouses.all(None).await.unwrap();
    warehouses.get(WarehouseId::new(1)).await.unwrap();

    assert_eq!(created.id, WarehouseId::new(2));
    create.assert_calls(1);
    list.assert_calls(2);
    all.assert_calls(2);
    detail.assert_calls(1);
}

// ============================================================================
// Colors
// ============================================================================

#[tokio::test]
async fn test_color_list_keeps_pagination() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(GET).path("/colors");
        then.status(200)
            .json_body(page(vec![color(1, "Red", "#ff0000")], 1, 4));
    });

    let result = ctx
        .client
        .colors()
        .list(&ListParams::default())
        .await
        .unwrap();

    assert_eq!(result.page_count, 4);
    assert!(!result.is_last_page());
    assert_eq!(result.data[0].name, "Red");
}

#[tokio::test]
async fn test_color_create_and_delete_invalidate_list_and_all() {
    let ctx = TestContext::new();
    let list = ctx.server.mock(|when, then| {
        when.method(GET).path("/colors");
        then.status(200)
            .json_body(page(vec![color(1, "Red", "#ff0000")], 1, 1));
    });
    let all = ctx.server.mock(|when, then| {
        when.method(GET).path("/colors/all");
        then.status(200)
            .json_body(envelope(json!([color(1, "Red", "#ff0000")])));
    });
    let create = ctx.server.mock(|when, then| {
        when.method(POST)
            .path("/colors")
            .json_body(json!({"name": "Blue", "code": "#0000ff"}));
        then.status(201)
            .json_body(envelope(color(2, "Blue", "#0000ff")));
    });
    let delete = ctx.server.mock(|when, then| {
        when.method(DELETE).path("/colors/2");
        then.status(200).json_body(envelope(json!(null)));
    });

    let params = ListParams::default();
    let colors = ctx.client.colors();
    colors.list(&params).await.unwrap();
    colors.all(None).await.unwrap();

    let input = ColorInput {
        name: "Blue".to_string(),
        code: Some("#0000ff".to_string()),
    };
    colors.create(&input).await.unwrap();
    colors.list(&params).await.unwrap();
    colors.all(None).await.unwrap();

    colors.delete(ColorId::new(2)).await.unwrap();
    colors.list(&params).await.unwrap();
    colors.all(None).await.unwrap();

    create.assert_calls(1);
    delete.assert_calls(1);
    list.assert_calls(3);
    all.assert_calls(3);
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_category_list_drops_pagination() {
    let ctx = TestContext::new();
    let mock = ctx.server.mock(|when, then| {
        when.method(GET).path("/categories").query_param("limit", "20");
        then.status(200).json_body(json!({
            "data": [category(1, "Apparel", None), category(2, "Shirts", Some(1))],
            "total": 40,
            "page": 1,
            "pageCount": 2
        }));
    });

    let params = ListParams::default().limit(20);
    let categories = ctx.client.categories().list(&params).await.unwrap();
    let cached = ctx.client.categories().list(&params).await.unwrap();

    mock.assert_calls(1);
    assert_eq!(categories, cached);
    assert_eq!(categories.len(), 2);
    assert!(categories[0].is_root());
    assert_eq!(categories[1].parent_id, Some(CategoryId::new(1)));
}
